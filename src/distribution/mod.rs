/*
    Statistical, probability distributions and seeded variate generators
    Copyright (C) 2018-onwards Christopher Rabotin <christopher.rabotin@gmail.com>

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

//! Probability distributions exposing a uniform analytical interface, and the registry to create them by name.

use crate::domain::Domain;
use crate::errors::{RangeViolationSnafu, StatsError};
use heck::ToSnakeCase;
use lazy_static::lazy_static;
use rand::Rng;
use snafu::ensure;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

mod exponential;
mod frechet;
mod gumbel;
mod laplace;
mod normal;
mod two_point;
mod uniform;
mod uniform_discrete;
mod weibull;

pub use exponential::Exponential;
pub use frechet::Frechet;
pub use gumbel::Gumbel;
pub use laplace::Laplace;
pub use normal::{ratio_of_uniforms, standard_normal_quantile, Normal};
pub use two_point::{Bernoulli, TwoPoint};
pub use uniform::Uniform;
pub use uniform_discrete::{UniformDiscrete, MAX_EXACT_INTEGER};
pub use weibull::Weibull;

/// Key used by [`create`] when the caller has no preference.
pub const DEFAULT_TYPE: &str = "uniform";

/// The analytical interface shared by all distributions.
///
/// Equality between trait objects is structural: same concrete type and same parameters.
pub trait Distribution: DynDistribution + fmt::Debug + fmt::Display + Send + Sync {
    /// Probability density (or mass) at `x`, zero outside of the support.
    fn pdf(&self, x: f64) -> f64;

    /// Cumulative probability up to and including `x`.
    fn cdf(&self, x: f64) -> f64;

    /// Inverse of the CDF, `p` is assumed to be within [0, 1].
    fn inverse_cdf(&self, p: f64) -> f64;

    /// Inverse of the CDF.
    ///
    /// # Errors
    /// `RangeViolation` if `p` is not in [0, 1]; the probability is never clamped.
    fn quantile(&self, p: f64) -> Result<f64, StatsError> {
        ensure!((0.0..=1.0).contains(&p), RangeViolationSnafu { p });
        Ok(self.inverse_cdf(p))
    }

    /// Alias of [`Distribution::quantile`].
    fn p_value(&self, p: f64) -> Result<f64, StatsError> {
        self.quantile(p)
    }

    fn mean(&self) -> f64;

    fn variance(&self) -> f64;

    /// Support of continuous distributions, `None` for discrete ones.
    fn domain(&self) -> Option<&Domain> {
        None
    }
}

/// Object safe helpers, implemented for every registered distribution.
pub trait DynDistribution: Any {
    /// Name of the distribution family in declaration case, e.g. `UniformDiscrete`.
    fn type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn dyn_eq(&self, other: &dyn Distribution) -> bool;

    fn clone_box(&self) -> Box<dyn Distribution>;
}

impl<T> DynDistribution for T
where
    T: Distribution + FromParams + Clone + PartialEq + 'static,
{
    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn Distribution) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |other| self == other)
    }

    fn clone_box(&self) -> Box<dyn Distribution> {
        Box::new(self.clone())
    }
}

impl PartialEq for dyn Distribution {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other)
    }
}

impl Clone for Box<dyn Distribution> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Construction from positional parameters, used by the registries.
pub trait FromParams: Sized {
    /// Declaration case name, the registry key is derived from it.
    const TYPE_NAME: &'static str;

    /// Builds a new instance; missing trailing parameters take their default value.
    /// An empty slice yields the default distribution, if this family has one.
    fn from_params(params: &[f64]) -> Result<Self, StatsError>;
}

/// Fills the positional parameters, a `None` default marks a mandatory parameter.
pub(crate) fn positional<const N: usize>(
    type_name: &str,
    params: &[f64],
    defaults: [Option<f64>; N],
) -> Result<[f64; N], StatsError> {
    if params.len() > N {
        return Err(StatsError::InvalidArgument {
            msg: format!(
                "{type_name} takes at most {N} parameters, {} given",
                params.len()
            ),
        });
    }
    let mut values = [0.0; N];
    for (i, default) in defaults.into_iter().enumerate() {
        values[i] = match params.get(i).copied().or(default) {
            Some(value) => value,
            None => {
                return Err(StatsError::InvalidArgument {
                    msg: format!("{type_name} parameter #{} is mandatory", i + 1),
                })
            }
        };
    }
    Ok(values)
}

/// Converts a user provided type key into its canonical registry form, e.g. `UniformDiscrete` or `:uniform-discrete` into `uniform_discrete`.
pub fn canonical_key(type_key: &str) -> String {
    type_key.trim().trim_start_matches(':').to_snake_case()
}

type Constructor = fn(&[f64]) -> Result<Box<dyn Distribution>, StatsError>;

fn construct<D>(params: &[f64]) -> Result<Box<dyn Distribution>, StatsError>
where
    D: Distribution + FromParams + Clone + PartialEq + 'static,
{
    Ok(Box::new(D::from_params(params)?))
}

fn registration<D>() -> (String, Constructor)
where
    D: Distribution + FromParams + Clone + PartialEq + 'static,
{
    (canonical_key(D::TYPE_NAME), construct::<D>)
}

lazy_static! {
    static ref DISTRIBUTION_TYPES: HashMap<String, Constructor> = {
        let types: HashMap<String, Constructor> = [
            registration::<Uniform>(),
            registration::<UniformDiscrete>(),
            registration::<TwoPoint>(),
            registration::<Bernoulli>(),
            registration::<Exponential>(),
            registration::<Laplace>(),
            registration::<Weibull>(),
            registration::<Normal>(),
            registration::<Gumbel>(),
            registration::<Frechet>(),
        ]
        .into_iter()
        .collect();
        debug!("distribution registry built with {} types", types.len());
        types
    };
}

/// Returns the sorted list of registered distribution keys.
pub fn registered_types() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = DISTRIBUTION_TYPES.keys().map(|k| k.as_str()).collect();
    keys.sort_unstable();
    keys
}

/// Creates the distribution registered under `type_key` from positional parameters.
///
/// # Errors
/// `InvalidArgument` if the key is not registered or if the parameters are invalid for that distribution.
pub fn create(type_key: &str, params: &[f64]) -> Result<Box<dyn Distribution>, StatsError> {
    let key = canonical_key(type_key);
    let constructor = DISTRIBUTION_TYPES
        .get(&key)
        .ok_or_else(|| StatsError::InvalidArgument {
            msg: format!(
                "no distribution registered under `{type_key}`, expected one of {}",
                registered_types().join(", ")
            ),
        })?;
    let distribution = constructor(params)?;
    trace!("created {distribution}");
    Ok(distribution)
}

/// Inversion sampling: any distribution with a quantile function can be sampled by any `rand::Rng`.
macro_rules! impl_inversion_sampling {
    ($($dist:ty),+) => {
        $(
            impl rand_distr::Distribution<f64> for $dist {
                fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
                    Distribution::inverse_cdf(self, rng.gen::<f64>())
                }
            }
        )+
    };
}

impl_inversion_sampling!(
    Uniform,
    UniformDiscrete,
    TwoPoint,
    Bernoulli,
    Exponential,
    Laplace,
    Weibull,
    Gumbel,
    Frechet
);
