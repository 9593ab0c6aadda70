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


//! Seeded pseudo-random variate generators, one per distribution family, and the registry to create them by name.

use crate::distribution::{
    canonical_key, Bernoulli, Distribution, Exponential, FromParams, Frechet, Gumbel, Laplace,
    Normal, TwoPoint, Uniform, UniformDiscrete, Weibull, DEFAULT_TYPE,
};
use crate::errors::{StatsError, TypeMismatchSnafu};
use lazy_static::lazy_static;
use snafu::OptionExt;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

mod seeded;

pub use seeded::{
    BernoulliRng, ExponentialRng, FrechetRng, GumbelRng, LaplaceRng, NormalRng, SeededRng,
    TwoPointRng, UniformDiscreteRng, UniformRng, WeibullRng,
};

/// Object safe interface of the generators, as returned by [`create`].
pub trait VariateGenerator: fmt::Debug + Send + Sync {
    /// Draws one variate, advancing the uniform source.
    fn rand(&mut self) -> f64;

    /// The seed this generator was initialized with.
    fn seed(&self) -> u64;

    fn distribution(&self) -> &dyn Distribution;

    /// Name of the bound distribution family.
    fn type_name(&self) -> &'static str {
        self.distribution().type_name()
    }

    fn as_any(&self) -> &dyn Any;

    fn dyn_eq(&self, other: &dyn VariateGenerator) -> bool;
}

impl PartialEq for dyn VariateGenerator {
    fn eq(&self, other: &Self) -> bool {
        self.dyn_eq(other)
    }
}

type RngConstructor =
    fn(Option<&dyn Distribution>, Option<u64>) -> Result<Box<dyn VariateGenerator>, StatsError>;

fn bind<D>(
    distribution: Option<&dyn Distribution>,
    seed: Option<u64>,
) -> Result<Box<dyn VariateGenerator>, StatsError>
where
    D: Distribution + FromParams + rand_distr::Distribution<f64> + Clone + PartialEq + 'static,
{
    let distribution = distribution
        .map(|dist| {
            dist.as_any()
                .downcast_ref::<D>()
                .cloned()
                .context(TypeMismatchSnafu {
                    expected: D::TYPE_NAME,
                    found: dist.type_name(),
                })
        })
        .transpose()?;
    Ok(Box::new(SeededRng::<D>::new(distribution, seed)?))
}

fn registration<D>() -> (String, RngConstructor)
where
    D: Distribution + FromParams + rand_distr::Distribution<f64> + Clone + PartialEq + 'static,
{
    (canonical_key(D::TYPE_NAME), bind::<D>)
}

lazy_static! {
    static ref RNG_TYPES: HashMap<String, RngConstructor> = {
        let types: HashMap<String, RngConstructor> = [
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
        debug!("generator registry built with {} types", types.len());
        types
    };
}

/// Returns the sorted list of registered generator keys, identical to the distribution keys.
pub fn registered_types() -> Vec<&'static str> {
    let mut keys: Vec<&'static str> = RNG_TYPES.keys().map(|k| k.as_str()).collect();
    keys.sort_unstable();
    keys
}

/// Creates the generator registered under `type_key`, bound to `distribution` (or to the family's default if `None`),
/// and seeded with `seed` (or with a fresh entropy seed if `None`).
///
/// # Errors
/// + `InvalidArgument` if the key is not registered, or if no distribution is provided and the family has no default;
/// + `TypeMismatch` if the distribution is not of the family registered under `type_key`.
pub fn create(
    type_key: &str,
    distribution: Option<&dyn Distribution>,
    seed: Option<u64>,
) -> Result<Box<dyn VariateGenerator>, StatsError> {
    let key = canonical_key(type_key);
    let constructor = RNG_TYPES
        .get(&key)
        .ok_or_else(|| StatsError::InvalidArgument {
            msg: format!(
                "no generator registered under `{type_key}`, expected one of {}",
                registered_types().join(", ")
            ),
        })?;
    let rng = constructor(distribution, seed)?;
    trace!("created generator for {} with seed {}", rng.distribution(), rng.seed());
    Ok(rng)
}

/// Creates a generator of the default family, see [`DEFAULT_TYPE`].
pub fn create_default(seed: Option<u64>) -> Result<Box<dyn VariateGenerator>, StatsError> {
    create(DEFAULT_TYPE, None, seed)
}
