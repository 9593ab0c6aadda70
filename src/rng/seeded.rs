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

use crate::distribution::{
    Bernoulli, Distribution, Exponential, FromParams, Frechet, Gumbel, Laplace, Normal, TwoPoint,
    Uniform, UniformDiscrete, Weibull,
};
use crate::errors::StatsError;
use rand::{Rng, RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;
use std::any::Any;

use super::VariateGenerator;

/// A seeded generator of variates of the bound distribution `D`.
///
/// Draws go through the `rand_distr::Distribution` implementation of `D`: inversion sampling for every family,
/// except for the Normal distribution which uses the ratio-of-uniforms method.
/// Two generators are equal if they are bound to equal distributions and their uniform sources are in the same state.
#[derive(Clone, Debug, PartialEq)]
pub struct SeededRng<D> {
    distribution: D,
    seed: u64,
    source: Pcg64Mcg,
}

pub type UniformRng = SeededRng<Uniform>;
pub type UniformDiscreteRng = SeededRng<UniformDiscrete>;
pub type TwoPointRng = SeededRng<TwoPoint>;
pub type BernoulliRng = SeededRng<Bernoulli>;
pub type ExponentialRng = SeededRng<Exponential>;
pub type LaplaceRng = SeededRng<Laplace>;
pub type WeibullRng = SeededRng<Weibull>;
pub type NormalRng = SeededRng<Normal>;
pub type GumbelRng = SeededRng<Gumbel>;
pub type FrechetRng = SeededRng<Frechet>;

/// Returns the provided seed, or draws a fresh one from the thread local entropy source.
pub(crate) fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(seed) => seed,
        None => {
            let seed = rand::thread_rng().next_u64();
            debug!("no seed provided, using entropy seed {seed}");
            seed
        }
    }
}

impl<D> SeededRng<D>
where
    D: Distribution + FromParams + rand_distr::Distribution<f64>,
{
    /// Binds a new generator to the provided distribution, or to the default distribution of this family if `None`.
    ///
    /// # Errors
    /// `InvalidArgument` if no distribution is provided and this family has no default (e.g. Fréchet).
    pub fn new(distribution: Option<D>, seed: Option<u64>) -> Result<Self, StatsError> {
        let distribution = match distribution {
            Some(distribution) => distribution,
            None => D::from_params(&[])?,
        };
        Ok(Self::from_distribution(distribution, seed))
    }

    pub fn from_distribution(distribution: D, seed: Option<u64>) -> Self {
        let seed = resolve_seed(seed);
        Self {
            distribution,
            seed,
            source: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Draws one variate.
    pub fn rand(&mut self) -> f64 {
        self.source.sample(&self.distribution)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn distribution(&self) -> &D {
        &self.distribution
    }
}

impl UniformDiscreteRng {
    /// The sorted elements this generator draws from.
    pub fn members(&self) -> &[f64] {
        self.distribution.support()
    }
}

impl<D> Iterator for SeededRng<D>
where
    D: Distribution + FromParams + rand_distr::Distribution<f64>,
{
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.rand())
    }
}

impl<D> VariateGenerator for SeededRng<D>
where
    D: Distribution + FromParams + rand_distr::Distribution<f64> + Clone + PartialEq + 'static,
{
    fn rand(&mut self) -> f64 {
        SeededRng::rand(self)
    }

    fn seed(&self) -> u64 {
        self.seed
    }

    fn distribution(&self) -> &dyn Distribution {
        &self.distribution
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn VariateGenerator) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .map_or(false, |other| self == other)
    }
}
