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


/*! # statistical

Probability distributions with closed-form densities, cumulative distribution functions and quantile functions,
and matching seeded pseudo-random variate generators.

Distributions and generators may be created directly, or by name through their registries:

```
use statistical::prelude::*;

let normal = statistical::distribution::create("normal", &[10.0, 2.0]).unwrap();
assert_eq!(normal.quantile(0.5).unwrap(), 10.0);

let mut rng = NormalRng::new(Some(Normal::new(10.0, 2.0).unwrap()), Some(42)).unwrap();
let mut replay = statistical::rng::create("normal", Some(normal.as_ref()), Some(42)).unwrap();
assert_eq!(rng.rand(), replay.rand());
```
*/

/// Supports of the distributions: intervals with open or closed bounds and arbitrary exclusions.
pub mod domain;

/// The distributions and the distribution registry.
pub mod distribution;

/// Seeded variate generators and the generator registry.
pub mod rng;

/// YAML configuration of distributions and generators.
pub mod config;

/// Statically allocated polynomials and rational functions.
pub mod polynomial;

/// Utility functions shared by different modules.
pub mod utils;

mod errors;
/// Functions which may fail return a `StatsError`, whose `kind` tells invalid input apart from an out of range probability.
pub use self::errors::{ErrorKind, StatsError};

#[macro_use]
extern crate log;

/// Re-export some useful things
pub mod prelude {
    pub use crate::config::{ConfigRepr, DistributionConfig, RngConfig};
    pub use crate::distribution::{
        Bernoulli, Distribution, Exponential, FromParams, Frechet, Gumbel, Laplace, Normal,
        TwoPoint, Uniform, UniformDiscrete, Weibull,
    };
    pub use crate::domain::{Domain, DomainType, Exclusion};
    pub use crate::rng::{
        BernoulliRng, ExponentialRng, FrechetRng, GumbelRng, LaplaceRng, NormalRng, SeededRng,
        TwoPointRng, UniformDiscreteRng, UniformRng, VariateGenerator, WeibullRng,
    };
    pub use crate::{ErrorKind, StatsError};
}
