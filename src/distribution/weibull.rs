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

use super::{positional, Distribution, FromParams};
use crate::domain::{Domain, DomainType};
use crate::errors::{ensure_arg, StatsError};
use statrs::function::gamma::gamma;
use std::cmp::Ordering;
use std::fmt;

/// Weibull distribution of scale λ and shape k, over `[0, +inf)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Weibull {
    scale: f64,
    shape: f64,
    support: Domain,
}

impl Weibull {
    pub fn new(scale: f64, shape: f64) -> Result<Self, StatsError> {
        ensure_arg!(
            scale > 0.0 && scale.is_finite(),
            "weibull scale must be strictly positive, got {scale}"
        );
        ensure_arg!(
            shape > 0.0 && shape.is_finite(),
            "weibull shape must be strictly positive, got {shape}"
        );
        Ok(Self {
            scale,
            shape,
            support: Domain::new(0.0, f64::INFINITY, DomainType::RightOpen, &[])?,
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn shape(&self) -> f64 {
        self.shape
    }
}

impl FromParams for Weibull {
    const TYPE_NAME: &'static str = "Weibull";

    /// Parameters are the scale then the shape.
    fn from_params(params: &[f64]) -> Result<Self, StatsError> {
        let [scale, shape] = positional(Self::TYPE_NAME, params, [Some(1.0), Some(1.0)])?;
        Self::new(scale, shape)
    }
}

impl Distribution for Weibull {
    /// At zero, the density is infinite for a shape below one and `1/λ` for a shape of exactly one.
    fn pdf(&self, x: f64) -> f64 {
        match self.support.compare(x) {
            Some(Ordering::Equal) => {
                let z = x / self.scale;
                (self.shape / self.scale) * z.powf(self.shape - 1.0) * (-z.powf(self.shape)).exp()
            }
            Some(_) => 0.0,
            None => f64::NAN,
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        match self.support.compare(x) {
            Some(Ordering::Less) => 0.0,
            Some(Ordering::Greater) => 1.0,
            Some(Ordering::Equal) => -(-(x / self.scale).powf(self.shape)).exp_m1(),
            None => f64::NAN,
        }
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        self.scale * (-(-p).ln_1p()).powf(self.shape.recip())
    }

    fn mean(&self) -> f64 {
        self.scale * gamma(1.0 + self.shape.recip())
    }

    fn variance(&self) -> f64 {
        self.scale.powi(2) * gamma(1.0 + 2.0 / self.shape) - self.mean().powi(2)
    }

    fn domain(&self) -> Option<&Domain> {
        Some(&self.support)
    }
}

impl fmt::Display for Weibull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Weibull(scale = {}, shape = {})", self.scale, self.shape)
    }
}
