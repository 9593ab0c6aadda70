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
use crate::domain::Domain;
use crate::errors::{ensure_arg, StatsError};
use std::cmp::Ordering;
use std::fmt;

/// Laplace, or double exponential, distribution.
#[derive(Clone, Debug, PartialEq)]
pub struct Laplace {
    scale: f64,
    location: f64,
    support: Domain,
}

impl Laplace {
    pub fn new(scale: f64, location: f64) -> Result<Self, StatsError> {
        ensure_arg!(
            scale > 0.0 && scale.is_finite(),
            "laplace scale must be strictly positive, got {scale}"
        );
        ensure_arg!(location.is_finite(), "laplace location must be finite, got {location}");
        Ok(Self {
            scale,
            location,
            support: Domain::real_line(),
        })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn location(&self) -> f64 {
        self.location
    }
}

impl FromParams for Laplace {
    const TYPE_NAME: &'static str = "Laplace";

    /// Parameters are the scale then the location.
    fn from_params(params: &[f64]) -> Result<Self, StatsError> {
        let [scale, location] = positional(Self::TYPE_NAME, params, [Some(1.0), Some(0.0)])?;
        Self::new(scale, location)
    }
}

impl Distribution for Laplace {
    fn pdf(&self, x: f64) -> f64 {
        match self.support.compare(x) {
            Some(Ordering::Equal) => {
                (-(x - self.location).abs() / self.scale).exp() / (2.0 * self.scale)
            }
            Some(_) => 0.0,
            None => f64::NAN,
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        match self.support.compare(x) {
            Some(Ordering::Less) => 0.0,
            Some(Ordering::Greater) => 1.0,
            Some(Ordering::Equal) if x < self.location => {
                0.5 * ((x - self.location) / self.scale).exp()
            }
            Some(Ordering::Equal) => 1.0 - 0.5 * ((self.location - x) / self.scale).exp(),
            None => f64::NAN,
        }
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        if p == 0.5 {
            self.location
        } else if p < 0.5 {
            self.location + self.scale * (2.0 * p).ln()
        } else {
            self.location - self.scale * (2.0 * (1.0 - p)).ln()
        }
    }

    fn mean(&self) -> f64 {
        self.location
    }

    fn variance(&self) -> f64 {
        2.0 * self.scale.powi(2)
    }

    fn domain(&self) -> Option<&Domain> {
        Some(&self.support)
    }
}

impl fmt::Display for Laplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Laplace(scale = {}, location = {})",
            self.scale, self.location
        )
    }
}
