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
use statrs::function::gamma::gamma;
use std::cmp::Ordering;
use std::fmt;

/// Fréchet (type II extreme value) distribution of shape α, supported on `(location, +inf)`.
///
/// The distribution is heavy tailed: the mean is infinite for α <= 1 and the variance is infinite for α <= 2.
#[derive(Clone, Debug, PartialEq)]
pub struct Frechet {
    shape: f64,
    location: f64,
    scale: f64,
    support: Domain,
}

impl Frechet {
    pub fn new(shape: f64, location: f64, scale: f64) -> Result<Self, StatsError> {
        ensure_arg!(
            shape > 0.0 && shape.is_finite(),
            "frechet shape must be strictly positive, got {shape}"
        );
        ensure_arg!(
            scale > 0.0 && scale.is_finite(),
            "frechet scale must be strictly positive, got {scale}"
        );
        ensure_arg!(location.is_finite(), "frechet location must be finite, got {location}");
        Ok(Self {
            shape,
            location,
            scale,
            support: Domain::open(location, f64::INFINITY)?,
        })
    }

    pub fn shape(&self) -> f64 {
        self.shape
    }

    pub fn location(&self) -> f64 {
        self.location
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl FromParams for Frechet {
    const TYPE_NAME: &'static str = "Frechet";

    /// Parameters are the shape (mandatory), the location and the scale.
    fn from_params(params: &[f64]) -> Result<Self, StatsError> {
        let [shape, location, scale] =
            positional(Self::TYPE_NAME, params, [None, Some(0.0), Some(1.0)])?;
        Self::new(shape, location, scale)
    }
}

impl Distribution for Frechet {
    fn pdf(&self, x: f64) -> f64 {
        match self.support.compare(x) {
            Some(Ordering::Equal) => {
                let xs = (x - self.location) / self.scale;
                (self.shape / self.scale)
                    * xs.powf(-1.0 - self.shape)
                    * (-xs.powf(-self.shape)).exp()
            }
            Some(_) => 0.0,
            None => f64::NAN,
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        match self.support.compare(x) {
            Some(Ordering::Less) => 0.0,
            Some(Ordering::Greater) => 1.0,
            Some(Ordering::Equal) => {
                let xs = (x - self.location) / self.scale;
                (-xs.powf(-self.shape)).exp()
            }
            None => f64::NAN,
        }
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        if p >= 1.0 {
            return f64::INFINITY;
        }
        self.location + self.scale * (-p.ln()).powf(-self.shape.recip())
    }

    fn mean(&self) -> f64 {
        if self.shape > 1.0 {
            self.location + self.scale * gamma(1.0 - self.shape.recip())
        } else {
            f64::INFINITY
        }
    }

    fn variance(&self) -> f64 {
        if self.shape > 2.0 {
            let g1 = gamma(1.0 - self.shape.recip());
            let g2 = gamma(1.0 - 2.0 / self.shape);
            self.scale.powi(2) * (g2 - g1 * g1)
        } else {
            f64::INFINITY
        }
    }

    fn domain(&self) -> Option<&Domain> {
        Some(&self.support)
    }
}

impl fmt::Display for Frechet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Frechet(shape = {}, location = {}, scale = {})",
            self.shape, self.location, self.scale
        )
    }
}
