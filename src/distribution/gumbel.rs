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
use crate::utils::EULER_GAMMA;
use std::cmp::Ordering;
use std::f64::consts::PI;
use std::fmt;

/// Gumbel (type I extreme value) distribution, for maxima.
#[derive(Clone, Debug, PartialEq)]
pub struct Gumbel {
    location: f64,
    scale: f64,
    support: Domain,
}

impl Gumbel {
    pub fn new(location: f64, scale: f64) -> Result<Self, StatsError> {
        ensure_arg!(location.is_finite(), "gumbel location must be finite, got {location}");
        ensure_arg!(
            scale > 0.0 && scale.is_finite(),
            "gumbel scale must be strictly positive, got {scale}"
        );
        Ok(Self {
            location,
            scale,
            support: Domain::real_line(),
        })
    }

    pub fn location(&self) -> f64 {
        self.location
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl FromParams for Gumbel {
    const TYPE_NAME: &'static str = "Gumbel";

    fn from_params(params: &[f64]) -> Result<Self, StatsError> {
        let [location, scale] = positional(Self::TYPE_NAME, params, [Some(0.0), Some(1.0)])?;
        Self::new(location, scale)
    }
}

impl Distribution for Gumbel {
    fn pdf(&self, x: f64) -> f64 {
        match self.support.compare(x) {
            Some(Ordering::Equal) => {
                let z = (x - self.location) / self.scale;
                (-(z + (-z).exp())).exp() / self.scale
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
                let z = (x - self.location) / self.scale;
                (-(-z).exp()).exp()
            }
            None => f64::NAN,
        }
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        self.location - self.scale * (-p.ln()).ln()
    }

    fn mean(&self) -> f64 {
        self.location + self.scale * EULER_GAMMA
    }

    fn variance(&self) -> f64 {
        (PI * self.scale).powi(2) / 6.0
    }

    fn domain(&self) -> Option<&Domain> {
        Some(&self.support)
    }
}

impl fmt::Display for Gumbel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Gumbel(location = {}, scale = {})",
            self.location, self.scale
        )
    }
}
