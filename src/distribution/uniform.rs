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

/// Continuous uniform distribution over the closed interval `[lower, upper]`.
///
/// The bounds may be given in any order, `Uniform::new(10.0, 2.0)` is the same as `Uniform::new(2.0, 10.0)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Uniform {
    lower: f64,
    upper: f64,
    support: Domain,
}

impl Uniform {
    pub fn new(start: f64, finish: f64) -> Result<Self, StatsError> {
        ensure_arg!(
            start.is_finite() && finish.is_finite(),
            "uniform bounds must be finite, got {start} and {finish}"
        );
        let lower = start.min(finish);
        let upper = start.max(finish);
        Ok(Self {
            lower,
            upper,
            support: Domain::closed(lower, upper)?,
        })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }
}

impl FromParams for Uniform {
    const TYPE_NAME: &'static str = "Uniform";

    fn from_params(params: &[f64]) -> Result<Self, StatsError> {
        let [start, finish] = positional(Self::TYPE_NAME, params, [Some(0.0), Some(1.0)])?;
        Self::new(start, finish)
    }
}

impl Distribution for Uniform {
    fn pdf(&self, x: f64) -> f64 {
        match self.support.compare(x) {
            Some(Ordering::Equal) => 1.0 / (self.upper - self.lower),
            Some(_) => 0.0,
            None => f64::NAN,
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        match self.support.compare(x) {
            Some(Ordering::Less) => 0.0,
            Some(Ordering::Greater) => 1.0,
            // Degenerate support: all the mass is on the single point
            Some(Ordering::Equal) if self.upper == self.lower => 1.0,
            Some(Ordering::Equal) => (x - self.lower) / (self.upper - self.lower),
            None => f64::NAN,
        }
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        self.lower + p * (self.upper - self.lower)
    }

    fn mean(&self) -> f64 {
        0.5 * (self.upper + self.lower)
    }

    fn variance(&self) -> f64 {
        (self.upper - self.lower).powi(2) / 12.0
    }

    fn domain(&self) -> Option<&Domain> {
        Some(&self.support)
    }
}

impl fmt::Display for Uniform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Uniform(lower = {}, upper = {})", self.lower, self.upper)
    }
}
