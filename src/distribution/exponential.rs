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
use std::cmp::Ordering;
use std::fmt;

/// Exponential distribution of rate λ over `[0, +inf)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Exponential {
    rate: f64,
    support: Domain,
}

impl Exponential {
    pub fn new(rate: f64) -> Result<Self, StatsError> {
        ensure_arg!(
            rate > 0.0 && rate.is_finite(),
            "exponential rate must be strictly positive, got {rate}"
        );
        Ok(Self {
            rate,
            support: Domain::new(0.0, f64::INFINITY, DomainType::RightOpen, &[])?,
        })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }
}

impl FromParams for Exponential {
    const TYPE_NAME: &'static str = "Exponential";

    fn from_params(params: &[f64]) -> Result<Self, StatsError> {
        let [rate] = positional(Self::TYPE_NAME, params, [Some(1.0)])?;
        Self::new(rate)
    }
}

impl Distribution for Exponential {
    fn pdf(&self, x: f64) -> f64 {
        match self.support.compare(x) {
            Some(Ordering::Equal) => self.rate * (-self.rate * x).exp(),
            Some(_) => 0.0,
            None => f64::NAN,
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        match self.support.compare(x) {
            Some(Ordering::Less) => 0.0,
            Some(Ordering::Greater) => 1.0,
            Some(Ordering::Equal) => -(-self.rate * x).exp_m1(),
            None => f64::NAN,
        }
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        -(-p).ln_1p() / self.rate
    }

    fn mean(&self) -> f64 {
        self.rate.recip()
    }

    fn variance(&self) -> f64 {
        self.rate.powi(-2)
    }

    fn domain(&self) -> Option<&Domain> {
        Some(&self.support)
    }
}

impl fmt::Display for Exponential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Exponential(rate = {})", self.rate)
    }
}
