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
use crate::errors::{ensure_arg, StatsError};
use std::fmt;

/// Two-point distribution: a generalization of Bernoulli with arbitrary numeric labels for the failure and success outcomes.
///
/// The failure state must be strictly smaller than the success state, so the CDF is a proper step function.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TwoPoint {
    p: f64,
    failure_state: f64,
    success_state: f64,
}

impl TwoPoint {
    pub fn new(
        success_probability: f64,
        failure_state: f64,
        success_state: f64,
    ) -> Result<Self, StatsError> {
        ensure_arg!(
            (failure_state + success_state).is_finite(),
            "states must be finite numbers, found {failure_state} and {success_state}"
        );
        ensure_arg!(
            failure_state != success_state,
            "success and failure must be two distinct states"
        );
        ensure_arg!(
            failure_state < success_state,
            "failure state ({failure_state}) must be smaller than the success state ({success_state})"
        );
        ensure_arg!(
            (0.0..=1.0).contains(&success_probability),
            "probability of success must be within [0, 1], found {success_probability}"
        );
        Ok(Self {
            p: success_probability,
            failure_state,
            success_state,
        })
    }

    /// Probability of the success state
    pub fn p(&self) -> f64 {
        self.p
    }

    /// Probability of the failure state
    pub fn q(&self) -> f64 {
        1.0 - self.p
    }

    pub fn failure_state(&self) -> f64 {
        self.failure_state
    }

    pub fn success_state(&self) -> f64 {
        self.success_state
    }

    /// The two states, sorted.
    pub fn support(&self) -> [f64; 2] {
        [self.failure_state, self.success_state]
    }
}

impl FromParams for TwoPoint {
    const TYPE_NAME: &'static str = "TwoPoint";

    /// Parameters are the success probability, the failure state and the success state.
    fn from_params(params: &[f64]) -> Result<Self, StatsError> {
        let [p, failure, success] =
            positional(Self::TYPE_NAME, params, [Some(0.5), Some(0.0), Some(1.0)])?;
        Self::new(p, failure, success)
    }
}

impl Distribution for TwoPoint {
    fn pdf(&self, x: f64) -> f64 {
        if x == self.success_state {
            self.p
        } else if x == self.failure_state {
            self.q()
        } else {
            0.0
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < self.failure_state {
            0.0
        } else if x < self.success_state {
            self.q()
        } else {
            1.0
        }
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        if p <= self.q() {
            self.failure_state
        } else {
            self.success_state
        }
    }

    fn mean(&self) -> f64 {
        self.failure_state + self.p * (self.success_state - self.failure_state)
    }

    fn variance(&self) -> f64 {
        self.p * self.q() * (self.success_state - self.failure_state).powi(2)
    }
}

impl fmt::Display for TwoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TwoPoint(p = {}, failure = {}, success = {})",
            self.p, self.failure_state, self.success_state
        )
    }
}

/// Bernoulli distribution, the two-point distribution over the states 0 (failure) and 1 (success).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Bernoulli(TwoPoint);

impl Bernoulli {
    pub fn new(success_probability: f64) -> Result<Self, StatsError> {
        Ok(Self(TwoPoint::new(success_probability, 0.0, 1.0)?))
    }

    pub fn p(&self) -> f64 {
        self.0.p()
    }

    pub fn q(&self) -> f64 {
        self.0.q()
    }

    pub fn support(&self) -> [f64; 2] {
        self.0.support()
    }
}

impl From<Bernoulli> for TwoPoint {
    fn from(bernoulli: Bernoulli) -> Self {
        bernoulli.0
    }
}

impl FromParams for Bernoulli {
    const TYPE_NAME: &'static str = "Bernoulli";

    fn from_params(params: &[f64]) -> Result<Self, StatsError> {
        let [p] = positional(Self::TYPE_NAME, params, [Some(0.5)])?;
        Self::new(p)
    }
}

impl Distribution for Bernoulli {
    fn pdf(&self, x: f64) -> f64 {
        self.0.pdf(x)
    }

    fn cdf(&self, x: f64) -> f64 {
        self.0.cdf(x)
    }

    fn inverse_cdf(&self, p: f64) -> f64 {
        self.0.inverse_cdf(p)
    }

    fn mean(&self) -> f64 {
        self.0.mean()
    }

    fn variance(&self) -> f64 {
        self.0.variance()
    }
}

impl fmt::Display for Bernoulli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bernoulli(p = {})", self.p())
    }
}
