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

use super::{Distribution, FromParams};
use crate::errors::{ensure_arg, StatsError};
use statrs::statistics::Statistics;
use std::fmt;
use std::ops::RangeInclusive;

/// Largest integer magnitude that converts to an f64 without rounding.
pub const MAX_EXACT_INTEGER: i64 = 1 << 53;

fn ensure_exact(value: i64) -> Result<(), StatsError> {
    ensure_arg!(
        (-MAX_EXACT_INTEGER..=MAX_EXACT_INTEGER).contains(&value),
        "{value} is not exactly representable as a floating point element (limit is ±2^53)"
    );
    Ok(())
}

/// Discrete uniform distribution over a finite set of elements.
///
/// The elements are sorted ascending at construction, and every element carries a mass of `1/n`.
#[derive(Clone, Debug, PartialEq)]
pub struct UniformDiscrete {
    support: Vec<f64>,
}

impl UniformDiscrete {
    /// Builds the distribution over the provided elements, which must not be empty nor contain NaN.
    pub fn new(elements: &[f64]) -> Result<Self, StatsError> {
        ensure_arg!(
            !elements.is_empty(),
            "a discrete uniform distribution needs at least one element"
        );
        ensure_arg!(
            elements.iter().all(|x| !x.is_nan()),
            "the elements of a discrete uniform distribution must be numbers"
        );
        let mut support = elements.to_vec();
        support.sort_by(f64::total_cmp);
        Ok(Self { support })
    }

    /// Builds the distribution over a contiguous range of integers.
    ///
    /// Both ends must lie within ±[MAX_EXACT_INTEGER] so that every member is stored exactly.
    pub fn from_range(range: RangeInclusive<i64>) -> Result<Self, StatsError> {
        ensure_arg!(
            !range.is_empty(),
            "empty range {}..={} for a discrete uniform distribution",
            range.start(),
            range.end()
        );
        ensure_exact(*range.start())?;
        ensure_exact(*range.end())?;
        Ok(Self {
            support: range.map(|k| k as f64).collect(),
        })
    }

    /// Distribution with all of its mass on a single point, within ±[MAX_EXACT_INTEGER].
    pub fn single(value: i64) -> Result<Self, StatsError> {
        ensure_exact(value)?;
        Ok(Self {
            support: vec![value as f64],
        })
    }

    /// The sorted elements over which this distribution exists.
    pub fn support(&self) -> &[f64] {
        &self.support
    }

    pub fn count(&self) -> usize {
        self.support.len()
    }

    pub fn lower(&self) -> f64 {
        self.support[0]
    }

    pub fn upper(&self) -> f64 {
        self.support[self.support.len() - 1]
    }

    /// Number of elements smaller than or equal to `k`.
    fn rank(&self, k: f64) -> usize {
        self.support.partition_point(|e| *e <= k)
    }
}

impl FromParams for UniformDiscrete {
    const TYPE_NAME: &'static str = "UniformDiscrete";

    /// The parameters are the elements of the support.
    fn from_params(params: &[f64]) -> Result<Self, StatsError> {
        Self::new(params)
    }
}

impl Distribution for UniformDiscrete {
    fn pdf(&self, k: f64) -> f64 {
        let multiplicity = self.rank(k) - self.support.partition_point(|e| *e < k);
        multiplicity as f64 / self.count() as f64
    }

    fn cdf(&self, k: f64) -> f64 {
        if k < self.lower() {
            0.0
        } else if k >= self.upper() {
            1.0
        } else {
            self.rank(k) as f64 / self.count() as f64
        }
    }

    /// Nearest rank: the element at `ceil(p * n) - 1`, with `p = 0` and `p = 1` mapped to the first and last elements.
    fn inverse_cdf(&self, p: f64) -> f64 {
        if p <= 0.0 {
            return self.lower();
        } else if p >= 1.0 {
            return self.upper();
        }
        let scaled = p * self.count() as f64;
        // p = k/n does not always give back exactly k, so snap products which are a rounding error away from an integer
        let nearest = scaled.round();
        let rank = if (scaled - nearest).abs() <= 4.0 * f64::EPSILON * scaled {
            nearest
        } else {
            scaled.ceil()
        };
        let idx = (rank as usize).clamp(1, self.count()) - 1;
        self.support[idx]
    }

    fn mean(&self) -> f64 {
        self.support.iter().mean()
    }

    /// Population variance of the support
    fn variance(&self) -> f64 {
        self.support.iter().population_variance()
    }
}

impl fmt::Display for UniformDiscrete {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "UniformDiscrete({} elements in [{}, {}])",
            self.count(),
            self.lower(),
            self.upper()
        )
    }
}
