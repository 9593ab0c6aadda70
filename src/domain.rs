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

use crate::errors::{ensure_arg, StatsError};
use enum_iterator::{all, Sequence};
use serde_derive::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Boundary semantics of a [`Domain`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainType {
    /// The start of the interval is not part of the domain.
    LeftOpen,
    /// The finish of the interval is not part of the domain.
    RightOpen,
    /// Neither bound is part of the domain.
    FullOpen,
    /// Both bounds are part of the domain.
    Closed,
}

impl DomainType {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LeftOpen => "left_open",
            Self::RightOpen => "right_open",
            Self::FullOpen => "full_open",
            Self::Closed => "closed",
        }
    }

    fn opening(&self) -> char {
        match self {
            Self::LeftOpen | Self::FullOpen => '(',
            Self::RightOpen | Self::Closed => '[',
        }
    }

    fn closing(&self) -> char {
        match self {
            Self::RightOpen | Self::FullOpen => ')',
            Self::LeftOpen | Self::Closed => ']',
        }
    }
}

impl fmt::Display for DomainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for DomainType {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        all::<DomainType>()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| StatsError::InvalidArgument {
                msg: format!(
                    "invalid domain type `{s}`, must be one of {}",
                    all::<DomainType>()
                        .map(|kind| kind.name())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            })
    }
}

/// A point or a closed sub-interval removed from a [`Domain`].
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Exclusion {
    Point(f64),
    /// Closed interval, bounds are stored in ascending order.
    Interval(f64, f64),
}

impl Exclusion {
    pub fn interval(a: f64, b: f64) -> Self {
        Self::Interval(a.min(b), a.max(b))
    }

    /// Returns whether `x` is this point or lies in this interval.
    pub fn covers(&self, x: f64) -> bool {
        match *self {
            Self::Point(p) => p == x,
            Self::Interval(lo, hi) => lo <= x && x <= hi,
        }
    }
}

impl From<f64> for Exclusion {
    fn from(point: f64) -> Self {
        Self::Point(point)
    }
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point(p) => write!(f, "{p}"),
            Self::Interval(lo, hi) => write!(f, "[{lo}, {hi}]"),
        }
    }
}

/// The support of a distribution: an interval with open or closed bounds, minus a list of excluded points and sub-intervals.
///
/// The open bounds are stored as exclusions at construction, so membership is a single interval test followed by an exclusion scan.
/// Exclusions lying outside of `[start, finish]` are not validated.
/// A domain is immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Domain {
    start: f64,
    finish: f64,
    domain_type: DomainType,
    exclusions: Vec<Exclusion>,
}

impl Domain {
    /// Builds a new domain, fails if `start > finish` or if either bound is NaN.
    pub fn new(
        start: f64,
        finish: f64,
        domain_type: DomainType,
        exclusions: &[Exclusion],
    ) -> Result<Self, StatsError> {
        ensure_arg!(
            start <= finish,
            "domain start ({start}) must not be greater than its finish ({finish})"
        );

        let mut all_exclusions = Vec::with_capacity(exclusions.len() + 2);
        if matches!(domain_type, DomainType::LeftOpen | DomainType::FullOpen) {
            all_exclusions.push(Exclusion::Point(start));
        }
        all_exclusions.extend_from_slice(exclusions);
        if matches!(domain_type, DomainType::RightOpen | DomainType::FullOpen) {
            all_exclusions.push(Exclusion::Point(finish));
        }

        Ok(Self {
            start,
            finish,
            domain_type,
            exclusions: all_exclusions,
        })
    }

    /// The closed interval `[start, finish]`.
    pub fn closed(start: f64, finish: f64) -> Result<Self, StatsError> {
        Self::new(start, finish, DomainType::Closed, &[])
    }

    /// The open interval `(start, finish)`.
    pub fn open(start: f64, finish: f64) -> Result<Self, StatsError> {
        Self::new(start, finish, DomainType::FullOpen, &[])
    }

    /// The whole real line, `(-inf, +inf)`.
    pub fn real_line() -> Self {
        Self {
            start: f64::NEG_INFINITY,
            finish: f64::INFINITY,
            domain_type: DomainType::FullOpen,
            exclusions: vec![
                Exclusion::Point(f64::NEG_INFINITY),
                Exclusion::Point(f64::INFINITY),
            ],
        }
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn finish(&self) -> f64 {
        self.finish
    }

    pub fn domain_type(&self) -> DomainType {
        self.domain_type
    }

    /// All the exclusions, including the open bounds.
    pub fn exclusions(&self) -> &[Exclusion] {
        &self.exclusions
    }

    /// Returns whether `x` is one of the excluded points or lies in an excluded sub-interval.
    pub fn excludes(&self, x: f64) -> bool {
        self.exclusions.iter().any(|e| e.covers(x))
    }

    /// Returns whether `x` belongs to this domain.
    pub fn contains(&self, x: f64) -> bool {
        self.start <= x && x <= self.finish && !self.excludes(x)
    }

    /// Three-way comparison of a point against this domain.
    ///
    /// Returns `Less` if `x` is at or left of the start and not included, `Greater` if it is at or right of the finish
    /// and not included, and `Equal` if it is included.
    /// Returns `None` for NaN, and for a point excluded from the interior of the domain, since it is neither left nor right of it.
    pub fn compare(&self, x: f64) -> Option<Ordering> {
        if self.contains(x) {
            Some(Ordering::Equal)
        } else if x <= self.start {
            Some(Ordering::Less)
        } else if x >= self.finish {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}, {}{}",
            self.domain_type.opening(),
            self.start,
            self.finish,
            self.domain_type.closing()
        )?;
        if !self.exclusions.is_empty() {
            let excl = self
                .exclusions
                .iter()
                .map(|e| format!("{e}"))
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, " - [{excl}]")?;
        }
        Ok(())
    }
}
