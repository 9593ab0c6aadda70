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

use snafu::prelude::*;
use std::path::PathBuf;

/// The category of a [`StatsError`], allowing callers to tell a caller bug from an expected boundary case.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Invalid construction parameters, unknown registry key, malformed configuration.
    InvalidArgument,
    /// Probability argument outside of [0, 1].
    RangeViolation,
    /// A generator was bound to a distribution of another family.
    TypeMismatch,
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum StatsError {
    /// A constructor or factory received parameters it cannot work with.
    #[snafu(display("invalid argument: {msg}"))]
    InvalidArgument { msg: String },
    /// Quantile requested for a probability outside of [0, 1].
    #[snafu(display("`p` must be in [0, 1], found: {p}"))]
    RangeViolation { p: f64 },
    /// Generator bound to a distribution of the wrong family.
    #[snafu(display("expected a {expected} distribution, found {found}"))]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[snafu(display("could not parse configuration: {source}"))]
    ConfigLoading { source: serde_yaml::Error },
    #[snafu(display("could not read configuration file {}: {source}", path.display()))]
    ConfigIo {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StatsError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::RangeViolation { .. } => ErrorKind::RangeViolation,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Self::InvalidArgument { .. } | Self::ConfigLoading { .. } | Self::ConfigIo { .. } => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

/// Returns an `InvalidArgument` error unless the condition holds.
macro_rules! ensure_arg {
    ($cond:expr, $($fmt:tt)+) => {
        snafu::ensure!(
            $cond,
            $crate::errors::InvalidArgumentSnafu {
                msg: format!($($fmt)+)
            }
        )
    };
}

pub(crate) use ensure_arg;
