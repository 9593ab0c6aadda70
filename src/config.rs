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


//! Serializable descriptions of distributions and generators, loadable from YAML.

use crate::distribution::{self, Distribution, DEFAULT_TYPE};
use crate::errors::{ConfigIoSnafu, ConfigLoadingSnafu, StatsError};
use crate::rng::{self, VariateGenerator};
use serde::de::DeserializeOwned;
use serde_derive::{Deserialize, Serialize};
use snafu::ResultExt;
use std::fmt::Debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use typed_builder::TypedBuilder;

/// A configuration representation which can be read from YAML.
pub trait ConfigRepr: Debug + Sized + serde::Serialize + DeserializeOwned {
    /// Builds the configuration representation from the path to a yaml
    fn load<P>(path: P) -> Result<Self, StatsError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).context(ConfigIoSnafu { path })?;
        serde_yaml::from_reader(BufReader::new(file)).context(ConfigLoadingSnafu)
    }

    /// Builds a sequence of "Selves" from the provided path to a yaml
    fn load_many<P>(path: P) -> Result<Vec<Self>, StatsError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = File::open(path).context(ConfigIoSnafu { path })?;
        serde_yaml::from_reader(BufReader::new(file)).context(ConfigLoadingSnafu)
    }

    /// Builds the configuration representation from a yaml string
    fn loads(data: &str) -> Result<Self, StatsError> {
        debug!("Loading YAML:\n{data}");
        serde_yaml::from_str(data).context(ConfigLoadingSnafu)
    }

    /// Builds a sequence of "Selves" from a yaml string
    fn loads_many(data: &str) -> Result<Vec<Self>, StatsError> {
        debug!("Loading YAML:\n{data}");
        serde_yaml::from_str(data).context(ConfigLoadingSnafu)
    }
}

fn default_kind() -> String {
    DEFAULT_TYPE.to_string()
}

/// A distribution described by its registry key and its positional parameters, e.g.
///
/// ```yaml
/// kind: normal
/// params: [10.0, 2.5]
/// ```
#[derive(Clone, Debug, PartialEq, TypedBuilder, Serialize, Deserialize)]
pub struct DistributionConfig {
    #[builder(default = default_kind(), setter(into))]
    #[serde(default = "default_kind")]
    pub kind: String,
    #[builder(default)]
    #[serde(default)]
    pub params: Vec<f64>,
}

impl DistributionConfig {
    /// Creates the distribution through the registry.
    pub fn build(&self) -> Result<Box<dyn Distribution>, StatsError> {
        distribution::create(&self.kind, &self.params)
    }
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ConfigRepr for DistributionConfig {}

/// A generator described by its distribution and an optional seed.
#[derive(Clone, Debug, Default, PartialEq, TypedBuilder, Serialize, Deserialize)]
pub struct RngConfig {
    #[builder(default)]
    #[serde(default)]
    pub distribution: DistributionConfig,
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub seed: Option<u64>,
}

impl RngConfig {
    /// Creates the distribution, then the generator of the same family bound to it.
    pub fn build(&self) -> Result<Box<dyn VariateGenerator>, StatsError> {
        let distribution = self.distribution.build()?;
        rng::create(
            &self.distribution.kind,
            Some(distribution.as_ref()),
            self.seed,
        )
    }
}

impl ConfigRepr for RngConfig {}
