// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.

//! Settings for a simulation run.

use std::fs::File;
use std::path::Path;
use serde::{Serialize,Deserialize};
use thiserror::Error;
use crate::batch_estimator::BatchSize;
use crate::convergence::ConvergenceCriteria;

#[derive(Error,Debug,Clone,PartialEq)]
pub enum ConfigError {
    #[error("The convergence threshold {0} should be a non-negative number")]
    InvalidThreshold(f64),
    #[error("The minimum number of samples should be at least 1")]
    ZeroMinimumSamples,
    #[error("The maximum number of samples {maximum} is less than the minimum {minimum}")]
    MaximumBelowMinimum{maximum:usize,minimum:usize},
    #[error("The number of threads should be at least 1")]
    ZeroThreads,
}

/// Everything that can be adjusted about a run. Missing fields in a JSON file take the default values.
///
/// ```
/// use advice::config::SimulationConfig;
/// let config : SimulationConfig = serde_json::from_str(r#"{"batch_size":500,"criteria":{"minimum_samples":20}}"#).unwrap();
/// assert_eq!(500,config.batch_size.get());
/// assert_eq!(20,config.criteria.minimum_samples);
/// assert_eq!(0.00001,config.criteria.threshold);
/// assert_eq!(None,config.seed);
/// ```
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize,Default)]
#[serde(default)]
pub struct SimulationConfig {
    /// voters per sample
    pub batch_size : BatchSize,
    pub criteria : ConvergenceCriteria,
    /// If present, makes the run reproducible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed : Option<u64>,
    /// If present, compute batches on this many threads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads : Option<usize>,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(),ConfigError> {
        self.criteria.validate()?;
        if self.threads==Some(0) { return Err(ConfigError::ZeroThreads); }
        Ok(())
    }

    pub fn load_json(path:&Path) -> anyhow::Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation() {
        assert_eq!(Ok(()),SimulationConfig::default().validate());
        let mut config = SimulationConfig::default();
        config.threads = Some(0);
        assert_eq!(Err(ConfigError::ZeroThreads),config.validate());
        let mut config = SimulationConfig::default();
        config.criteria.minimum_samples = 0;
        assert_eq!(Err(ConfigError::ZeroMinimumSamples),config.validate());
        let mut config = SimulationConfig::default();
        config.criteria.maximum_samples = Some(10);
        assert_eq!(Err(ConfigError::MaximumBelowMinimum{maximum:10,minimum:1000}),config.validate());
        let mut config = SimulationConfig::default();
        config.criteria.threshold = f64::NAN;
        assert!(matches!(config.validate(),Err(ConfigError::InvalidThreshold(_))));
        config.criteria.threshold = -1.0;
        assert_eq!(Err(ConfigError::InvalidThreshold(-1.0)),config.validate());
    }

    #[test]
    fn zero_batch_size_in_file_rejected() {
        assert!(serde_json::from_str::<SimulationConfig>(r#"{"batch_size":0}"#).is_err());
    }
}
