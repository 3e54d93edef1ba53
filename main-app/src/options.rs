// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.

//! Command line settings for the simulation, layered over an optional JSON config file and the defaults.

use std::path::PathBuf;
use anyhow::Context;
use clap::Args;
use advice::batch_estimator::BatchSize;
use advice::config::SimulationConfig;

#[derive(Args,Debug,Clone,Default)]
pub struct SimulationOptions {
    /// A JSON file with simulation settings. Any of the options below override values in it.
    #[arg(long)]
    pub config : Option<PathBuf>,

    /// Seed for the random number generator, making the run reproducible. If not given, one is chosen at random and logged.
    #[arg(long)]
    pub seed : Option<u64>,

    /// The run has converged once the largest change in standard deviation caused by a new sample is at most this. Default 0.00001
    #[arg(long)]
    pub threshold : Option<f64>,

    /// Never converge with fewer than this many samples. Default 1000
    #[arg(long)]
    pub min_samples : Option<usize>,

    /// Give up after this many samples even if not converged. Default is no limit.
    #[arg(long)]
    pub max_samples : Option<usize>,

    /// Log a warning if this many samples have been drawn without converging. Default 100000
    #[arg(long)]
    pub warn_samples : Option<usize>,

    /// The number of random voters in each sample. Default 1000
    #[arg(long)]
    pub batch_size : Option<usize>,

    /// Compute samples on this many threads. Results then depend on the seed but not the number of threads.
    #[arg(long)]
    pub threads : Option<usize>,
}

impl SimulationOptions {
    /// Defaults, then the config file, then the command line.
    pub fn to_config(&self) -> anyhow::Result<SimulationConfig> {
        let mut config = match &self.config {
            Some(path) => SimulationConfig::load_json(path).with_context(||format!("Could not read config file {}",path.display()))?,
            None => SimulationConfig::default(),
        };
        if let Some(seed) = self.seed { config.seed=Some(seed); }
        if let Some(threshold) = self.threshold { config.criteria.threshold=threshold; }
        if let Some(minimum) = self.min_samples { config.criteria.minimum_samples=minimum; }
        if let Some(maximum) = self.max_samples { config.criteria.maximum_samples=Some(maximum); }
        if let Some(warn) = self.warn_samples { config.criteria.warn_after_samples=Some(warn); }
        if let Some(batch_size) = self.batch_size { config.batch_size=BatchSize::new(batch_size)?; }
        if let Some(threads) = self.threads { config.threads=Some(threads); }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        simulation : SimulationOptions,
    }

    fn parse(args:&[&str]) -> anyhow::Result<SimulationConfig> {
        Wrapper::try_parse_from(std::iter::once("test").chain(args.iter().cloned()))?.simulation.to_config()
    }

    #[test]
    fn defaults() {
        assert_eq!(SimulationConfig::default(),parse(&[]).unwrap());
    }

    #[test]
    fn overrides() {
        let config = parse(&["--seed","7","--threshold","0.001","--min-samples","10","--max-samples","20","--batch-size","50","--threads","2"]).unwrap();
        assert_eq!(Some(7),config.seed);
        assert_eq!(0.001,config.criteria.threshold);
        assert_eq!(10,config.criteria.minimum_samples);
        assert_eq!(Some(20),config.criteria.maximum_samples);
        assert_eq!(50,config.batch_size.get());
        assert_eq!(Some(2),config.threads);
    }

    #[test]
    fn rejects_nonsense() {
        assert!(parse(&["--batch-size","0"]).is_err());
        assert!(parse(&["--threads","0"]).is_err());
        assert!(parse(&["--min-samples","10","--max-samples","5"]).is_err());
    }
}
