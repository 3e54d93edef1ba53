// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use thiserror::Error;
use crate::alignment::AlignmentTable;
use crate::config::{ConfigError, SimulationConfig};
use crate::convergence::{ConvergenceEngine, ConvergenceOutcome, Progress, WrongSampleLength};
use crate::sample_source::{ParallelSampleSource, SequentialSampleSource};

#[derive(Error,Debug,Clone,PartialEq)]
pub enum SimulationError {
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    WrongSampleLength(#[from] WrongSampleLength),
}

/// Run the convergence engine as described by the config.
///
/// With no seed, one is chosen at random and logged so the run can be repeated.
/// With a thread count, batches are computed in parallel; the results then depend only on the seed, not the thread count.
pub fn simulate(alignment:&AlignmentTable,config:&SimulationConfig,observer:impl FnMut(&Progress)) -> Result<ConvergenceOutcome,SimulationError> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(||rand::rng().random());
    log::info!("Simulating {} topics and {} parties, {} voters per sample, seed {}",alignment.num_topics(),alignment.num_parties(),config.batch_size,seed);
    if let Some(source) = alignment.source() { log::info!("Stances from {}",source); }
    let engine = ConvergenceEngine::new(config.criteria);
    let outcome = match config.threads {
        Some(threads) => {
            let mut source = ParallelSampleSource::new(alignment,config.batch_size,seed,threads);
            engine.run(&mut source,observer)?
        }
        None => {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let mut source = SequentialSampleSource::new(alignment,config.batch_size,&mut rng);
            engine.run(&mut source,observer)?
        }
    };
    Ok(outcome)
}
