// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.

//! Keep drawing samples until the measured spread between samples stops changing.
//!
//! After each new sample, the population standard deviation of each party's share over all
//! samples so far is computed. The largest change (over parties) from the previous standard
//! deviations is the *delta*. Once the delta is at most the threshold, and at least the minimum
//! number of samples has been drawn, the estimate is considered converged.
//!
//! Note that it is the standard deviation, not the mean, that is required to settle down.
//! In effect this checks that the width of the confidence interval has stabilised.

use std::fmt;
use serde::{Serialize,Deserialize};
use thiserror::Error;
use crate::config::ConfigError;
use crate::sample::{Sample, SampleCollection};
use crate::sample_source::SampleSource;

/// When to stop drawing samples.
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ConvergenceCriteria {
    /// Converged once the largest change in standard deviation is at most this.
    pub threshold : f64,
    /// Never converge before this many samples.
    pub minimum_samples : usize,
    /// Give up after this many samples. None means keep going for as long as it takes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_samples : Option<usize>,
    /// Log a warning if this many samples have been drawn without converging.
    pub warn_after_samples : Option<usize>,
}

impl Default for ConvergenceCriteria {
    fn default() -> Self {
        ConvergenceCriteria{
            threshold: 0.00001,
            minimum_samples: 1000,
            maximum_samples: None,
            warn_after_samples: Some(100_000),
        }
    }
}

impl ConvergenceCriteria {
    pub fn validate(&self) -> Result<(),ConfigError> {
        if self.threshold.is_nan() || self.threshold<0.0 { return Err(ConfigError::InvalidThreshold(self.threshold)); }
        if self.minimum_samples==0 { return Err(ConfigError::ZeroMinimumSamples); }
        if let Some(maximum) = self.maximum_samples {
            if maximum<self.minimum_samples { return Err(ConfigError::MaximumBelowMinimum{maximum,minimum:self.minimum_samples}); }
        }
        Ok(())
    }
}

/// A sample source produced a sample for a different number of parties than it claimed.
#[derive(Error,Debug,Clone,Copy,PartialEq,Eq)]
#[error("Sample source produced a sample with {found} parties but said it had {expected}")]
pub struct WrongSampleLength {
    pub expected : usize,
    pub found : usize,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum EngineStatus {
    /// More samples are needed.
    Running,
    /// The standard deviations have stabilised. Terminal.
    Converged,
    /// The optional sample limit was hit before convergence. Terminal.
    SampleLimitReached,
}

impl EngineStatus {
    pub fn is_terminal(self) -> bool { self!=EngineStatus::Running }
}

/// Everything the stopping rule needs to know about the samples drawn so far.
#[derive(Debug,Clone)]
pub struct ConvergenceState {
    samples : SampleCollection,
    /// per party population standard deviation after the most recent sample. Zeros before any samples.
    stdev : Vec<f64>,
    /// largest change in standard deviation caused by the most recent sample.
    delta : f64,
    status : EngineStatus,
}

impl ConvergenceState {
    pub fn new(num_parties:usize) -> Self {
        ConvergenceState{ samples: SampleCollection::new(num_parties), stdev: vec![0.0;num_parties], delta: f64::INFINITY, status: EngineStatus::Running }
    }

    /// The transition rule. Add a sample, recompute the standard deviations, and decide whether to continue.
    ///
    /// # Panics
    /// If the sample does not have one share per party. [ConvergenceEngine::run] checks this first.
    pub fn step(mut self,sample:Sample,criteria:&ConvergenceCriteria) -> (ConvergenceState,EngineStatus) {
        self.samples.push(sample);
        let stdev = self.samples.population_stdev();
        self.delta = max_abs_difference(&stdev,&self.stdev);
        self.stdev = stdev;
        let n = self.samples.len();
        self.status = if self.delta<=criteria.threshold && n>=criteria.minimum_samples { EngineStatus::Converged }
            else if criteria.maximum_samples.is_some_and(|maximum|n>=maximum) { EngineStatus::SampleLimitReached }
            else { EngineStatus::Running };
        let status = self.status;
        (self,status)
    }

    pub fn samples(&self) -> &SampleCollection { &self.samples }
    pub fn num_samples(&self) -> usize { self.samples.len() }
    pub fn stdev(&self) -> &[f64] { &self.stdev }
    pub fn delta(&self) -> f64 { self.delta }
    pub fn status(&self) -> EngineStatus { self.status }

    pub fn into_outcome(self) -> ConvergenceOutcome {
        ConvergenceOutcome{ samples: self.samples, stdev: self.stdev, delta: self.delta, status: self.status }
    }
}

fn max_abs_difference(a:&[f64],b:&[f64]) -> f64 {
    a.iter().zip(b).map(|(x,y)|(x-y).abs()).fold(0.0,f64::max)
}

/// What the engine reports after each sample.
/// ```
/// use advice::convergence::Progress;
/// assert_eq!("Samples: 12, convergence: 0.0150%",Progress{num_samples:12,delta:0.00015}.to_string());
/// ```
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct Progress {
    pub num_samples : usize,
    pub delta : f64,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,"Samples: {}, convergence: {:.4}%",self.num_samples,100.0*self.delta)
    }
}

/// The samples drawn and the final spread, once the engine has stopped.
#[derive(Debug,Clone)]
pub struct ConvergenceOutcome {
    pub samples : SampleCollection,
    pub stdev : Vec<f64>,
    pub delta : f64,
    pub status : EngineStatus,
}

impl ConvergenceOutcome {
    pub fn converged(&self) -> bool { self.status==EngineStatus::Converged }
    pub fn max_stdev(&self) -> f64 { self.stdev.iter().cloned().fold(0.0,f64::max) }
    /// Three standard deviations of the worst party; about 99.73% of the time the true share is within this of the estimate.
    pub fn estimated_error(&self) -> f64 { 3.0*self.max_stdev() }
}

pub struct ConvergenceEngine {
    criteria : ConvergenceCriteria,
}

impl ConvergenceEngine {
    pub fn new(criteria:ConvergenceCriteria) -> Self { ConvergenceEngine{criteria} }

    pub fn criteria(&self) -> &ConvergenceCriteria { &self.criteria }

    /// Draw samples from the source until a terminal state is reached. `observer` is told about progress after every sample.
    ///
    /// Without a maximum number of samples, this will not return until converged.
    /// Stops with an error if the source produces a sample with the wrong number of parties.
    pub fn run<S:SampleSource+?Sized>(&self,source:&mut S,mut observer:impl FnMut(&Progress)) -> Result<ConvergenceOutcome,WrongSampleLength> {
        let num_parties = source.num_parties();
        let mut state = ConvergenceState::new(num_parties);
        loop {
            let sample = source.next_sample();
            if sample.num_parties()!=num_parties { return Err(WrongSampleLength{expected:num_parties,found:sample.num_parties()}); }
            let (next,status) = state.step(sample,&self.criteria);
            state = next;
            observer(&Progress{ num_samples: state.num_samples(), delta: state.delta() });
            if status.is_terminal() { break; }
            if self.criteria.warn_after_samples==Some(state.num_samples()) {
                log::warn!("Drawn {} samples without converging; last change in standard deviation was {}",state.num_samples(),state.delta());
            }
        }
        match state.status() {
            EngineStatus::SampleLimitReached => log::warn!("Stopped after {} samples without converging",state.num_samples()),
            _ => log::debug!("Converged after {} samples, delta {}",state.num_samples(),state.delta()),
        }
        Ok(state.into_outcome())
    }
}
