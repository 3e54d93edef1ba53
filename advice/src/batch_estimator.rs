// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.

//! Run a batch of random voters through the questionnaire to produce one sample.

use std::fmt;
use rand::Rng;
use serde::{Serialize,Deserialize};
use thiserror::Error;
use crate::alignment::AlignmentTable;
use crate::sample::Sample;
use crate::voter_sampler::sample_voter_top_choice;

#[derive(Error,Debug,Clone,Copy,PartialEq,Eq)]
#[error("A batch must contain at least one voter")]
pub struct DegenerateBatchError;

/// The number of voters in a batch. Never zero, as a sample is a fraction of the batch.
#[derive(Clone,Copy,PartialEq,Eq,Debug,Serialize,Deserialize)]
#[serde(try_from="usize",into="usize")]
pub struct BatchSize(usize);

impl BatchSize {
    /// The equivalent of a thousand people filling in the questionnaire.
    pub const DEFAULT : BatchSize = BatchSize(1000);

    pub fn new(voters:usize) -> Result<Self,DegenerateBatchError> {
        if voters==0 { Err(DegenerateBatchError) } else { Ok(BatchSize(voters)) }
    }
    pub fn get(self) -> usize { self.0 }
}

impl Default for BatchSize {
    fn default() -> Self { BatchSize::DEFAULT }
}

impl TryFrom<usize> for BatchSize {
    type Error = DegenerateBatchError;
    fn try_from(value: usize) -> Result<Self, Self::Error> { BatchSize::new(value) }
}

impl From<BatchSize> for usize {
    fn from(value: BatchSize) -> Self { value.0 }
}

impl fmt::Display for BatchSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.0) }
}

/// Draw `batch_size` independent random voters and find what fraction of them were advised to vote for each party.
pub fn build_sample<R:Rng+?Sized>(alignment:&AlignmentTable,rng:&mut R,batch_size:BatchSize) -> Sample {
    let mut tallies = vec![0usize;alignment.num_parties()];
    for _ in 0..batch_size.get() {
        tallies[sample_voter_top_choice(alignment,rng).0]+=1;
    }
    Sample::from_tallies(&tallies,batch_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_voters_rejected() {
        assert_eq!(Err(DegenerateBatchError),BatchSize::new(0));
        assert_eq!(17,BatchSize::new(17).unwrap().get());
        assert_eq!(1000,BatchSize::default().get());
        assert!(serde_json::from_str::<BatchSize>("0").is_err());
        assert_eq!(BatchSize::new(5).unwrap(),serde_json::from_str::<BatchSize>("5").unwrap());
    }
}
