// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.

//! Samples (the distribution of advice over one batch of voters) and collections of them.

use serde::{Serialize,Deserialize};
use crate::alignment::PartyIndex;
use crate::batch_estimator::BatchSize;

/// The fraction of voters in one batch whose advice was each party, indexed by party.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct Sample {
    shares : Vec<f64>,
}

impl Sample {
    pub fn new(shares:Vec<f64>) -> Self { Sample{shares} }

    /// Convert the number of times each party was the advice into fractions of the batch.
    pub fn from_tallies(tallies:&[usize],batch_size:BatchSize) -> Self {
        let batch_size = batch_size.get() as f64;
        Sample{ shares: tallies.iter().map(|&n|n as f64/batch_size).collect() }
    }

    pub fn shares(&self) -> &[f64] { &self.shares }
    pub fn share(&self,party:PartyIndex) -> f64 { self.shares[party.0] }
    pub fn num_parties(&self) -> usize { self.shares.len() }
    pub fn total(&self) -> f64 { self.shares.iter().sum() }
}

/// All samples drawn so far, in the order they were drawn. Samples can be added but never removed.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct SampleCollection {
    num_parties : usize,
    samples : Vec<Sample>,
}

impl SampleCollection {
    pub fn new(num_parties:usize) -> Self { SampleCollection{ num_parties, samples: vec![] } }

    /// # Panics
    /// If the sample does not have one share per party.
    pub fn push(&mut self,sample:Sample) {
        assert_eq!(self.num_parties,sample.num_parties(),"sample has the wrong number of parties");
        self.samples.push(sample);
    }

    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn num_parties(&self) -> usize { self.num_parties }
    pub fn iter(&self) -> impl Iterator<Item=&Sample> { self.samples.iter() }

    /// Per party mean over all samples. All zeros if there are no samples.
    pub fn mean(&self) -> Vec<f64> {
        let mut sum = vec![0.0;self.num_parties];
        for sample in &self.samples {
            for (s,v) in sum.iter_mut().zip(sample.shares()) { *s+=*v; }
        }
        if !self.samples.is_empty() {
            let n = self.samples.len() as f64;
            for s in &mut sum { *s/=n; }
        }
        sum
    }

    /// Per party population standard deviation over all samples (sum of squared deviations divided by n, not n-1).
    /// All zeros if there are no samples.
    /// ```
    /// use advice::sample::{Sample, SampleCollection};
    /// let mut samples = SampleCollection::new(2);
    /// samples.push(Sample::new(vec![0.25,0.75]));
    /// samples.push(Sample::new(vec![0.75,0.25]));
    /// assert_eq!(vec![0.5,0.5],samples.mean());
    /// assert_eq!(vec![0.25,0.25],samples.population_stdev());
    /// ```
    pub fn population_stdev(&self) -> Vec<f64> {
        let mean = self.mean();
        let mut sum_squares = vec![0.0;self.num_parties];
        for sample in &self.samples {
            for ((s,v),m) in sum_squares.iter_mut().zip(sample.shares()).zip(&mean) {
                *s+=(m-v)*(m-v);
            }
        }
        if !self.samples.is_empty() {
            let n = self.samples.len() as f64;
            for s in &mut sum_squares { *s=(*s/n).sqrt(); }
        }
        sum_squares
    }
}

impl <'a> IntoIterator for &'a SampleCollection {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a,Sample>;
    fn into_iter(self) -> Self::IntoIter { self.samples.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallies_are_fractions_of_the_batch() {
        let sample = Sample::from_tallies(&[1,3,0],BatchSize::new(4).unwrap());
        assert_eq!(&[0.25,0.75,0.0],sample.shares());
        assert_eq!(1.0,sample.total());
        assert!(BatchSize::new(0).is_err());
    }

    #[test]
    #[should_panic(expected = "wrong number of parties")]
    fn push_checks_length() {
        SampleCollection::new(3).push(Sample::new(vec![1.0,0.0]));
    }
}
