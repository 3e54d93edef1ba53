// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.

//! Where the convergence engine gets its samples from.

use std::collections::VecDeque;
use std::thread;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use crate::alignment::AlignmentTable;
use crate::batch_estimator::{build_sample, BatchSize};
use crate::sample::Sample;

/// Something that can produce an endless stream of samples.
pub trait SampleSource {
    fn num_parties(&self) -> usize;
    fn next_sample(&mut self) -> Sample;
}

/// Draw each batch in turn from a single random number generator.
pub struct SequentialSampleSource<'a,R:Rng+?Sized> {
    alignment : &'a AlignmentTable,
    batch_size : BatchSize,
    rng : &'a mut R,
}

impl <'a,R:Rng+?Sized> SequentialSampleSource<'a,R> {
    pub fn new(alignment:&'a AlignmentTable,batch_size:BatchSize,rng:&'a mut R) -> Self {
        SequentialSampleSource{alignment,batch_size,rng}
    }
}

impl <'a,R:Rng+?Sized> SampleSource for SequentialSampleSource<'a,R> {
    fn num_parties(&self) -> usize { self.alignment.num_parties() }
    fn next_sample(&mut self) -> Sample { build_sample(self.alignment,&mut *self.rng,self.batch_size) }
}

/// Compute batches on several threads at once.
///
/// Batch number k uses its own generator, stream k of a ChaCha20 generator seeded with the base seed,
/// so the sequence of samples produced is the same whatever the number of threads.
/// Samples are handed out strictly in batch order.
pub struct ParallelSampleSource<'a> {
    alignment : &'a AlignmentTable,
    batch_size : BatchSize,
    base_seed : u64,
    num_threads : usize,
    next_batch : u64,
    ready : VecDeque<Sample>,
}

/// Each thread computes this many consecutive batches per round, to amortise thread startup.
const BATCHES_PER_THREAD_PER_ROUND : u64 = 4;

impl <'a> ParallelSampleSource<'a> {
    /// `num_threads` of 0 is treated as 1.
    pub fn new(alignment:&'a AlignmentTable,batch_size:BatchSize,base_seed:u64,num_threads:usize) -> Self {
        ParallelSampleSource{ alignment, batch_size, base_seed, num_threads: num_threads.max(1), next_batch: 0, ready: VecDeque::new() }
    }

    /// The generator used for a given batch number.
    pub fn rng_for_batch(base_seed:u64,batch:u64) -> ChaCha20Rng {
        let mut rng = ChaCha20Rng::seed_from_u64(base_seed);
        rng.set_stream(batch);
        rng
    }

    fn compute_round(&mut self) {
        let first_batch = self.next_batch;
        let alignment = self.alignment;
        let batch_size = self.batch_size;
        let base_seed = self.base_seed;
        let num_threads = self.num_threads as u64;
        let computed : Vec<Vec<Sample>> = thread::scope(|scope| {
            let handles : Vec<_> = (0..num_threads).map(|thread_no| {
                let start = first_batch+thread_no*BATCHES_PER_THREAD_PER_ROUND;
                scope.spawn(move || {
                    (start..start+BATCHES_PER_THREAD_PER_ROUND).map(|batch|{
                        let mut rng = Self::rng_for_batch(base_seed,batch);
                        build_sample(alignment,&mut rng,batch_size)
                    }).collect::<Vec<_>>()
                })
            }).collect();
            handles.into_iter().map(|h|h.join().unwrap_or_else(|e|std::panic::resume_unwind(e))).collect()
        });
        self.next_batch+=num_threads*BATCHES_PER_THREAD_PER_ROUND;
        self.ready.extend(computed.into_iter().flatten());
    }
}

impl <'a> SampleSource for ParallelSampleSource<'a> {
    fn num_parties(&self) -> usize { self.alignment.num_parties() }
    fn next_sample(&mut self) -> Sample {
        loop {
            if let Some(sample) = self.ready.pop_front() { return sample; }
            self.compute_round();
        }
    }
}
