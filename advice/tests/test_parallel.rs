// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.


use advice::alignment::AlignmentTable;
use advice::batch_estimator::{build_sample, BatchSize};
use advice::config::{ConfigError, SimulationConfig};
use advice::convergence::ConvergenceCriteria;
use advice::sample_source::{ParallelSampleSource, SampleSource};
use advice::simulation::{simulate, SimulationError};

fn table() -> AlignmentTable {
    AlignmentTable::from_integers(&["A","B","C","D"],&[&[1,-1,0,1],&[0,1,-1,-1],&[-1,0,1,1],&[1,1,0,-1],&[0,-1,-1,0],&[1,0,1,0]]).unwrap()
}

fn config(seed:u64,threads:Option<usize>) -> SimulationConfig {
    SimulationConfig{
        batch_size: BatchSize::new(200).unwrap(),
        criteria: ConvergenceCriteria{ threshold: 0.0001, minimum_samples: 30, maximum_samples: Some(3000), warn_after_samples: None },
        seed: Some(seed),
        threads,
    }
}

#[test]
fn thread_count_does_not_change_samples() {
    let table = table();
    let batch_size = BatchSize::new(100).unwrap();
    let draw = |threads:usize| {
        let mut source = ParallelSampleSource::new(&table,batch_size,17,threads);
        (0..37).map(|_|source.next_sample()).collect::<Vec<_>>()
    };
    let one = draw(1);
    assert_eq!(one,draw(3));
    assert_eq!(one,draw(8));
    assert_ne!(one[0],one[1]);
    // batch k is just a sample drawn with the k-th generator.
    let mut rng = ParallelSampleSource::rng_for_batch(17,5);
    assert_eq!(one[5],build_sample(&table,&mut rng,batch_size));
}

#[test]
fn simulate_is_reproducible() {
    let table = table();
    let a = simulate(&table,&config(5,None),|_|{}).unwrap();
    let b = simulate(&table,&config(5,None),|_|{}).unwrap();
    assert_eq!(a.samples,b.samples);
    assert_eq!(a.stdev,b.stdev);
    assert!(a.samples.len()>=30);
    let p1 = simulate(&table,&config(5,Some(1)),|_|{}).unwrap();
    let p4 = simulate(&table,&config(5,Some(4)),|_|{}).unwrap();
    assert_eq!(p1.samples,p4.samples);
    assert_eq!(p1.status,p4.status);
}

#[test]
fn simulate_checks_config() {
    let mut bad = config(5,Some(0));
    assert_eq!(Some(SimulationError::Config(ConfigError::ZeroThreads)),simulate(&table(),&bad,|_|{}).err());
    bad.threads = None;
    bad.criteria.minimum_samples = 0;
    assert_eq!(Some(SimulationError::Config(ConfigError::ZeroMinimumSamples)),simulate(&table(),&bad,|_|{}).err());
}
