// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use advice::alignment::{AlignmentTable, Stance};
use advice::batch_estimator::{build_sample, BatchSize};
use advice::sample::SampleCollection;

fn table_30_by_10() -> AlignmentTable {
    let mut rng = ChaCha20Rng::seed_from_u64(0);
    let parties = (0..10).map(|i|format!("Party {}",i)).collect();
    let topics = (0..30).map(|_|(0..10).map(|_|Stance::random(&mut rng)).collect()).collect();
    AlignmentTable::new(parties,topics).unwrap()
}

fn build_one_sample(c: &mut Criterion) {
    let table = table_30_by_10();
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    c.bench_function("Sample of 1000 voters, 30 topics, 10 parties", |b| b.iter(|| build_sample(&table,&mut rng,BatchSize::DEFAULT)));
}

fn stdev_of_1000_samples(c: &mut Criterion) {
    let table = table_30_by_10();
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    let mut samples = SampleCollection::new(10);
    for _ in 0..1000 { samples.push(build_sample(&table,&mut rng,BatchSize::new(10).unwrap())); }
    c.bench_function("Standard deviation over 1000 samples", |b| b.iter(|| samples.population_stdev()));
}

criterion_group!(benches, build_one_sample,stdev_of_1000_samples);
criterion_main!(benches);
