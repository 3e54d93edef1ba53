// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.


use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use advice::batch_estimator::{build_sample, BatchSize};
use advice::comparator::compare;
use advice::sample::SampleCollection;

#[test]
fn data_is_consistent() {
    let table = tk2012::alignment_table().unwrap();
    let outcome = tk2012::real_outcome().unwrap();
    assert_eq!(30,table.num_topics());
    assert_eq!(10,table.num_parties());
    assert_eq!(150,outcome.total_seats());
    assert!(table.source().unwrap().starts_with(tk2012::PLACEHOLDER_NOTICE));
    assert_eq!(Some(31),outcome.seats_for("VVD"));
    assert_eq!("Partij voor de Dieren",table.party_name(advice::alignment::PartyIndex(9)));
    for party in table.parties() { assert!(outcome.seats_for(party).is_some(),"No seats for {}",party); }
}

#[test]
fn compare_a_few_samples() {
    let table = tk2012::alignment_table().unwrap();
    let outcome = tk2012::real_outcome().unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(2012);
    let mut samples = SampleCollection::new(table.num_parties());
    for _ in 0..10 { samples.push(build_sample(&table,&mut rng,BatchSize::DEFAULT)); }
    let results = compare(&samples,&table,&outcome).unwrap();
    assert_eq!(10,results.len());
    let estimated : f64 = results.iter().map(|r|r.estimated_share).sum();
    let real : f64 = results.iter().map(|r|r.real_share).sum();
    assert!((estimated-1.0).abs()<1e-9);
    assert!((real-1.0).abs()<1e-9);
    for pair in results.windows(2) { assert!(pair[0].estimated_share>=pair[1].estimated_share); }
    let vvd = results.iter().find(|r|r.name=="VVD").unwrap();
    assert_eq!(31.0/150.0,vvd.real_share);
}
