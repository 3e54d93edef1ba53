// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.

//! Simulate the advice the questionnaire gives one voter who answers at random.

use rand::Rng;
use crate::alignment::{AlignmentTable, PartyIndex, Stance};

/// Answer every topic uniformly at random and return the party the questionnaire would put first.
///
/// A party scores one point for each topic where its stance is identical to the answer.
pub fn sample_voter_top_choice<R:Rng+?Sized>(alignment:&AlignmentTable,rng:&mut R) -> PartyIndex {
    let mut matches = vec![0usize;alignment.num_parties()];
    for topic in alignment.topics() {
        let vote = Stance::random(rng);
        for (score,&stance) in matches.iter_mut().zip(topic) {
            if stance==vote { *score+=1; }
        }
    }
    top_choice(&matches)
}

/// The index with the highest score. In case of ties, the first such index wins,
/// as the questionnaire lists tied parties in their original order.
/// ```
/// use advice::voter_sampler::top_choice;
/// use advice::alignment::PartyIndex;
/// assert_eq!(PartyIndex(1),top_choice(&[2,5,1,5]));
/// assert_eq!(PartyIndex(0),top_choice(&[0,0,0]));
/// ```
pub fn top_choice(scores:&[usize]) -> PartyIndex {
    let mut best = 0;
    for (i,&score) in scores.iter().enumerate().skip(1) {
        if score>scores[best] { best=i; }
    }
    PartyIndex(best)
}
