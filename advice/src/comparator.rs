// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.

//! Compare the simulated advice with what actually happened in the election.

use std::collections::HashSet;
use serde::{Serialize,Deserialize};
use thiserror::Error;
use crate::alignment::{AlignmentTable, PartyIndex};
use crate::real_outcome::RealOutcome;
use crate::sample::SampleCollection;

#[derive(Error,Debug,Clone,PartialEq,Eq)]
pub enum DataMismatchError {
    #[error("Party {0} is in the questionnaire but has no seat count in the real outcome")]
    MissingFromOutcome(String),
    #[error("Party {0} has a seat count in the real outcome but is not in the questionnaire")]
    MissingFromQuestionnaire(String),
    #[error("Party {0} appears more than once in the real outcome")]
    DuplicateInOutcome(String),
    #[error("The real outcome does not allocate any seats")]
    NoSeats,
    #[error("The samples have {samples} parties but the questionnaire has {questionnaire}")]
    WrongNumberOfParties{samples:usize,questionnaire:usize},
}

/// How one party fared, simulated versus real.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct PartyResult {
    pub party : PartyIndex,
    pub name : String,
    /// mean share of the advice over all samples
    pub estimated_share : f64,
    /// share of the seats actually won
    pub real_share : f64,
    /// population standard deviation of the share over all samples
    pub stdev : f64,
}

impl PartyResult {
    pub fn absolute_error(&self) -> f64 { (self.estimated_share-self.real_share).abs() }
}

/// Check every party in the questionnaire has exactly one seat count in the real outcome, and vice versa, and that some seats were allocated.
pub fn check_parties(alignment:&AlignmentTable,real_outcome:&RealOutcome) -> Result<(),DataMismatchError> {
    let mut seen = HashSet::new();
    for entry in &real_outcome.seats {
        if !seen.insert(entry.party.as_str()) { return Err(DataMismatchError::DuplicateInOutcome(entry.party.clone())); }
    }
    for name in alignment.parties() {
        if !seen.contains(name.as_str()) { return Err(DataMismatchError::MissingFromOutcome(name.clone())); }
    }
    if let Some(extra) = real_outcome.seats.iter().find(|s|alignment.find_party(&s.party).is_none()) {
        return Err(DataMismatchError::MissingFromQuestionnaire(extra.party.clone()));
    }
    if real_outcome.total_seats()==0 { return Err(DataMismatchError::NoSeats); }
    Ok(())
}

/// Produce one result per party, sorted by estimated share, largest first. Parties with equal estimated shares stay in questionnaire order.
///
/// The parties must match, as described in [check_parties].
pub fn compare(samples:&SampleCollection,alignment:&AlignmentTable,real_outcome:&RealOutcome) -> Result<Vec<PartyResult>,DataMismatchError> {
    if samples.num_parties()!=alignment.num_parties() {
        return Err(DataMismatchError::WrongNumberOfParties{samples:samples.num_parties(),questionnaire:alignment.num_parties()});
    }
    check_parties(alignment,real_outcome)?;
    let total_seats = real_outcome.total_seats();
    let mean = samples.mean();
    let stdev = samples.population_stdev();
    let mut res : Vec<PartyResult> = alignment.parties().iter().enumerate().map(|(i,name)|{
        let seats = real_outcome.seats_for(name).unwrap_or(0);
        PartyResult{
            party: PartyIndex(i),
            name: name.clone(),
            estimated_share: mean[i],
            real_share: seats as f64/total_seats as f64,
            stdev: stdev[i],
        }
    }).collect();
    res.sort_by(|a,b|b.estimated_share.total_cmp(&a.estimated_share));
    Ok(res)
}
