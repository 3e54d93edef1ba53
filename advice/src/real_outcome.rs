// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.

//! The seats parties actually won in an election.

use std::fs::File;
use std::path::Path;
use serde::{Serialize,Deserialize};

/// The number of seats won by one party.
#[derive(Debug,Clone,PartialEq,Eq,Serialize,Deserialize)]
pub struct SeatCount {
    pub party : String,
    pub seats : usize,
}

/// The official result of an election, as seats per party.
#[derive(Debug,Clone,PartialEq,Eq,Serialize,Deserialize)]
pub struct RealOutcome {
    /// where the figures came from, such as a URL.
    #[serde(skip_serializing_if = "Option::is_none",default)]
    pub source : Option<String>,
    pub seats : Vec<SeatCount>,
}

impl RealOutcome {
    /// Make from (party name, seats) pairs.
    /// ```
    /// use advice::real_outcome::RealOutcome;
    /// let outcome = RealOutcome::from_pairs(&[("A",31),("B",30)]);
    /// assert_eq!(61,outcome.total_seats());
    /// assert_eq!(Some(30),outcome.seats_for("B"));
    /// assert_eq!(None,outcome.seats_for("C"));
    /// ```
    pub fn from_pairs(pairs:&[(&str,usize)]) -> Self {
        RealOutcome{ source: None, seats: pairs.iter().map(|&(party,seats)|SeatCount{party:party.to_string(),seats}).collect() }
    }

    pub fn total_seats(&self) -> usize { self.seats.iter().map(|s|s.seats).sum() }

    pub fn seats_for(&self,party:&str) -> Option<usize> { self.seats.iter().find(|s|s.party==party).map(|s|s.seats) }

    /// Fraction of all seats won by the party. None if the party is not listed or no seats were allocated.
    pub fn real_share(&self,party:&str) -> Option<f64> {
        let total = self.total_seats();
        if total==0 { return None; }
        self.seats_for(party).map(|seats|seats as f64/total as f64)
    }

    pub fn load_json(path:&Path) -> anyhow::Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}
