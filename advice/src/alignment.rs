// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.

//! The fixed table of what each party thinks about each topic in the questionnaire.

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::path::Path;
use rand::Rng;
use serde::{Serialize,Deserialize};
use thiserror::Error;

/// a party, referred to by position in the questionnaire's party list, 0 being first
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,Serialize,Deserialize)]
pub struct PartyIndex(pub usize);
// type alias really, don't want long display
impl fmt::Display for PartyIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.0) }
}
// type alias really, don't want long display
impl fmt::Debug for PartyIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "#{}", self.0) }
}

/// a topic (statement) in the questionnaire, 0 being first
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,Serialize,Deserialize)]
pub struct TopicIndex(pub usize);
impl fmt::Display for TopicIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{}", self.0) }
}
impl fmt::Debug for TopicIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "T{}", self.0) }
}

/// A position on a topic, either a party's or a voter's. Stored in files as -1, 0 or 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug,Serialize,Deserialize)]
#[serde(try_from="i8",into="i8")]
pub enum Stance {
    Disagree,
    Neutral,
    Agree,
}

impl Stance {
    pub const ALL : [Stance;3] = [Stance::Disagree,Stance::Neutral,Stance::Agree];

    /// Each of the three stances with probability 1/3.
    pub fn random<R:Rng+?Sized>(rng:&mut R) -> Stance {
        Stance::ALL[rng.random_range(0..Stance::ALL.len())]
    }
}

impl TryFrom<i8> for Stance {
    type Error = AlignmentTableError;
    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Stance::Disagree),
            0 => Ok(Stance::Neutral),
            1 => Ok(Stance::Agree),
            _ => Err(AlignmentTableError::InvalidStance(value)),
        }
    }
}

impl From<Stance> for i8 {
    fn from(stance: Stance) -> Self {
        match stance {
            Stance::Disagree => -1,
            Stance::Neutral => 0,
            Stance::Agree => 1,
        }
    }
}

#[derive(Error,Debug,Clone,PartialEq,Eq)]
pub enum AlignmentTableError {
    #[error("Stance {0} is not one of -1, 0 or 1")]
    InvalidStance(i8),
    #[error("The alignment table does not list any parties")]
    NoParties,
    #[error("The alignment table does not have any topics")]
    NoTopics,
    #[error("Topic {topic} has {found} stances but there are {expected} parties")]
    RaggedTopic{topic:TopicIndex,found:usize,expected:usize},
    #[error("Party {0} is listed more than once")]
    DuplicateParty(String),
}

/// The stance of every party on every topic. Immutable once made.
///
/// In JSON this looks like
/// ```json
/// { "parties" : ["A","B"], "topics" : [[1,-1],[0,1]] }
/// ```
/// where each entry of `topics` holds one stance per party, in the order of `parties`.
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(try_from="UncheckedAlignmentTable")]
pub struct AlignmentTable {
    /// where the data came from, such as a URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    source : Option<String>,
    parties : Vec<String>,
    topics : Vec<Vec<Stance>>,
}

#[derive(Deserialize)]
struct UncheckedAlignmentTable {
    #[serde(default)]
    source : Option<String>,
    parties : Vec<String>,
    topics : Vec<Vec<Stance>>,
}

impl TryFrom<UncheckedAlignmentTable> for AlignmentTable {
    type Error = AlignmentTableError;
    fn try_from(raw: UncheckedAlignmentTable) -> Result<Self, Self::Error> {
        let mut table = AlignmentTable::new(raw.parties,raw.topics)?;
        table.source = raw.source;
        Ok(table)
    }
}

impl AlignmentTable {
    /// Make a table, checking that it is rectangular, non-empty, and that party names are unique.
    pub fn new(parties:Vec<String>,topics:Vec<Vec<Stance>>) -> Result<Self,AlignmentTableError> {
        if parties.is_empty() { return Err(AlignmentTableError::NoParties); }
        if topics.is_empty() { return Err(AlignmentTableError::NoTopics); }
        let mut seen = HashSet::new();
        for name in &parties {
            if !seen.insert(name.as_str()) { return Err(AlignmentTableError::DuplicateParty(name.clone())); }
        }
        for (i,topic) in topics.iter().enumerate() {
            if topic.len()!=parties.len() {
                return Err(AlignmentTableError::RaggedTopic{topic:TopicIndex(i),found:topic.len(),expected:parties.len()});
            }
        }
        Ok(AlignmentTable{ source: None, parties, topics })
    }

    /// Convenience for tests and small hand made tables, with stances given as -1, 0 or 1.
    /// ```
    /// use advice::alignment::{AlignmentTable, PartyIndex, Stance, TopicIndex};
    /// let table = AlignmentTable::from_integers(&["A","B"],&[&[1,-1]]).unwrap();
    /// assert_eq!(2,table.num_parties());
    /// assert_eq!(Stance::Disagree,table.stance(TopicIndex(0),PartyIndex(1)));
    /// assert!(AlignmentTable::from_integers(&["A","B"],&[&[1,2]]).is_err());
    /// ```
    pub fn from_integers(parties:&[&str],topics:&[&[i8]]) -> Result<Self,AlignmentTableError> {
        let topics = topics.iter().map(|row|row.iter().map(|&v|Stance::try_from(v)).collect::<Result<Vec<_>,_>>()).collect::<Result<Vec<_>,_>>()?;
        AlignmentTable::new(parties.iter().map(|s|s.to_string()).collect(),topics)
    }

    pub fn source(&self) -> Option<&str> { self.source.as_deref() }

    pub fn num_parties(&self) -> usize { self.parties.len() }
    pub fn num_topics(&self) -> usize { self.topics.len() }
    pub fn parties(&self) -> &[String] { &self.parties }
    pub fn party_name(&self,party:PartyIndex) -> &str { &self.parties[party.0] }
    pub fn find_party(&self,name:&str) -> Option<PartyIndex> { self.parties.iter().position(|p|p==name).map(PartyIndex) }

    /// The stances of all parties on one topic, indexed by party.
    pub fn topic(&self,topic:TopicIndex) -> &[Stance] { &self.topics[topic.0] }
    pub fn stance(&self,topic:TopicIndex,party:PartyIndex) -> Stance { self.topics[topic.0][party.0] }
    pub fn topics(&self) -> impl Iterator<Item=&[Stance]> { self.topics.iter().map(|t|t.as_slice()) }

    /// Read a table from a JSON file in the format described for this structure.
    pub fn load_json(path:&Path) -> anyhow::Result<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_json() {
        let table : AlignmentTable = serde_json::from_str(r#"{"source":"hand made","parties":["A","B","C"],"topics":[[1,-1,0],[0,0,1]]}"#).unwrap();
        assert_eq!(3,table.num_parties());
        assert_eq!(2,table.num_topics());
        assert_eq!(Some("hand made"),table.source());
        assert_eq!(Stance::Agree,table.stance(TopicIndex(1),PartyIndex(2)));
        assert_eq!(Some(PartyIndex(1)),table.find_party("B"));
        assert_eq!(None,table.find_party("D"));
    }

    #[test]
    fn reject_bad_json() {
        assert!(serde_json::from_str::<AlignmentTable>(r#"{"parties":["A","B"],"topics":[[1,5]]}"#).is_err());
        assert!(serde_json::from_str::<AlignmentTable>(r#"{"parties":["A","B"],"topics":[[1]]}"#).is_err());
        assert!(serde_json::from_str::<AlignmentTable>(r#"{"parties":["A","A"],"topics":[[1,0]]}"#).is_err());
    }

    #[test]
    fn structural_errors() {
        assert_eq!(Err(AlignmentTableError::NoParties),AlignmentTable::from_integers(&[],&[&[]]));
        assert_eq!(Err(AlignmentTableError::NoTopics),AlignmentTable::from_integers(&["A"],&[]));
        assert_eq!(Err(AlignmentTableError::RaggedTopic{topic:TopicIndex(1),found:1,expected:2}),AlignmentTable::from_integers(&["A","B"],&[&[0,0],&[1]]));
        assert_eq!(Err(AlignmentTableError::DuplicateParty("A".to_string())),AlignmentTable::from_integers(&["A","B","A"],&[&[0,0,0]]));
        assert_eq!(Err(AlignmentTableError::InvalidStance(-2)),AlignmentTable::from_integers(&["A"],&[&[-2]]));
    }

    #[test]
    fn serialize_stances_as_integers() {
        let table = AlignmentTable::from_integers(&["A","B","C"],&[&[-1,0,1]]).unwrap();
        assert_eq!(r#"{"parties":["A","B","C"],"topics":[[-1,0,1]]}"#,serde_json::to_string(&table).unwrap());
    }
}
