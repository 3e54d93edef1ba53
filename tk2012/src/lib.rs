// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.

//! Data for the 2012 Dutch general election (Tweede Kamer): the parties in the voting advice questionnaire, and the seats actually won.
//!
//! The seat counts are the real result. The stance matrix is a placeholder in the shape of the
//! questionnaire (30 statements, 10 parties), not the published stances; its `source` says so.

use advice::alignment::AlignmentTable;
use advice::real_outcome::RealOutcome;

const ALIGNMENT_JSON : &str = include_str!("../data/alignment.json");
const OUTCOME_JSON : &str = include_str!("../data/outcome.json");

/// The start of the `source` of the built in stance matrix.
pub const PLACEHOLDER_NOTICE : &str = "Placeholder stances";

/// A placeholder stance for each of the 10 parties on each of 30 statements. Not the published questionnaire.
/// Use [PLACEHOLDER_NOTICE] to recognise it.
pub fn alignment_table() -> anyhow::Result<AlignmentTable> {
    Ok(serde_json::from_str(ALIGNMENT_JSON)?)
}

/// Seats in the 150 seat Tweede Kamer.
pub fn real_outcome() -> anyhow::Result<RealOutcome> {
    Ok(serde_json::from_str(OUTCOME_JSON)?)
}
