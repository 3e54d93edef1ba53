// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.

//! Where the questionnaire and election result come from: files if given, otherwise the built in 2012 data.

use std::path::Path;
use anyhow::Context;
use advice::alignment::AlignmentTable;
use advice::real_outcome::RealOutcome;

pub fn load_alignment(path:Option<&Path>) -> anyhow::Result<AlignmentTable> {
    match path {
        Some(path) => AlignmentTable::load_json(path).with_context(||format!("Could not read alignment table from {}",path.display())),
        None => {
            let table = tk2012::alignment_table().context("Built in 2012 alignment table is corrupt")?;
            log::warn!("Built in 2012 stances are a placeholder, so estimates are illustrative only. Use --alignment to load the published stances. Source: {}",table.source().unwrap_or("unknown"));
            Ok(table)
        }
    }
}

pub fn load_outcome(path:Option<&Path>) -> anyhow::Result<RealOutcome> {
    match path {
        Some(path) => RealOutcome::load_json(path).with_context(||format!("Could not read election outcome from {}",path.display())),
        None => tk2012::real_outcome().context("Built in 2012 election outcome is corrupt"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_in_data() {
        assert_eq!(10,load_alignment(None).unwrap().num_parties());
        assert_eq!(150,load_outcome(None).unwrap().total_seats());
    }

    #[test]
    fn built_in_stances_are_marked_as_placeholder() {
        let table = load_alignment(None).unwrap();
        assert!(table.source().unwrap().contains("not the published"));
        assert!(table.source().unwrap().starts_with(tk2012::PLACEHOLDER_NOTICE));
    }

    #[test]
    fn missing_file_names_the_file() {
        let err = load_outcome(Some(Path::new("no/such/outcome.json"))).unwrap_err();
        assert!(format!("{}",err).contains("no/such/outcome.json"));
    }
}
