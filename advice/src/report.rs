// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.

//! The final, human or machine readable, summary of a run.

use std::fmt;
use serde::{Serialize,Deserialize};
use crate::alignment::AlignmentTable;
use crate::comparator::{compare, DataMismatchError, PartyResult};
use crate::convergence::{ConvergenceOutcome, EngineStatus};
use crate::real_outcome::RealOutcome;

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct ComparisonReport {
    pub num_samples : usize,
    pub status : EngineStatus,
    /// change in the largest standard deviation caused by the last sample
    pub final_delta : f64,
    /// 3 times the largest standard deviation
    pub estimated_error : f64,
    /// sorted by estimated share, largest first.
    pub results : Vec<PartyResult>,
}

impl ComparisonReport {
    pub fn new(outcome:&ConvergenceOutcome,alignment:&AlignmentTable,real_outcome:&RealOutcome) -> Result<Self,DataMismatchError> {
        Ok(ComparisonReport{
            num_samples: outcome.samples.len(),
            status: outcome.status,
            final_delta: outcome.delta,
            estimated_error: outcome.estimated_error(),
            results: compare(&outcome.samples,alignment,real_outcome)?,
        })
    }

    pub fn estimated_error_line(&self) -> String {
        let prefix = match self.status {
            EngineStatus::Converged => "Converged.".to_string(),
            _ => format!("Stopped after {} samples without converging.",self.num_samples),
        };
        format!("{} Estimated error (3 σ ≈ 99.73% confidence) = {:.2}%",prefix,100.0*self.estimated_error)
    }

    pub fn print_table_results(&self) {
        print!("{}",self);
    }
}

/// One line, percentages to 2 decimal places, name padded so columns line up.
/// ```
/// use advice::alignment::PartyIndex;
/// use advice::comparator::PartyResult;
/// let r = PartyResult{party:PartyIndex(0),name:"VVD".to_string(),estimated_share:0.1,real_share:0.2066666,stdev:0.01};
/// assert_eq!("- VVD                            estimated: 10.00%\treal: 20.67%\terror: 10.67%",advice::report::result_line(&r));
/// ```
pub fn result_line(result:&PartyResult) -> String {
    format!("- {:<30} estimated: {:.2}%\treal: {:.2}%\terror: {:.2}%",result.name,100.0*result.estimated_share,100.0*result.real_share,100.0*result.absolute_error())
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f,"{}",self.estimated_error_line())?;
        writeln!(f)?;
        writeln!(f,"Who would win the election?")?;
        writeln!(f)?;
        for result in &self.results {
            writeln!(f,"{}",result_line(result))?;
        }
        Ok(())
    }
}
