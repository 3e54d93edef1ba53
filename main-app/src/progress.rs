// Copyright 2024 Andrew Conway.
// This file is part of AdviceBias.
// AdviceBias is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// AdviceBias is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with AdviceBias.  If not, see <https://www.gnu.org/licenses/>.

//! A single line on the terminal, overwritten after every sample.

use std::io::Write;
use advice::convergence::Progress;

pub struct ProgressLine<W:Write> {
    out : W,
    error : Option<std::io::Error>,
}

impl <W:Write> ProgressLine<W> {
    pub fn new(out:W) -> Self { ProgressLine{ out, error: None } }

    /// Overwrite the line with the new status. Errors are remembered and reported by [ProgressLine::finish].
    pub fn update(&mut self,progress:&Progress) {
        if self.error.is_some() { return; }
        let res = write!(self.out,"{}             \r",progress).and_then(|_|self.out.flush());
        if let Err(e) = res { self.error=Some(e); }
    }

    /// Move off the progress line.
    pub fn finish(mut self) -> std::io::Result<W> {
        if let Some(e) = self.error.take() { return Err(e); }
        writeln!(self.out)?;
        Ok(self.out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_line() {
        let mut line = ProgressLine::new(Vec::new());
        line.update(&Progress{num_samples:1,delta:0.5});
        line.update(&Progress{num_samples:2,delta:0.00001});
        let text = String::from_utf8(line.finish().unwrap()).unwrap();
        assert!(text.starts_with("Samples: 1, convergence: 50.0000%"));
        assert!(text.contains("\rSamples: 2, convergence: 0.0010%"));
        assert!(text.ends_with("\r\n"));
    }
}
