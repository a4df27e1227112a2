// Dweve GEDLEX - GEDCOM line and date lexer
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Stats command - line, token and date counts for a GEDCOM file

use super::read_file;
use crate::error::CliError;
use colored::Colorize;
use gedcom_lex::{GedLine, LineReader, ReaderStats};
use std::collections::BTreeMap;
use std::io::{self, Write};

/// Counts gathered over the logical lines of one file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub records: usize,
    pub max_level: u32,
    pub dates: usize,
    pub text_dates: usize,
    /// Logical lines per token kind, keyed by token name.
    pub tokens: BTreeMap<&'static str, usize>,
}

impl Summary {
    pub fn record(&mut self, line: &GedLine) {
        if line.is_record_start() {
            self.records += 1;
        }
        self.max_level = self.max_level.max(line.level);
        *self.tokens.entry(line.token.as_str()).or_insert(0) += 1;
        if let Some(date) = line.as_date() {
            self.dates += 1;
            if date.is_text_only() {
                self.text_dates += 1;
            }
        }
    }
}

/// Print reader statistics and per-token counts for a GEDCOM file.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or output cannot be written.
pub fn stats(file: &str) -> Result<(), CliError> {
    let content = read_file(file)?;
    let mut reader = LineReader::new(content.as_slice());

    let mut summary = Summary::default();
    for line in reader.by_ref() {
        summary.record(&line?);
    }

    print_stats(file, &reader.stats(), &summary).map_err(CliError::stdout)
}

fn print_stats(file: &str, reader: &ReaderStats, summary: &Summary) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "{} {}", "Statistics for".bold(), file)?;
    writeln!(out)?;
    writeln!(out, "  Physical lines:   {}", reader.physical_lines)?;
    writeln!(out, "  Logical lines:    {}", reader.logical_lines)?;
    writeln!(out, "  Folded CONT/CONC: {}", reader.folded_lines)?;
    writeln!(out, "  Dropped lines:    {}", reader.dropped_lines)?;
    writeln!(out, "  Records:          {}", summary.records)?;
    writeln!(out, "  Deepest level:    {}", summary.max_level)?;
    writeln!(
        out,
        "  Dates:            {} parsed, {} text only",
        summary.dates - summary.text_dates,
        summary.text_dates
    )?;
    writeln!(out)?;
    writeln!(out, "{}", "Tokens".bold())?;
    for (token, count) in &summary.tokens {
        writeln!(out, "  {:<12} {:>8}", token, count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts() {
        let input = "0 HEAD\n0 @I1@ INDI\n1 BIRT\n2 DATE 1900\n1 DEAT\n2 DATE unknown\n0 TRLR\n";
        let mut summary = Summary::default();
        for line in LineReader::new(input.as_bytes()) {
            summary.record(&line.unwrap());
        }
        assert_eq!(summary.records, 3);
        assert_eq!(summary.max_level, 2);
        assert_eq!(summary.dates, 2);
        assert_eq!(summary.text_dates, 1);
        assert_eq!(summary.tokens.get("GEVENT"), Some(&2));
        assert_eq!(summary.tokens.get("DATE"), Some(&2));
        assert_eq!(summary.tokens.get("ID"), Some(&1));
    }
}
