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

//! Validate command - check that every DATE line parses

use super::read_file;
use crate::error::CliError;
use colored::Colorize;
use gedcom_lex::LineReader;

/// Check that every DATE line of a GEDCOM file yields a structured date.
///
/// Prints `✓` and a short summary when all dates parse. Otherwise prints `✗`
/// followed by each text-only date with its line number.
///
/// # Errors
///
/// Returns [`CliError::UnparsedDates`] when any date was kept as text, or an
/// I/O error if the file cannot be read.
///
/// # Examples
///
/// ```no_run
/// use gedcom_cli::commands::validate;
///
/// # fn main() -> Result<(), gedcom_cli::error::CliError> {
/// validate("family.ged")?;
/// # Ok(())
/// # }
/// ```
pub fn validate(file: &str) -> Result<(), CliError> {
    let content = read_file(file)?;
    let mut reader = LineReader::new(content.as_slice());

    let mut dates = 0;
    let mut failures = Vec::new();
    for line in reader.by_ref() {
        let line = line?;
        if let Some(date) = line.as_date() {
            dates += 1;
            if let Some(text) = date.text() {
                failures.push((line.line_number, text.to_string()));
            }
        }
    }
    let stats = reader.stats();

    if failures.is_empty() {
        println!("{} {}", "✓".green().bold(), file);
        println!("  Lines: {}", stats.logical_lines);
        println!("  Dates: {}", dates);
        if stats.dropped_lines > 0 {
            println!("  Dropped lines: {}", stats.dropped_lines);
        }
        return Ok(());
    }

    println!("{} {}", "✗".red().bold(), file);
    for (line_number, text) in &failures {
        println!("  line {}: {:?}", line_number, text);
    }
    Err(CliError::UnparsedDates {
        count: failures.len(),
    })
}
