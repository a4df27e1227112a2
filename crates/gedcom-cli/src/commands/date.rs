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

//! Date command - run the date extractor on command-line text

use crate::error::CliError;
use colored::Colorize;
use gedcom_lex::{Date, DateExtractor};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct DateReport<'a> {
    input: &'a str,
    canonical: String,
    text_only: bool,
    date: &'a Date,
}

/// Extract a structured date from each argument and print it.
///
/// Text that matches no date form is reported as text-only; that is not an
/// error.
///
/// # Errors
///
/// Returns `Err` if no text is given or output cannot be written.
pub fn date(texts: &[String], json: bool) -> Result<(), CliError> {
    if texts.is_empty() {
        return Err(CliError::invalid_input("no date text given"));
    }

    let extractor = DateExtractor::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for text in texts {
        let date = extractor.extract(text);
        let written = if json {
            let report = DateReport {
                input: text,
                canonical: date.to_string(),
                text_only: date.is_text_only(),
                date: &date,
            };
            writeln!(out, "{}", serde_json::to_string(&report)?)
        } else if date.is_text_only() {
            writeln!(out, "{} {:?}  {}", "✗".yellow().bold(), text, "text only".dimmed())
        } else {
            writeln!(
                out,
                "{} {:?}  ->  {}  (quality: {:?}, modifier: {:?}, calendar: {})",
                "✓".green().bold(),
                text,
                date,
                date.quality,
                date.modifier,
                date.calendar
            )
        };
        written.map_err(CliError::stdout)?;
    }

    Ok(())
}
