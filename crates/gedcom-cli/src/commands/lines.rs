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

//! Lines command - print every logical line

use super::{describe, read_file};
use crate::error::CliError;
use colored::Colorize;
use gedcom_lex::{GedLine, LineReader};
use std::io::{self, BufWriter, Write};

/// Print the logical lines of a GEDCOM file.
///
/// # Arguments
///
/// * `file` - Path to the GEDCOM file
/// * `json` - Emit one JSON object per line instead of text
/// * `max_level` - Only print lines at this depth or shallower
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or output cannot be written.
pub fn lines(file: &str, json: bool, max_level: Option<u32>) -> Result<(), CliError> {
    let content = read_file(file)?;
    let reader = LineReader::new(content.as_slice());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for line in reader {
        let line = line?;
        if max_level.is_some_and(|max| line.level > max) {
            continue;
        }
        let rendered = if json {
            serde_json::to_string(&line)?
        } else {
            render(&line)
        };
        writeln!(out, "{}", rendered).map_err(CliError::stdout)?;
    }

    out.flush().map_err(CliError::stdout)
}

fn render(line: &GedLine) -> String {
    let indent = "  ".repeat(line.level.min(16) as usize);
    format!(
        "{:>6}  {}{} {} {}  {}",
        line.line_number,
        indent,
        line.level,
        line.tag.bold(),
        line.token.as_str().cyan(),
        describe(line)
    )
}
