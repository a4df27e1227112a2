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

//! CLI command implementations

mod date;
mod lines;
mod stats;
mod validate;

pub use date::date;
pub use lines::lines;
pub use stats::stats;
pub use validate::validate;

use crate::error::CliError;
use gedcom_lex::{GedLine, LineData};
use std::fs;
use tracing::debug;

/// Default maximum file size (1 GB).
/// Can be overridden via the GEDLEX_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("GEDLEX_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a GEDCOM file from disk with size validation.
///
/// The content is returned as raw bytes; decoding (BOM, invalid UTF-8) is
/// left to the line reader.
///
/// # Errors
///
/// Returns `Err` if the file metadata cannot be read, the file is larger than
/// the limit, or reading fails.
///
/// # Examples
///
/// ```no_run
/// use gedcom_cli::commands::read_file;
///
/// # fn main() -> Result<(), gedcom_cli::error::CliError> {
/// let content = read_file("family.ged")?;
/// assert!(!content.is_empty());
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: &str) -> Result<Vec<u8>, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    let bytes = fs::read(path).map_err(|e| CliError::io_error(path, e))?;
    debug!(path, bytes = bytes.len(), "input read");
    Ok(bytes)
}

/// One-line human readable rendering of a line's interpreted data.
pub fn describe(line: &GedLine) -> String {
    match &line.data {
        LineData::Text(text) => text.replace('\n', "\\n"),
        LineData::Date(date) if date.is_text_only() => {
            format!("date (text) {:?}", date.text().unwrap_or_default())
        }
        LineData::Date(date) => format!("date {}", date),
        LineData::Sex(sex) => format!("sex {}", sex),
        LineData::NoteRef(id) => format!("note -> @{}@", id),
        LineData::Event(event) if event.description.is_empty() => {
            format!("event {}", event.event_type)
        }
        LineData::Event(event) => format!("event {}: {}", event.event_type, event.description),
        LineData::Attribute(attr) => format!("attribute {}: {}", attr.attr_type, attr.value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gedcom_lex::LineReader;

    fn first_line(input: &str) -> GedLine {
        LineReader::new(input.as_bytes())
            .next()
            .expect("one line")
            .expect("readable")
    }

    #[test]
    fn test_describe_shapes() {
        assert_eq!(describe(&first_line("1 NAME John /Doe/\n")), "John /Doe/");
        assert_eq!(describe(&first_line("1 NOTE a\n2 CONT b\n")), "a\\nb");
        assert_eq!(describe(&first_line("1 SEX F\n")), "sex female");
        assert_eq!(describe(&first_line("1 NOTE @N1@\n")), "note -> @N1@");
        assert_eq!(describe(&first_line("1 BIRT\n")), "event Birth");
        assert_eq!(
            describe(&first_line("1 OCCU Smith\n")),
            "event Occupation: Smith"
        );
        assert_eq!(
            describe(&first_line("1 NCHI 4\n")),
            "attribute Number of Children: 4"
        );
        assert_eq!(describe(&first_line("2 DATE ABT 1850\n")), "date ABT 1850");
        assert_eq!(
            describe(&first_line("2 DATE whenever\n")),
            "date (text) \"whenever\""
        );
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_file("/nonexistent/family.ged").unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
