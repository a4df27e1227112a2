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

//! Structured error types for the gedlex CLI.
//!
//! All command functions return `Result<(), CliError>`; `main` prints the
//! error and exits non-zero.

use gedcom_lex::LexError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for gedlex command execution.
///
/// # Examples
///
/// ```rust,no_run
/// use gedcom_cli::error::CliError;
///
/// fn load(path: &str) -> Result<Vec<u8>, CliError> {
///     std::fs::read(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed (file read, metadata access, or writing output).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit (`GEDLEX_MAX_FILE_SIZE`).
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// Error from the GEDCOM reader.
    #[error("Read error: {0}")]
    Lex(String),

    /// JSON serialization error.
    #[error("JSON format error: {message}")]
    JsonFormat { message: String },

    /// DATE lines that did not parse into a structured date.
    #[error("{count} date(s) kept as plain text")]
    UnparsedDates { count: usize },

    /// Invalid command-line input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error carrying the offending path.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an I/O error for writing to standard output.
    pub fn stdout(source: io::Error) -> Self {
        Self::io_error("<stdout>", source)
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<LexError> for CliError {
    fn from(err: LexError) -> Self {
        Self::Lex(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: err.to_string(),
        }
    }
}
