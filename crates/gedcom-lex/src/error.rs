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

//! Error types for the GEDCOM lexer.
//!
//! Most of what goes wrong in a GEDCOM file is *not* an error as far as this
//! crate is concerned: malformed physical lines are dropped, unknown tags are
//! passed through as text, and unparseable dates degrade to text-only dates.
//! What remains is deliberately small:
//!
//! - [`LexError`]: failures of the underlying stream and invalid reader
//!   configuration. These are the only errors [`LineReader`](crate::LineReader)
//!   ever returns.
//! - [`DateError`]: why a date text did not match the grammar. Returned by
//!   [`DateParser`](crate::DateParser); [`extract_date`](crate::extract_date)
//!   turns every one of these into a text-only [`Date`](crate::Date).
//!
//! # Examples
//!
//! ```rust
//! use gedcom_lex::{DateParser, DateError, Calendar};
//!
//! let err = DateParser::new().parse("12 FOO 1900", Calendar::Gregorian).unwrap_err();
//! assert!(matches!(err, DateError::UnknownMonth(ref m) if m == "FOO"));
//! ```

use thiserror::Error;

/// Errors returned by the line reader.
#[derive(Error, Debug)]
pub enum LexError {
    /// IO error from the underlying stream.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Reader configuration rejected by [`LineReader::with_config`](crate::LineReader::with_config).
    #[error("Invalid reader configuration: {0}")]
    InvalidConfig(String),
}

impl LexError {
    /// Create an invalid configuration error.
    #[inline]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Result type for line reader operations.
pub type LexResult<T> = Result<T, LexError>;

/// Reasons a date text could not be parsed into a structured date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Nothing left to parse after stripping qualifiers.
    #[error("empty date text")]
    Empty,

    /// Month name not found in the calendar's month table.
    #[error("unknown month name '{0}'")]
    UnknownMonth(String),

    /// Month number outside the calendar's month count.
    #[error("month {month} out of range (1..={max})")]
    MonthOutOfRange { month: u32, max: u32 },

    /// Day number not valid for the given month.
    #[error("day {day} out of range for month {month} (1..={max})")]
    DayOutOfRange { day: u32, month: u32, max: u32 },

    /// Year component missing or not a number.
    #[error("invalid year '{0}'")]
    InvalidYear(String),

    /// Text does not match any recognized date form.
    #[error("unrecognized date syntax '{0}'")]
    Syntax(String),
}

impl DateError {
    /// Create a syntax error carrying the offending text.
    #[inline]
    pub fn syntax(text: impl Into<String>) -> Self {
        Self::Syntax(text.into())
    }
}
