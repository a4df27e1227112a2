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

//! GEDCOM Line and Date Lexer
//!
//! This crate turns GEDCOM 5.5 text into a stream of typed logical lines,
//! ready for a record assembler that groups them by level into individuals,
//! families, notes and sources.
//!
//! # Features
//!
//! - **Pull-based**: one logical line per call, or an `Iterator`
//! - **Continuation folding**: `CONT`/`CONC` lines are merged into the line
//!   they continue
//! - **Typed payloads**: dates, sex codes, note pointers, events and
//!   attributes are decoded per tag
//! - **Forgiving**: malformed lines are dropped and unparseable dates are kept
//!   as text; only I/O errors stop a pass
//!
//! # Reading Lines
//!
//! ```rust
//! use gedcom_lex::{LineReader, TokenKind, Sex, Modifier};
//! use std::io::Cursor;
//!
//! let input = "0 @I1@ INDI\n1 NAME John /Doe/\n1 SEX M\n1 BIRT\n2 DATE ABT 1850\n";
//! let lines: Vec<_> = LineReader::new(Cursor::new(input))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//!
//! assert_eq!(lines[0].token, TokenKind::Id);
//! assert_eq!(lines[0].tag, "I1");
//! assert_eq!(lines[2].as_sex(), Some(Sex::Male));
//! assert_eq!(lines[3].token, TokenKind::GenericEvent);
//!
//! let date = lines[4].as_date().unwrap();
//! assert_eq!(date.modifier, Modifier::About);
//! assert_eq!(date.year(), Some(1850));
//! ```
//!
//! # Dates on Their Own
//!
//! ```rust
//! use gedcom_lex::{extract_date, Calendar, Modifier};
//!
//! let date = extract_date("BET @#DJULIAN@ 1700 AND @#DJULIAN@ 1710");
//! assert_eq!(date.modifier, Modifier::Range);
//! assert_eq!(date.calendar, Calendar::Julian);
//! ```
//!
//! # Configuration
//!
//! ```rust
//! use gedcom_lex::{LineReader, ReaderConfig};
//! use std::io::Cursor;
//!
//! let config = ReaderConfig {
//!     lookahead: 8,
//!     ..Default::default()
//! };
//! let reader = LineReader::with_config(Cursor::new("0 HEAD\n"), config).unwrap();
//! assert_eq!(reader.config().lookahead, 8);
//! ```

mod config;
mod date;
mod error;
mod interpret;
mod line;
mod model;
mod reader;
mod tables;
mod token;

pub use config::{ReaderConfig, MIN_LOOKAHEAD};
pub use date::{
    extract_date, Calendar, Date, DateExtractor, DateParser, DateValue, Modifier, Quality,
};
pub use error::{DateError, LexError, LexResult};
pub use interpret::LineInterpreter;
pub use line::{GedLine, LineData, RawLine};
pub use model::{Attribute, AttributeType, Event, EventType, Sex};
pub use reader::{LineReader, ReaderStats};
pub use tables::{TagTables, STANDARD_ATTRIBUTES, STANDARD_EVENTS};
pub use token::{classify, TokenKind};
