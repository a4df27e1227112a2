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

//! gedlex CLI library.
//!
//! Command implementations for the `gedlex` binary, a front end to the
//! `gedcom-lex` reader and date extractor.
//!
//! # Commands
//!
//! - **lines**: print every logical line of a GEDCOM file
//! - **date**: parse date text given on the command line
//! - **stats**: line, token and date counts for a file
//! - **validate**: fail when any DATE line is kept as plain text
//!
//! # Examples
//!
//! ```no_run
//! use gedcom_cli::commands::validate;
//!
//! # fn main() -> Result<(), gedcom_cli::error::CliError> {
//! validate("family.ged")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
