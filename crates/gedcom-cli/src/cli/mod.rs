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

//! CLI command definitions and argument parsing.
//!
//! - [`core`]: commands over a GEDCOM file (lines, stats, validate)
//! - [`date`]: the date extractor on its own

mod core;
mod date;

use crate::error::CliError;
use clap::Subcommand;

pub use self::core::CoreCommands;
pub use self::date::DateCommands;

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Core (lines, stats, validate)
/// └── Date (date)
/// ```
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use gedcom_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Date(DateCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if file I/O fails, output cannot be written, or a
    /// validation check fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Date(cmd) => cmd.execute(),
        }
    }
}
