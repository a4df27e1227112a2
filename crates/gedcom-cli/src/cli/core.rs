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

//! Commands that read a GEDCOM file.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

/// Commands over a GEDCOM file.
#[derive(Subcommand)]
pub enum CoreCommands {
    /// Print every logical line
    ///
    /// Lines are shown after CONT/CONC folding, with their token kind and
    /// interpreted value.
    Lines {
        /// Input GEDCOM file
        #[arg(value_name = "FILE")]
        file: String,

        /// Emit one JSON object per line
        #[arg(long)]
        json: bool,

        /// Only show lines at this level or shallower
        #[arg(short, long, value_name = "N")]
        level: Option<u32>,
    },

    /// Show line, token and date counts
    Stats {
        /// Input GEDCOM file
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Check that every DATE line parses
    ///
    /// Exits with status 1 and lists the offending lines when any date could
    /// only be kept as plain text.
    Validate {
        /// Input GEDCOM file
        #[arg(value_name = "FILE")]
        file: String,
    },
}

impl CoreCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Lines { file, json, level } => commands::lines(&file, json, level),
            CoreCommands::Stats { file } => commands::stats(&file),
            CoreCommands::Validate { file } => commands::validate(&file),
        }
    }
}
