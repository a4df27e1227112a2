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

//! Date extraction command.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum DateCommands {
    /// Parse GEDCOM date text
    ///
    /// Each argument is extracted separately and printed with its canonical
    /// GEDCOM form.
    Date {
        /// Date text, e.g. "BET 1 JAN 1900 AND 31 DEC 1900"
        #[arg(value_name = "TEXT", required = true)]
        texts: Vec<String>,

        /// Emit one JSON object per date
        #[arg(long)]
        json: bool,
    },
}

impl DateCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            DateCommands::Date { texts, json } => commands::date(&texts, json),
        }
    }
}
