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

//! gedlex command line interface

use clap::Parser;
use gedcom_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// gedlex - GEDCOM line and date lexer
///
/// # Examples
///
/// ```bash
/// # Show the logical lines of a file, records and their direct children only
/// gedlex lines family.ged --level 1
///
/// # Parse date text
/// gedlex date "BET 1 JAN 1900 AND 31 DEC 1900" "@#DJULIAN@ 12 JAN 1700"
///
/// # Fail when any DATE line does not parse
/// gedlex validate family.ged
/// ```
#[derive(Parser)]
#[command(name = "gedlex")]
#[command(author, version, about = "gedlex - GEDCOM line and date lexer", long_about = None)]
struct Cli {
    /// Log dropped lines and date fallbacks to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = ["gedcom_lex", "gedcom_cli"]
        .iter()
        .fold(EnvFilter::from_default_env(), |filter, target| {
            filter.add_directive(
                format!("{}={}", target, level)
                    .parse()
                    .expect("valid log directive"),
            )
        });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
