// Dweve CSVGuard - Schema-Validated CSV Parsing
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

//! CSVGuard Command Line Interface

use clap::Parser;
use csvguard_cli::cli::Commands;
use csvguard_cli::logging;
use std::process::ExitCode;

/// CSVGuard - schema-validated CSV parsing
///
/// Parses comma-delimited files into fixed-arity rows, validates them against
/// a schema and reports every rejected line with its line number.
///
/// # Examples
///
/// ```bash
/// # Print rows, report malformed lines
/// csvguard parse data/people.csv
///
/// # Typed records as JSON
/// csvguard parse data/people.csv --schema people --format json
///
/// # Summary only, non-zero exit on any rejected row
/// csvguard check data/people.csv --schema people
/// ```
#[derive(Parser)]
#[command(name = "csvguard")]
#[command(author, version, about = "CSVGuard - schema-validated CSV parsing", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
