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

//! CLI command definitions and argument parsing.

use crate::commands::{self, ParseArgs};
use crate::error::CliError;
use crate::schemas::SchemaKind;
use clap::{Subcommand, ValueEnum};
use csvguard_core::DEFAULT_ARITY;

/// Output format for `parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One record per line
    #[default]
    Text,
    /// Pretty JSON of data and errors
    Json,
    /// Data written back as CSV
    Csv,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Parse a CSV file and print its rows
    ///
    /// Rejected lines are reported on stderr. With --strict the first
    /// rejected line aborts the run.
    Parse {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Schema applied to each row
        #[arg(long, value_enum, default_value_t = SchemaKind::None)]
        schema: SchemaKind,

        /// Number of fields every line must have
        #[arg(long, default_value_t = DEFAULT_ARITY)]
        arity: usize,

        /// Abort after this many lines (default: no limit)
        #[arg(long, value_name = "N")]
        max_rows: Option<usize>,

        /// Fail on the first rejected line
        #[arg(short, long)]
        strict: bool,

        /// Output format (text, json, csv)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Check a CSV file and print a summary
    ///
    /// Exits with failure if any line was rejected.
    Check {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Schema applied to each row
        #[arg(long, value_enum, default_value_t = SchemaKind::None)]
        schema: SchemaKind,

        /// Number of fields every line must have
        #[arg(long, default_value_t = DEFAULT_ARITY)]
        arity: usize,
    },
}

impl Commands {
    /// Execute the command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Parse {
                file,
                schema,
                arity,
                max_rows,
                strict,
                format,
            } => commands::parse(&ParseArgs {
                file,
                schema,
                arity,
                max_rows,
                strict,
                format,
            }),
            Commands::Check {
                file,
                schema,
                arity,
            } => commands::check(&file, schema, arity),
        }
    }
}
