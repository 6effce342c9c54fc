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

//! CSVGuard CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **parse**: Print the rows (or schema records) of a CSV file as text, JSON or CSV,
//!   reporting rejected lines on stderr
//! - **check**: Print a pass/fail summary and exit non-zero if any line was rejected
//!
//! # Examples
//!
//! ```no_run
//! use csvguard_cli::commands::{check, parse, ParseArgs};
//! use csvguard_cli::cli::OutputFormat;
//! use csvguard_cli::schemas::SchemaKind;
//!
//! # fn main() -> Result<(), csvguard_cli::error::CliError> {
//! parse(&ParseArgs {
//!     file: "data/people.csv".to_string(),
//!     schema: SchemaKind::People,
//!     arity: 3,
//!     max_rows: None,
//!     strict: false,
//!     format: OutputFormat::Json,
//! })?;
//!
//! check("data/people.csv", SchemaKind::None, 3)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod schemas;
