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

//! Check command - pass/fail summary

use super::collect;
use crate::error::CliError;
use crate::schemas::SchemaKind;
use colored::Colorize;
use csvguard_core::ParseConfig;

/// Check a CSV file and print a summary.
///
/// # Output
///
/// Prints to stdout:
/// - Status (✓ or ✗) and file name
/// - Accepted and rejected row counts
/// - Arity and schema in use
/// - One line per rejected row
///
/// # Errors
///
/// Returns [`CliError::RowsRejected`] if any row was rejected, or the parse
/// error if the file could not be parsed at all.
pub fn check(file: &str, schema: SchemaKind, arity: usize) -> Result<(), CliError> {
    let records = collect(file, schema, &ParseConfig::new(arity))?;
    let errors = records.errors();

    if errors.is_empty() {
        println!("{} {}", "✓".green().bold(), file);
    } else {
        println!("{} {}", "✗".red().bold(), file);
    }
    println!("  Accepted: {}", records.accepted());
    println!("  Rejected: {}", errors.len());
    println!("  Arity: {}", arity);
    println!("  Schema: {}", schema);
    for error in errors {
        println!("    {}", error.to_string().yellow());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(CliError::RowsRejected {
            file: file.to_string(),
            count: errors.len(),
        })
    }
}
