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

//! Parse command - print rows or schema records

use super::{collect, Records};
use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::schemas::SchemaKind;
use csvguard_core::{ErrorMode, ParseConfig, ParseError};
use serde::Serialize;
use std::fmt::Debug;
use std::io::{self, Write};

/// Arguments of the `parse` command.
#[derive(Debug, Clone)]
pub struct ParseArgs {
    pub file: String,
    pub schema: SchemaKind,
    pub arity: usize,
    pub max_rows: Option<usize>,
    pub strict: bool,
    pub format: OutputFormat,
}

impl ParseArgs {
    fn config(&self) -> ParseConfig {
        let mode = if self.strict {
            ErrorMode::FailFast
        } else {
            ErrorMode::Collect
        };
        let config = ParseConfig::new(self.arity).with_error_mode(mode);
        match self.max_rows {
            Some(limit) => config.with_max_rows(limit),
            None => config,
        }
    }
}

/// Parse a CSV file and write its data to stdout.
///
/// Rejected lines go to stderr as `line N: message`. In strict mode the
/// first rejected line is returned as the error instead.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read, the configuration is invalid,
/// the row limit is exceeded, strict mode hits a bad row, or output fails.
pub fn parse(args: &ParseArgs) -> Result<(), CliError> {
    let records = collect(&args.file, args.schema, &args.config())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &records {
        Records::Rows(result) => write_data(&mut out, args.format, &result.data, &records)?,
        Records::People(result) => write_data(&mut out, args.format, &result.data, &records)?,
    }
    out.flush()?;

    report_errors(records.errors());
    Ok(())
}

fn write_data<W, T>(
    out: &mut W,
    format: OutputFormat,
    data: &[T],
    records: &Records,
) -> Result<(), CliError>
where
    W: Write,
    T: Serialize + Debug,
{
    match format {
        OutputFormat::Text => {
            for record in data {
                writeln!(out, "{:?}", record)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for record in data {
                writer.serialize(record)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

fn report_errors(errors: &[ParseError]) {
    for error in errors {
        eprintln!("{}", error);
    }
}
