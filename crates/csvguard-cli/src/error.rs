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

//! Structured error types for the CSVGuard CLI.

use csvguard_core::CsvGuardError;
use std::io;
use thiserror::Error;

/// The main error type for CSVGuard CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// The parser failed: unreadable file, bad configuration, row limit,
    /// or the first bad row in strict mode.
    #[error(transparent)]
    Parse(#[from] CsvGuardError),

    /// Writing to stdout failed.
    #[error("output error: {0}")]
    Output(#[from] io::Error),

    /// JSON serialization failed.
    #[error("JSON format error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization failed.
    #[error("CSV format error: {0}")]
    Csv(#[from] csv::Error),

    /// `check` found rejected rows.
    #[error("{count} row(s) rejected in '{file}'")]
    RowsRejected {
        /// The checked file
        file: String,
        /// Number of rejected rows
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvguard_core::ParseError;

    #[test]
    fn test_rows_rejected_display() {
        let err = CliError::RowsRejected {
            file: "people.csv".to_string(),
            count: 2,
        };
        assert_eq!(err.to_string(), "2 row(s) rejected in 'people.csv'");
    }

    #[test]
    fn test_parse_error_is_transparent() {
        let core = CsvGuardError::Row(ParseError::single(3, "Must be a valid number."));
        let expected = core.to_string();
        let err = CliError::from(core);
        assert_eq!(err.to_string(), expected);
    }
}
