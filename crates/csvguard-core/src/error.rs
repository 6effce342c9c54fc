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

//! Error types for CSV parsing.
//!
//! Errors come in two tiers:
//!
//! - **Row-level** ([`ParseError`]): an arity mismatch or a validation
//!   failure on one line. These are collected into
//!   [`ParseResult::errors`](crate::ParseResult) and never abort a parse.
//! - **Fatal** ([`CsvGuardError`]): the source cannot be opened or read, the
//!   configuration is invalid, a resource limit was hit, or a strict parse
//!   met its first bad row. These abort the parse immediately.
//!
//! # Examples
//!
//! ```
//! use csvguard_core::{CsvGuardError, ParseError};
//!
//! let row = ParseError::arity(4, 3);
//! assert_eq!(row.to_string(), "line 4: Each line must have exactly 3 values.");
//!
//! let fatal = CsvGuardError::Row(row);
//! assert_eq!(fatal.line(), Some(4));
//! ```

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A recoverable, line-scoped parse failure.
///
/// Created once per malformed line and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseError {
    /// Line number where the error occurred (1-based).
    pub line: usize,
    /// Human-readable messages, in the order they were produced.
    pub messages: Vec<String>,
}

impl ParseError {
    /// Create a parse error from a list of messages.
    pub fn new(line: usize, messages: Vec<String>) -> Self {
        Self { line, messages }
    }

    /// Create a parse error carrying a single message.
    pub fn single(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            messages: vec![message.into()],
        }
    }

    /// Create the arity-mismatch error for a line.
    ///
    /// ```
    /// use csvguard_core::ParseError;
    ///
    /// let err = ParseError::arity(2, 3);
    /// assert_eq!(err.messages, vec!["Each line must have exactly 3 values."]);
    /// ```
    pub fn arity(line: usize, expected: usize) -> Self {
        Self::single(line, format!("Each line must have exactly {} values.", expected))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.messages.join("; "))
    }
}

impl std::error::Error for ParseError {}

/// Fatal errors that abort a parse.
#[derive(Error, Debug)]
pub enum CsvGuardError {
    /// The input source could not be opened.
    #[error("cannot open '{}': {source}", path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// I/O error while reading an already opened source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A line is not valid UTF-8.
    #[error("Invalid UTF-8 at line {line}")]
    Utf8 {
        /// Line number of the undecodable line (1-based).
        line: usize,
    },

    /// The parse configuration is structurally invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Line count exceeded the configured limit.
    #[error("Security limit exceeded: line count {actual} exceeds maximum {limit}")]
    SecurityLimit {
        /// Maximum allowed lines.
        limit: usize,
        /// Line count reached when the limit tripped.
        actual: usize,
    },

    /// First row-level error of a strict parse.
    #[error("Row rejected at {0}")]
    Row(ParseError),
}

impl CsvGuardError {
    /// Create an open error for `path`.
    #[inline]
    pub fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Get the line number if available.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Utf8 { line } => Some(*line),
            Self::Row(err) => Some(err.line),
            _ => None,
        }
    }

    /// Whether this error came from the source being missing.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::Open { source, .. } | Self::Io(source) => {
                source.kind() == io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}

/// Convenience type alias for `Result` with `CsvGuardError`.
pub type Result<T> = std::result::Result<T, CsvGuardError>;
