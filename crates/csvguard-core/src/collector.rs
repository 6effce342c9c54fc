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

//! Schema-validated row collector.
//!
//! The collector is fed one line at a time and decides, per line, whether it
//! lands in `data` or in `errors`:
//!
//! 1. Tokenize the line.
//! 2. Wrong arity: record `"Each line must have exactly N values."` and stop.
//! 3. Otherwise hand the row to the validator; record its value or failure.
//!
//! No state carries over between lines except the two output lists. Line
//! sources (sync, async, in-memory) only differ in how they call
//! [`Collector::push_line`].

use crate::config::{ErrorMode, ParseConfig};
use crate::error::{CsvGuardError, ParseError, Result};
use crate::result::ParseResult;
use crate::tokenize::tokenize;
use crate::validator::Validator;

/// Accumulates the result of one parse.
///
/// # Examples
///
/// ```
/// use csvguard_core::{Collector, ParseConfig, Passthrough};
///
/// let config = ParseConfig::default();
/// let mut collector = Collector::new(&config, &Passthrough).unwrap();
/// collector.push_line(1, "a, b, c").unwrap();
/// collector.push_line(2, "too,short").unwrap();
///
/// let result = collector.finish();
/// assert_eq!(result.data, vec![vec!["a", "b", "c"]]);
/// assert_eq!(result.errors[0].line, 2);
/// ```
pub struct Collector<'a, V: Validator> {
    config: &'a ParseConfig,
    validator: &'a V,
    lines_seen: usize,
    result: ParseResult<V::Output>,
}

impl<'a, V: Validator> Collector<'a, V> {
    /// Create a collector.
    ///
    /// # Errors
    ///
    /// Returns [`CsvGuardError::InvalidConfig`] if `config` is invalid.
    pub fn new(config: &'a ParseConfig, validator: &'a V) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            validator,
            lines_seen: 0,
            result: ParseResult::default(),
        })
    }

    /// Process one line.
    ///
    /// `line_number` is 1-based and only used for error reporting.
    ///
    /// # Errors
    ///
    /// - [`CsvGuardError::SecurityLimit`] once more than `max_rows` lines
    ///   have been pushed, if a limit is set
    /// - [`CsvGuardError::Row`] for the first row error under
    ///   [`ErrorMode::FailFast`]
    ///
    /// Under [`ErrorMode::Collect`] row errors are recorded and `Ok` is
    /// returned.
    pub fn push_line(&mut self, line_number: usize, line: &str) -> Result<()> {
        self.lines_seen += 1;
        if let Some(limit) = self.config.max_rows {
            if self.lines_seen > limit {
                return Err(CsvGuardError::SecurityLimit {
                    limit,
                    actual: self.lines_seen,
                });
            }
        }

        let row = tokenize(line);

        if row.len() != self.config.expected_arity {
            return self.reject(ParseError::arity(line_number, self.config.expected_arity));
        }

        match self.validator.validate(row) {
            Ok(value) => {
                self.result.data.push(value);
                Ok(())
            }
            Err(failure) => self.reject(ParseError::new(line_number, failure.into_messages())),
        }
    }

    fn reject(&mut self, error: ParseError) -> Result<()> {
        match self.config.error_mode {
            ErrorMode::Collect => {
                self.result.errors.push(error);
                Ok(())
            }
            ErrorMode::FailFast => Err(CsvGuardError::Row(error)),
        }
    }

    /// Number of lines pushed so far.
    #[inline]
    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    /// Finish the parse and return the accumulated result.
    pub fn finish(self) -> ParseResult<V::Output> {
        self.result
    }
}
