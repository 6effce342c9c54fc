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

//! Parse results.
//!
//! A [`ParseResult`] partitions the input: every line contributes either one
//! entry to `data` or one entry to `errors`, never both. The two lists keep
//! file order independently; a failed line leaves no gap in `data`.

use crate::error::{CsvGuardError, ParseError, Result};
use crate::tokenize::Row;

/// Values produced by a collecting parse, together with the row errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseResult<T> {
    /// Successfully produced values, in file order.
    pub data: Vec<T>,
    /// Row-level errors, in file order.
    pub errors: Vec<ParseError>,
}

impl<T> Default for ParseResult<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            errors: Vec::new(),
        }
    }
}

impl<T> ParseResult<T> {
    /// Whether no line was rejected.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of lines accounted for (accepted plus rejected).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() + self.errors.len()
    }

    /// Whether the input had no lines at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.errors.is_empty()
    }

    /// The earliest row error, if any.
    pub fn first_error(&self) -> Option<&ParseError> {
        self.errors.first()
    }

    /// Convert to the strict shape: the data, or the first row error as a
    /// fatal [`CsvGuardError::Row`].
    ///
    /// ```
    /// use csvguard_core::{parse_str, ParseConfig};
    ///
    /// let clean = parse_str("a,b,c", &ParseConfig::default()).unwrap();
    /// assert_eq!(clean.into_strict().unwrap().len(), 1);
    ///
    /// let dirty = parse_str("a,b,c\nd,e", &ParseConfig::default()).unwrap();
    /// assert_eq!(dirty.into_strict().unwrap_err().line(), Some(2));
    /// ```
    pub fn into_strict(self) -> Result<Vec<T>> {
        match self.errors.into_iter().next() {
            Some(first) => Err(CsvGuardError::Row(first)),
            None => Ok(self.data),
        }
    }

    /// Transform the data, keeping the errors.
    pub fn map<U, F>(self, f: F) -> ParseResult<U>
    where
        F: FnMut(T) -> U,
    {
        ParseResult {
            data: self.data.into_iter().map(f).collect(),
            errors: self.errors,
        }
    }
}

/// Result of a parse whose schema is chosen at the call site.
///
/// Produced by [`parse_csv_schema`](crate::parse_csv_schema): `NoSchema` when
/// no validator was supplied, `WithSchema` otherwise.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseOutcome<T> {
    /// Plain string rows.
    NoSchema(ParseResult<Row>),
    /// Validated, transformed records.
    WithSchema(ParseResult<T>),
}

impl<T> ParseOutcome<T> {
    /// Row errors of either variant.
    pub fn errors(&self) -> &[ParseError] {
        match self {
            ParseOutcome::NoSchema(result) => &result.errors,
            ParseOutcome::WithSchema(result) => &result.errors,
        }
    }

    /// Whether no line was rejected.
    pub fn is_clean(&self) -> bool {
        self.errors().is_empty()
    }

    /// Whether a schema was applied.
    pub fn has_schema(&self) -> bool {
        matches!(self, ParseOutcome::WithSchema(_))
    }

    /// The string rows, if no schema was applied.
    pub fn into_rows(self) -> Option<ParseResult<Row>> {
        match self {
            ParseOutcome::NoSchema(result) => Some(result),
            ParseOutcome::WithSchema(_) => None,
        }
    }

    /// The validated records, if a schema was applied.
    pub fn into_records(self) -> Option<ParseResult<T>> {
        match self {
            ParseOutcome::NoSchema(_) => None,
            ParseOutcome::WithSchema(result) => Some(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ParseResult<u32> {
        ParseResult {
            data: vec![23, 25],
            errors: vec![ParseError::single(3, "Must be a valid number.")],
        }
    }

    #[test]
    fn test_default_is_empty() {
        let result: ParseResult<Row> = ParseResult::default();
        assert!(result.is_empty());
        assert!(result.is_clean());
        assert_eq!(result.len(), 0);
    }

    #[test]
    fn test_len_counts_both_lists() {
        let result = sample();
        assert_eq!(result.len(), 3);
        assert!(!result.is_clean());
        assert_eq!(result.first_error().map(|e| e.line), Some(3));
    }

    #[test]
    fn test_into_strict_returns_first_error() {
        let mut result = sample();
        result.errors.push(ParseError::arity(9, 3));
        match result.into_strict() {
            Err(CsvGuardError::Row(err)) => assert_eq!(err.line, 3),
            other => panic!("expected row error, got {:?}", other),
        }
    }

    #[test]
    fn test_into_strict_clean() {
        let result = ParseResult {
            data: vec![1, 2],
            errors: Vec::new(),
        };
        assert_eq!(result.into_strict().unwrap(), vec![1, 2]);
    }

    #[test]
    fn test_map_keeps_errors() {
        let mapped = sample().map(|n| n * 2);
        assert_eq!(mapped.data, vec![46, 50]);
        assert_eq!(mapped.errors.len(), 1);
    }

    #[test]
    fn test_outcome_accessors() {
        let rows: ParseOutcome<u32> = ParseOutcome::NoSchema(ParseResult {
            data: vec![vec!["a".to_string()]],
            errors: Vec::new(),
        });
        assert!(!rows.has_schema());
        assert!(rows.is_clean());
        assert!(rows.clone().into_records().is_none());
        assert_eq!(rows.into_rows().unwrap().data.len(), 1);

        let records = ParseOutcome::WithSchema(sample());
        assert!(records.has_schema());
        assert_eq!(records.errors().len(), 1);
        assert_eq!(records.into_records().unwrap().data, vec![23, 25]);
    }
}
