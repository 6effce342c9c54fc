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

//! Parse configuration.

use crate::error::{CsvGuardError, Result};

/// Default number of fields every row must have.
pub const DEFAULT_ARITY: usize = 3;

/// How row-level errors are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Collect every row error and finish the parse.
    #[default]
    Collect,
    /// Abort on the first row error with [`CsvGuardError::Row`].
    FailFast,
}

/// Configuration for CSV parsing.
///
/// # Examples
///
/// ## Default Configuration
///
/// ```
/// # use csvguard_core::{ErrorMode, ParseConfig};
/// let config = ParseConfig::default();
/// assert_eq!(config.expected_arity, 3);
/// assert_eq!(config.error_mode, ErrorMode::Collect);
/// ```
///
/// ## Wider Rows, Strict Handling
///
/// ```
/// # use csvguard_core::{ErrorMode, ParseConfig};
/// let config = ParseConfig::new(5).with_error_mode(ErrorMode::FailFast);
/// assert_eq!(config.expected_arity, 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    /// Number of fields every row must have (default: 3).
    ///
    /// Rows with any other count are reported as row-level errors and never
    /// reach the validator.
    pub expected_arity: usize,

    /// Maximum number of lines to read (default: unlimited).
    ///
    /// When set, reading past the limit aborts with
    /// [`CsvGuardError::SecurityLimit`].
    pub max_rows: Option<usize>,

    /// Collect row errors or abort on the first one (default: collect).
    pub error_mode: ErrorMode,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            expected_arity: DEFAULT_ARITY,
            max_rows: None,
            error_mode: ErrorMode::Collect,
        }
    }
}

impl ParseConfig {
    /// Default configuration with a different expected arity.
    pub fn new(expected_arity: usize) -> Self {
        Self {
            expected_arity,
            ..Self::default()
        }
    }

    /// Cap the number of lines read.
    ///
    /// ```
    /// # use csvguard_core::ParseConfig;
    /// assert_eq!(ParseConfig::default().max_rows, None);
    /// assert_eq!(ParseConfig::default().with_max_rows(500).max_rows, Some(500));
    /// ```
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    /// Set the error mode.
    pub fn with_error_mode(mut self, error_mode: ErrorMode) -> Self {
        self.error_mode = error_mode;
        self
    }

    /// Check that the configuration can drive a parse.
    ///
    /// # Errors
    ///
    /// Returns [`CsvGuardError::InvalidConfig`] when `expected_arity` is zero
    /// or `max_rows` is set to zero.
    pub fn validate(&self) -> Result<()> {
        if self.expected_arity == 0 {
            return Err(CsvGuardError::InvalidConfig(
                "expected_arity must be at least 1".to_string(),
            ));
        }
        if self.max_rows == Some(0) {
            return Err(CsvGuardError::InvalidConfig(
                "max_rows must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParseConfig::default();
        assert_eq!(config.expected_arity, DEFAULT_ARITY);
        assert_eq!(config.max_rows, None);
        assert_eq!(config.error_mode, ErrorMode::Collect);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = ParseConfig::new(4)
            .with_max_rows(10)
            .with_error_mode(ErrorMode::FailFast);
        assert_eq!(config.expected_arity, 4);
        assert_eq!(config.max_rows, Some(10));
        assert_eq!(config.error_mode, ErrorMode::FailFast);
    }

    #[test]
    fn test_zero_arity_is_invalid() {
        let err = ParseConfig::new(0).validate().unwrap_err();
        assert!(matches!(err, CsvGuardError::InvalidConfig(_)));
        assert!(err.to_string().contains("expected_arity"));
    }

    #[test]
    fn test_zero_max_rows_is_invalid() {
        let err = ParseConfig::default().with_max_rows(0).validate().unwrap_err();
        assert!(err.to_string().contains("max_rows"));
    }
}
