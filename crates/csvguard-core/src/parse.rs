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

//! Parse CSV files, readers and strings.
//!
//! Every entry point streams line by line through a [`Collector`]. The
//! configuration is validated before the source is touched, and a file opened
//! here is closed on every return path.

use crate::collector::Collector;
use crate::config::{ErrorMode, ParseConfig};
use crate::error::{CsvGuardError, Result};
use crate::reader::LineReader;
use crate::result::{ParseOutcome, ParseResult};
use crate::tokenize::Row;
use crate::validator::{Passthrough, Validator};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Parse a CSV file into string rows.
///
/// # Errors
///
/// Returns `Err` if the configuration is invalid, the file cannot be opened
/// or read, or the line limit is exceeded. Malformed rows are collected in
/// [`ParseResult::errors`] instead.
///
/// # Examples
///
/// ```no_run
/// use csvguard_core::{parse_csv, ParseConfig};
///
/// let result = parse_csv("data/people.csv", &ParseConfig::default()).unwrap();
/// for row in &result.data {
///     println!("{:?}", row);
/// }
/// for err in &result.errors {
///     eprintln!("{}", err);
/// }
/// ```
pub fn parse_csv(path: impl AsRef<Path>, config: &ParseConfig) -> Result<ParseResult<Row>> {
    parse_csv_with(path, config, &Passthrough)
}

/// Parse a CSV file, validating and transforming every row.
///
/// # Examples
///
/// ```no_run
/// use csvguard_core::{parse_csv_with, ParseConfig, Row, ValidationFailure};
///
/// let names = |row: Row| -> Result<String, ValidationFailure> { Ok(row[0].clone()) };
/// let result = parse_csv_with("data/people.csv", &ParseConfig::default(), &names).unwrap();
/// ```
pub fn parse_csv_with<V: Validator>(
    path: impl AsRef<Path>,
    config: &ParseConfig,
    validator: &V,
) -> Result<ParseResult<V::Output>> {
    config.validate()?;
    let file = open(path.as_ref())?;
    parse_reader_with(file, config, validator)
}

/// Parse a CSV file with an optional schema chosen at the call site.
///
/// Returns [`ParseOutcome::NoSchema`] when `validator` is `None` and
/// [`ParseOutcome::WithSchema`] otherwise.
///
/// ```no_run
/// use csvguard_core::{parse_csv_schema, ParseConfig, ParseOutcome, Passthrough};
///
/// let outcome = parse_csv_schema::<Passthrough>("data/people.csv", &ParseConfig::default(), None)
///     .unwrap();
/// assert!(matches!(outcome, ParseOutcome::NoSchema(_)));
/// ```
pub fn parse_csv_schema<V: Validator>(
    path: impl AsRef<Path>,
    config: &ParseConfig,
    validator: Option<&V>,
) -> Result<ParseOutcome<V::Output>> {
    match validator {
        Some(validator) => parse_csv_with(path, config, validator).map(ParseOutcome::WithSchema),
        None => parse_csv(path, config).map(ParseOutcome::NoSchema),
    }
}

/// Parse a CSV file into string rows, aborting on the first malformed row.
///
/// # Errors
///
/// In addition to the fatal errors of [`parse_csv`], returns
/// [`CsvGuardError::Row`] for the first row-level error.
pub fn parse_csv_strict(path: impl AsRef<Path>, config: &ParseConfig) -> Result<Vec<Row>> {
    parse_csv_strict_with(path, config, &Passthrough)
}

/// Parse and validate a CSV file, aborting on the first rejected row.
pub fn parse_csv_strict_with<V: Validator>(
    path: impl AsRef<Path>,
    config: &ParseConfig,
    validator: &V,
) -> Result<Vec<V::Output>> {
    let strict = config.clone().with_error_mode(ErrorMode::FailFast);
    parse_csv_with(path, &strict, validator)?.into_strict()
}

/// Parse CSV from a reader into string rows.
///
/// ```
/// use csvguard_core::{parse_reader, ParseConfig};
///
/// let input: &[u8] = b"a,b,c\r\nd,e,f\r\n";
/// let result = parse_reader(input, &ParseConfig::default()).unwrap();
/// assert_eq!(result.data.len(), 2);
/// ```
pub fn parse_reader<R: Read>(reader: R, config: &ParseConfig) -> Result<ParseResult<Row>> {
    parse_reader_with(reader, config, &Passthrough)
}

/// Parse CSV from a reader, validating and transforming every row.
pub fn parse_reader_with<R: Read, V: Validator>(
    reader: R,
    config: &ParseConfig,
    validator: &V,
) -> Result<ParseResult<V::Output>> {
    let mut collector = Collector::new(config, validator)?;
    for line in LineReader::new(reader) {
        let (line_number, line) = line?;
        collector.push_line(line_number, &line)?;
    }
    Ok(collector.finish())
}

/// Parse CSV text into string rows.
///
/// ```
/// use csvguard_core::{parse_str, ParseConfig};
///
/// let result = parse_str("a, \"b,c\" ,d\nshort", &ParseConfig::default()).unwrap();
/// assert_eq!(result.data, vec![vec!["a", "b,c", "d"]]);
/// assert_eq!(result.errors[0].line, 2);
/// ```
pub fn parse_str(text: &str, config: &ParseConfig) -> Result<ParseResult<Row>> {
    parse_reader(text.as_bytes(), config)
}

/// Parse CSV text, validating and transforming every row.
pub fn parse_str_with<V: Validator>(
    text: &str,
    config: &ParseConfig,
    validator: &V,
) -> Result<ParseResult<V::Output>> {
    parse_reader_with(text.as_bytes(), config, validator)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| CsvGuardError::open(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::validator::ValidationFailure;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn numeric_age(row: Row) -> std::result::Result<(String, f64), ValidationFailure> {
        let age = row[1]
            .parse::<f64>()
            .map_err(|_| ValidationFailure::new("Must be a valid number."))?;
        Ok((row[0].clone(), age))
    }

    #[test]
    fn test_parse_csv_file() {
        let file = temp_csv("name,age,fruit\nAlice,23,fig\n");
        let result = parse_csv(file.path(), &ParseConfig::default()).unwrap();
        assert_eq!(
            result.data,
            vec![vec!["name", "age", "fruit"], vec!["Alice", "23", "fig"]]
        );
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = parse_csv("definitely/not/here.csv", &ParseConfig::default()).unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, CsvGuardError::Open { .. }));
    }

    #[test]
    fn test_invalid_config_checked_before_open() {
        let err = parse_csv("definitely/not/here.csv", &ParseConfig::new(0)).unwrap_err();
        assert!(matches!(err, CsvGuardError::InvalidConfig(_)));
    }

    #[test]
    fn test_parse_csv_with_validator() {
        let file = temp_csv("Alice,23,fig\nBob,thirty,grape\nCharlie,25,kiwi\n");
        let result = parse_csv_with(file.path(), &ParseConfig::default(), &numeric_age).unwrap();
        assert_eq!(
            result.data,
            vec![("Alice".to_string(), 23.0), ("Charlie".to_string(), 25.0)]
        );
        assert_eq!(
            result.errors,
            vec![ParseError::single(2, "Must be a valid number.")]
        );
    }

    #[test]
    fn test_parse_csv_schema_resolves_variant() {
        let file = temp_csv("Alice,23,fig\n");
        let config = ParseConfig::default();

        type AgeValidator = fn(Row) -> std::result::Result<(String, f64), ValidationFailure>;
        let plain = parse_csv_schema(file.path(), &config, None::<&AgeValidator>).unwrap();
        assert!(!plain.has_schema());
        assert_eq!(plain.into_rows().unwrap().data, vec![vec!["Alice", "23", "fig"]]);

        let typed = parse_csv_schema(file.path(), &config, Some(&numeric_age)).unwrap();
        assert_eq!(
            typed.into_records().unwrap().data,
            vec![("Alice".to_string(), 23.0)]
        );
    }

    #[test]
    fn test_strict_aborts_on_first_error() {
        let file = temp_csv("a,b,c\nd,e\nf,g\n");
        let err = parse_csv_strict(file.path(), &ParseConfig::default()).unwrap_err();
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn test_strict_clean_file() {
        let file = temp_csv("a,b,c\nd,e,f\n");
        let rows = parse_csv_strict(file.path(), &ParseConfig::default()).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_strict_with_validator() {
        let file = temp_csv("Alice,23,fig\nBob,thirty,grape\n");
        let err = parse_csv_strict_with(file.path(), &ParseConfig::default(), &numeric_age)
            .unwrap_err();
        match err {
            CsvGuardError::Row(row) => {
                assert_eq!(row.line, 2);
                assert_eq!(row.messages, vec!["Must be a valid number."]);
            }
            other => panic!("expected row error, got {:?}", other),
        }
    }

    #[test]
    fn test_crlf_and_trailing_newline() {
        let result = parse_str("a,b,c\r\nd,e,f\r\n", &ParseConfig::default()).unwrap();
        assert_eq!(result.data, vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);
        assert!(result.is_clean());
    }

    #[test]
    fn test_empty_input() {
        let result = parse_str("", &ParseConfig::default()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_blank_line_in_middle_is_reported() {
        let result = parse_str("a,b,c\n\nd,e,f", &ParseConfig::default()).unwrap();
        assert_eq!(result.data.len(), 2);
        assert_eq!(result.errors, vec![ParseError::arity(2, 3)]);
    }

    #[test]
    fn test_header_is_ordinary_row() {
        let result = parse_str_with(
            "name,age,fruit\nAlice,23,fig",
            &ParseConfig::default(),
            &numeric_age,
        )
        .unwrap();
        assert_eq!(result.data.len(), 1);
        assert_eq!(result.errors[0].line, 1);
    }

    #[test]
    fn test_max_rows_is_fatal() {
        let config = ParseConfig::default().with_max_rows(1);
        let err = parse_str("a,b,c\nd,e,f", &config).unwrap_err();
        assert!(matches!(err, CsvGuardError::SecurityLimit { .. }));
    }

    #[test]
    fn test_default_config_has_no_line_limit() {
        let text = "a,b,c\n".repeat(1_000_001);
        let result = parse_str(&text, &ParseConfig::default()).unwrap();
        assert_eq!(result.data.len(), 1_000_001);
        assert!(result.is_clean());
    }

    #[test]
    fn test_invalid_utf8_is_fatal() {
        let input: &[u8] = b"a,b,c\n\xff,b,c\n";
        let err = parse_reader(input, &ParseConfig::default()).unwrap_err();
        assert_eq!(err.line(), Some(2));
    }
}
