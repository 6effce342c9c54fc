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

//! Async parsing with tokio.
//!
//! Mirrors the synchronous entry points. Lines are still processed strictly
//! in order, one at a time; the only await point is reading the next line, so
//! results are identical to the sync parser.
//!
//! # Examples
//!
//! ```rust,no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use csvguard_core::{parse_csv_async, ParseConfig};
//!
//! let result = parse_csv_async("data/people.csv", &ParseConfig::default()).await?;
//! println!("{} rows, {} errors", result.data.len(), result.errors.len());
//! # Ok(())
//! # }
//! ```

use crate::collector::Collector;
use crate::config::ParseConfig;
use crate::error::{CsvGuardError, Result};
use crate::result::ParseResult;
use crate::tokenize::Row;
use crate::validator::{Passthrough, Validator};
use std::path::Path;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Async buffered line reader with line number tracking.
///
/// Same line handling as [`LineReader`](crate::LineReader): LF/CRLF stripped,
/// no trailing empty line, BOM removed from line 1.
pub struct AsyncLineReader<R: AsyncRead + Unpin> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: Vec<u8>,
}

impl<R: AsyncRead + Unpin> AsyncLineReader<R> {
    /// Create a new async line reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: Vec::new(),
        }
    }

    /// Get the number of the last line read.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line.
    pub async fn next_line(&mut self) -> Result<Option<(usize, String)>> {
        self.buffer.clear();

        if self.reader.read_until(b'\n', &mut self.buffer).await? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if self.buffer.ends_with(b"\n") {
            self.buffer.pop();
            if self.buffer.ends_with(b"\r") {
                self.buffer.pop();
            }
        }

        let mut line = String::from_utf8(std::mem::take(&mut self.buffer)).map_err(|_| {
            CsvGuardError::Utf8 {
                line: self.line_number,
            }
        })?;
        if self.line_number == 1 && line.starts_with('\u{feff}') {
            line.remove(0);
        }

        Ok(Some((self.line_number, line)))
    }
}

/// Parse a CSV file asynchronously into string rows.
pub async fn parse_csv_async(
    path: impl AsRef<Path>,
    config: &ParseConfig,
) -> Result<ParseResult<Row>> {
    parse_csv_async_with(path, config, &Passthrough).await
}

/// Parse a CSV file asynchronously, validating and transforming every row.
pub async fn parse_csv_async_with<V: Validator>(
    path: impl AsRef<Path>,
    config: &ParseConfig,
    validator: &V,
) -> Result<ParseResult<V::Output>> {
    config.validate()?;
    let path = path.as_ref();
    let file = tokio::fs::File::open(path)
        .await
        .map_err(|e| CsvGuardError::open(path, e))?;
    parse_reader_async_with(file, config, validator).await
}

/// Parse CSV from an async reader, validating and transforming every row.
pub async fn parse_reader_async_with<R, V>(
    reader: R,
    config: &ParseConfig,
    validator: &V,
) -> Result<ParseResult<V::Output>>
where
    R: AsyncRead + Unpin,
    V: Validator,
{
    let mut collector = Collector::new(config, validator)?;
    let mut lines = AsyncLineReader::new(reader);
    while let Some((line_number, line)) = lines.next_line().await? {
        collector.push_line(line_number, &line)?;
    }
    Ok(collector.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::parse::parse_str;
    use crate::validator::ValidationFailure;

    const INPUT: &str = "\u{feff}name,age,fruit\r\nAlice,23,fig\r\nBob,thirty,grape\r\n\r\nNim,22,\"kiwi, golden\"\r\n";

    fn numeric_age(row: Row) -> std::result::Result<f64, ValidationFailure> {
        row[1]
            .parse::<f64>()
            .map_err(|_| ValidationFailure::new("Must be a valid number."))
    }

    #[tokio::test]
    async fn test_async_matches_sync() {
        let config = ParseConfig::default();
        let sync = parse_str(INPUT, &config).unwrap();
        let async_result = parse_reader_async_with(INPUT.as_bytes(), &config, &Passthrough)
            .await
            .unwrap();
        assert_eq!(async_result, sync);
        assert_eq!(async_result.data[0], vec!["name", "age", "fruit"]);
        assert_eq!(async_result.errors, vec![ParseError::arity(4, 3)]);
    }

    #[tokio::test]
    async fn test_async_with_validator() {
        let result = parse_reader_async_with(INPUT.as_bytes(), &ParseConfig::default(), &numeric_age)
            .await
            .unwrap();
        assert_eq!(result.data, vec![23.0, 22.0]);
        let lines: Vec<usize> = result.errors.iter().map(|e| e.line).collect();
        assert_eq!(lines, vec![1, 3, 4]);
    }

    #[tokio::test]
    async fn test_async_missing_file() {
        let err = parse_csv_async("definitely/not/here.csv", &ParseConfig::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_async_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "a,b,c\nd,e,f\n").unwrap();
        let result = parse_csv_async(file.path(), &ParseConfig::default())
            .await
            .unwrap();
        assert_eq!(result.data.len(), 2);
    }
}
