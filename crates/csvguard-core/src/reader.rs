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

//! Line reader feeding the collector.
//!
//! Provides buffered line-by-line reading with 1-based line numbers. LF and
//! CRLF endings are handled uniformly and a trailing newline does not produce
//! an empty final line.

use crate::error::{CsvGuardError, Result};
use std::io::{BufRead, BufReader, Read};

const BOM: char = '\u{feff}';

/// Buffered line reader with line number tracking.
///
/// # Examples
///
/// ```rust
/// use csvguard_core::LineReader;
/// use std::io::Cursor;
///
/// let mut reader = LineReader::new(Cursor::new("name,age,fruit\r\nAlice,23,fig\n"));
///
/// assert_eq!(reader.next_line().unwrap(), Some((1, "name,age,fruit".to_string())));
/// assert_eq!(reader.next_line().unwrap(), Some((2, "Alice,23,fig".to_string())));
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: Vec<u8>,
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            line_number: 0,
            buffer: Vec::new(),
        }
    }

    /// Create with a specific buffer capacity.
    pub fn with_capacity(reader: R, capacity: usize) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity, reader),
            line_number: 0,
            buffer: Vec::new(),
        }
    }

    /// Get the number of the last line read (0 before the first read).
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line.
    ///
    /// # Errors
    ///
    /// - [`CsvGuardError::Io`] if the underlying reader fails
    /// - [`CsvGuardError::Utf8`] if the line is not valid UTF-8
    pub fn next_line(&mut self) -> Result<Option<(usize, String)>> {
        self.buffer.clear();

        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }
        self.line_number += 1;

        if self.buffer.ends_with(b"\n") {
            self.buffer.pop();
            if self.buffer.ends_with(b"\r") {
                self.buffer.pop();
            }
        }

        let line = String::from_utf8(std::mem::take(&mut self.buffer)).map_err(|_| {
            CsvGuardError::Utf8 {
                line: self.line_number,
            }
        })?;

        Ok(Some((self.line_number, strip_bom(self.line_number, line))))
    }
}

fn strip_bom(line_number: usize, line: String) -> String {
    match line.strip_prefix(BOM) {
        Some(rest) if line_number == 1 => rest.to_string(),
        _ => line,
    }
}

impl<R: Read> Iterator for LineReader<R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
