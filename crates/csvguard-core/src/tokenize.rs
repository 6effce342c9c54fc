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

//! Quote-aware row tokenizer.
//!
//! Turns a single line (without its terminator) into an ordered sequence of
//! fields:
//!
//! - Delimiter: comma
//! - Quoting: `"` or `'`, recognised only at a field boundary (after leading
//!   whitespace); the segment ends at the next quote of the same kind
//! - No escape sequences: the other quote kind is literal inside a segment
//! - Whitespace: unquoted fields trimmed, quoted content preserved verbatim
//! - Unterminated quote: rest of the line becomes one field, opening quote kept
//!
//! The tokenizer never fails and never checks arity. A malformed line still
//! produces fields so the collector can report it against its line number.

/// The field delimiter.
pub const DELIMITER: char = ',';

/// A tokenized row: the ordered field values of one line.
pub type Row = Vec<String>;

/// Quote character that opened a quoted field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quote {
    /// `"`
    Double,
    /// `'`
    Single,
}

impl Quote {
    /// The quote as a character.
    #[inline]
    pub fn as_char(self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
        }
    }

    /// Recognise an opening quote character.
    #[inline]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '"' => Some(Quote::Double),
            '\'' => Some(Quote::Single),
            _ => None,
        }
    }
}

/// A tokenized field with its quoting status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// The field content, outer quotes stripped.
    pub value: String,
    /// Quote that opened the field, if it was quoted.
    pub quote: Option<Quote>,
    /// `false` only when a quoted field ran to the end of the line unclosed.
    pub terminated: bool,
}

impl Field {
    fn unquoted(value: &str) -> Self {
        Self {
            value: value.to_string(),
            quote: None,
            terminated: true,
        }
    }

    /// Whether the field was enclosed in quotes.
    #[inline]
    pub fn is_quoted(&self) -> bool {
        self.quote.is_some()
    }
}

/// Tokenize a line into fields, keeping quoting information.
///
/// # Examples
///
/// ```
/// use csvguard_core::{tokenize_fields, Quote};
///
/// let fields = tokenize_fields(r#"a, "b, c" ,d"#);
/// assert_eq!(fields.len(), 3);
/// assert_eq!(fields[1].value, "b, c");
/// assert_eq!(fields[1].quote, Some(Quote::Double));
/// assert!(!fields[0].is_quoted());
/// ```
pub fn tokenize_fields(line: &str) -> Vec<Field> {
    let mut fields = Vec::new();
    let mut start = 0;

    loop {
        let (field, next) = parse_field(line, start);
        fields.push(field);
        match next {
            Some(after_delimiter) => start = after_delimiter,
            None => break,
        }
    }

    fields
}

/// Tokenize a line into its field values.
///
/// # Examples
///
/// ```
/// use csvguard_core::tokenize;
///
/// assert_eq!(tokenize(r#"a,"b,c",d"#), vec!["a", "b,c", "d"]);
/// assert_eq!(tokenize(" a , b , c "), vec!["a", "b", "c"]);
/// assert_eq!(tokenize(""), vec![""]);
/// ```
pub fn tokenize(line: &str) -> Row {
    tokenize_fields(line)
        .into_iter()
        .map(|field| field.value)
        .collect()
}

/// Parse one field starting at byte offset `start`.
///
/// Returns the field and the offset just past the delimiter that ended it,
/// or `None` when the field ran to the end of the line.
fn parse_field(line: &str, start: usize) -> (Field, Option<usize>) {
    let rest = &line[start..];
    let body = start + (rest.len() - rest.trim_start().len());

    match line[body..].chars().next().and_then(Quote::from_char) {
        Some(quote) => parse_quoted_field(line, body, quote),
        None => parse_unquoted_field(line, start),
    }
}

fn parse_unquoted_field(line: &str, start: usize) -> (Field, Option<usize>) {
    match line[start..].find(DELIMITER) {
        Some(offset) => {
            let end = start + offset;
            (Field::unquoted(line[start..end].trim()), Some(end + 1))
        }
        None => (Field::unquoted(line[start..].trim()), None),
    }
}

/// Parse a field whose first non-blank character is `quote`, at byte `open`.
fn parse_quoted_field(line: &str, open: usize, quote: Quote) -> (Field, Option<usize>) {
    // Both quote characters are single-byte.
    let content = open + 1;

    let Some(offset) = line[content..].find(quote.as_char()) else {
        return (
            Field {
                value: line[open..].trim_end().to_string(),
                quote: Some(quote),
                terminated: false,
            },
            None,
        );
    };

    let close = content + offset;
    let mut value = line[content..close].to_string();

    // Anything between the closing quote and the next delimiter stays in the field.
    let after = close + 1;
    let (tail, next) = match line[after..].find(DELIMITER) {
        Some(offset) => (&line[after..after + offset], Some(after + offset + 1)),
        None => (&line[after..], None),
    };
    let tail = tail.trim_end();
    if !tail.is_empty() {
        value.push_str(tail);
    }

    (
        Field {
            value,
            quote: Some(quote),
            terminated: true,
        },
        next,
    )
}
