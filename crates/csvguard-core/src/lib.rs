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

//! Schema-validated CSV parsing.
//!
//! This crate turns comma-delimited text into fixed-arity rows of strings and,
//! optionally, into typed records through a caller-supplied [`Validator`].
//! Malformed rows do not abort the parse: they are collected as
//! [`ParseError`]s with their 1-based line number while the remaining lines
//! are processed.
//!
//! # Features
//!
//! - **Quote-aware tokenizer**: `"` and `'` segments may contain commas
//! - **Error collection**: arity and validation failures are gathered per line
//! - **Strict mode**: abort on the first bad row when that is what you want
//! - **Streaming**: input is read line by line; only results are kept
//! - **Pluggable schemas**: any closure or [`Validator`] impl; serde-backed
//!   [`SerdeValidator`] with the `serde` feature
//! - **Async**: tokio-based entry points with the `async` feature
//!
//! # Examples
//!
//! ## String Rows
//!
//! ```
//! use csvguard_core::{parse_str, ParseConfig};
//!
//! let csv = "name,age,fruit\nAlice, 23, fig\nBob,\"thirty, ish\",grape\nbroken line";
//! let result = parse_str(csv, &ParseConfig::default()).unwrap();
//!
//! assert_eq!(result.data.len(), 3);
//! assert_eq!(result.data[2], vec!["Bob", "thirty, ish", "grape"]);
//! assert_eq!(result.errors[0].line, 4);
//! ```
//!
//! ## Validated Records
//!
//! ```
//! use csvguard_core::{parse_str_with, ParseConfig, Row, ValidationFailure};
//!
//! #[derive(Debug, PartialEq)]
//! struct Person {
//!     name: String,
//!     number: f64,
//!     fruit: String,
//! }
//!
//! let schema = |row: Row| -> Result<Person, ValidationFailure> {
//!     let mut fields = row.into_iter();
//!     let name = fields.next().unwrap_or_default();
//!     let number = fields
//!         .next()
//!         .and_then(|n| n.parse().ok())
//!         .ok_or_else(|| ValidationFailure::new("Must be a valid number."))?;
//!     let fruit = fields.next().unwrap_or_default();
//!     Ok(Person { name, number, fruit })
//! };
//!
//! let result = parse_str_with("Alice,23,fig\nBob,thirty,grape", &ParseConfig::default(), &schema)
//!     .unwrap();
//! assert_eq!(result.data[0].name, "Alice");
//! assert_eq!(result.errors[0].messages, vec!["Must be a valid number."]);
//! ```
//!
//! ## Strict Parsing
//!
//! ```no_run
//! use csvguard_core::{parse_csv_strict, ParseConfig};
//!
//! match parse_csv_strict("data/people.csv", &ParseConfig::default()) {
//!     Ok(rows) => println!("{} rows", rows.len()),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

mod collector;
mod config;
mod error;
mod parse;
mod reader;
mod result;
mod tokenize;
mod validator;

#[cfg(feature = "async")]
mod async_parse;

pub use collector::Collector;
pub use config::{ErrorMode, ParseConfig, DEFAULT_ARITY};
pub use error::{CsvGuardError, ParseError, Result};
pub use parse::{
    parse_csv, parse_csv_schema, parse_csv_strict, parse_csv_strict_with, parse_csv_with,
    parse_reader, parse_reader_with, parse_str, parse_str_with,
};
pub use reader::LineReader;
pub use result::{ParseOutcome, ParseResult};
pub use tokenize::{tokenize, tokenize_fields, Field, Quote, Row, DELIMITER};
pub use validator::{Passthrough, ValidationFailure, Validator};

#[cfg(feature = "serde")]
pub use validator::SerdeValidator;

#[cfg(feature = "async")]
pub use async_parse::{
    parse_csv_async, parse_csv_async_with, parse_reader_async_with, AsyncLineReader,
};
