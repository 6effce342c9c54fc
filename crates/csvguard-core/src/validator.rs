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

//! Row validation and transformation.
//!
//! A [`Validator`] both checks a tokenized [`Row`] and turns it into a typed
//! value. The parser treats it as an opaque capability: it hands over rows
//! whose arity is already correct and records whatever failure comes back.
//!
//! Any closure `Fn(Row) -> Result<T, ValidationFailure>` is a validator:
//!
//! ```
//! use csvguard_core::{parse_str_with, ParseConfig, Row, ValidationFailure};
//!
//! let ages = |row: Row| -> Result<u32, ValidationFailure> {
//!     row[1]
//!         .parse()
//!         .map_err(|_| ValidationFailure::new("Must be a valid number."))
//! };
//!
//! let result = parse_str_with("Alice,23,fig\nBob,thirty,grape", &ParseConfig::default(), &ages)
//!     .unwrap();
//! assert_eq!(result.data, vec![23]);
//! assert_eq!(result.errors[0].line, 2);
//! ```

use crate::tokenize::Row;
use std::fmt;

const GENERIC_FAILURE: &str = "Row failed validation.";

/// A validation failure carrying one or more human-readable messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFailure {
    messages: Vec<String>,
}

impl ValidationFailure {
    /// Create a failure with a single message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            messages: vec![message.into()],
        }
    }

    /// Create a failure from several messages.
    ///
    /// An empty iterator yields a generic message, so a failure is never
    /// silent.
    pub fn from_messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let messages: Vec<String> = messages.into_iter().map(Into::into).collect();
        if messages.is_empty() {
            Self::new(GENERIC_FAILURE)
        } else {
            Self { messages }
        }
    }

    /// The failure messages, never empty.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Consume the failure, returning its messages.
    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages.join("; "))
    }
}

impl std::error::Error for ValidationFailure {}

/// Checks and transforms a row into a typed value.
pub trait Validator {
    /// The value produced for a valid row.
    type Output;

    /// Validate `row`, producing the transformed value or a failure.
    fn validate(&self, row: Row) -> Result<Self::Output, ValidationFailure>;
}

impl<F, T> Validator for F
where
    F: Fn(Row) -> Result<T, ValidationFailure>,
{
    type Output = T;

    #[inline]
    fn validate(&self, row: Row) -> Result<T, ValidationFailure> {
        self(row)
    }
}

/// The identity validator: every row passes through unchanged.
///
/// Used for parses without a schema.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Passthrough;

impl Validator for Passthrough {
    type Output = Row;

    #[inline]
    fn validate(&self, row: Row) -> Result<Row, ValidationFailure> {
        Ok(row)
    }
}

#[cfg(feature = "serde")]
pub use self::serde_validator::SerdeValidator;

#[cfg(feature = "serde")]
mod serde_validator {
    use super::{ValidationFailure, Validator};
    use crate::tokenize::Row;
    use serde::de::DeserializeOwned;
    use std::fmt;
    use std::marker::PhantomData;

    /// Validates rows by deserializing them positionally into `T`.
    ///
    /// Fields map to `T` in order, so tuples and structs both work. Numeric and
    /// boolean fields are parsed from their text; a field that does not parse
    /// becomes a [`ValidationFailure`] with the deserializer's message.
    ///
    /// ```
    /// use csvguard_core::{parse_str_with, ParseConfig, SerdeValidator};
    /// use serde::Deserialize;
    ///
    /// #[derive(Debug, PartialEq, Deserialize)]
    /// struct Person {
    ///     name: String,
    ///     number: f64,
    ///     fruit: String,
    /// }
    ///
    /// let schema = SerdeValidator::<Person>::new();
    /// let result = parse_str_with("Alice,23,fig\nBob,thirty,grape", &ParseConfig::default(), &schema)
    ///     .unwrap();
    /// assert_eq!(result.data.len(), 1);
    /// assert_eq!(result.data[0].name, "Alice");
    /// assert_eq!(result.errors[0].line, 2);
    /// ```
    pub struct SerdeValidator<T> {
        _target: PhantomData<fn() -> T>,
    }

    impl<T> SerdeValidator<T> {
        /// Create a validator for `T`.
        pub fn new() -> Self {
            Self {
                _target: PhantomData,
            }
        }
    }

    impl<T> Default for SerdeValidator<T> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<T> Clone for SerdeValidator<T> {
        fn clone(&self) -> Self {
            Self::new()
        }
    }

    impl<T> fmt::Debug for SerdeValidator<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.debug_struct("SerdeValidator")
                .field("target", &std::any::type_name::<T>())
                .finish()
        }
    }

    impl<T: DeserializeOwned> Validator for SerdeValidator<T> {
        type Output = T;

        fn validate(&self, row: Row) -> Result<T, ValidationFailure> {
            let record = csv::StringRecord::from(row);
            record
                .deserialize::<T>(None)
                .map_err(|e| ValidationFailure::new(deserialize_message(&e)))
        }
    }

    /// Strip the position prefix csv adds; the collector reports the line.
    fn deserialize_message(err: &csv::Error) -> String {
        match err.kind() {
            csv::ErrorKind::Deserialize { err, .. } => match err.field() {
                Some(index) => format!("field {}: {}", index + 1, err.kind()),
                None => err.kind().to_string(),
            },
            _ => err.to_string(),
        }
    }
}
