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

//! Built-in schemas selectable with `--schema`.

use clap::ValueEnum;
use csvguard_core::{Row, SerdeValidator, ValidationFailure, Validator};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Message for a second field that is not a number.
pub const INVALID_NUMBER: &str = "Must be a valid number.";

/// Schema applied to every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SchemaKind {
    /// Plain string rows
    #[default]
    None,
    /// `name,number,fruit` records
    People,
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaKind::None => write!(f, "none"),
            SchemaKind::People => write!(f, "people"),
        }
    }
}

/// A row of the people data set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub number: f64,
    pub fruit: String,
}

/// The `people` schema: positional serde decoding, with one message for
/// any bad number.
///
/// The number must be a finite `f64`; empty text, `NaN` and infinities are
/// rejected.
#[derive(Debug, Clone, Default)]
pub struct PeopleSchema {
    inner: SerdeValidator<Person>,
}

impl Validator for PeopleSchema {
    type Output = Person;

    fn validate(&self, row: Row) -> Result<Person, ValidationFailure> {
        match self.inner.validate(row) {
            Ok(person) if person.number.is_finite() => Ok(person),
            _ => Err(ValidationFailure::new(INVALID_NUMBER)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn test_people_schema_accepts_number() {
        let person = PeopleSchema::default()
            .validate(row(&["Alice", "23", "fig"]))
            .unwrap();
        assert_eq!(person.name, "Alice");
        assert_eq!(person.number, 23.0);
        assert_eq!(person.fruit, "fig");
    }

    #[test]
    fn test_people_schema_rejects_text_and_nan() {
        for bad in ["thirty", "", "NaN", "Infinity"] {
            let err = PeopleSchema::default()
                .validate(row(&["Bob", bad, "grape"]))
                .unwrap_err();
            assert_eq!(err.messages(), [INVALID_NUMBER]);
        }
    }

    #[test]
    fn test_schema_kind_display() {
        assert_eq!(SchemaKind::None.to_string(), "none");
        assert_eq!(SchemaKind::People.to_string(), "people");
    }
}
