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

use csvguard_core::{Row, ValidationFailure, Validator};

/// The people demo file: a header, three good rows and one bad number.
///
/// With [`PeopleValidator`] the header (line 1) and Bob (line 3) are rejected.
pub const PEOPLE_CSV: &str = "\
name,age,fruit
Alice,23,fig
Bob,thirty,grape
Charlie,25,kiwi
Nim,22,apple
";

/// Message produced when the second field is not a number.
pub const INVALID_NUMBER: &str = "Must be a valid number.";

/// A validated row of [`PEOPLE_CSV`].
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub number: f64,
    pub fruit: String,
}

/// Requires the second field to parse as a finite `f64`.
///
/// Same number rule as the CLI `people` schema: empty text, `NaN` and
/// infinities are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeopleValidator;

impl Validator for PeopleValidator {
    type Output = Person;

    fn validate(&self, row: Row) -> Result<Person, ValidationFailure> {
        let mut fields = row.into_iter();
        let name = fields.next().unwrap_or_default();
        let number = fields
            .next()
            .and_then(|n| n.parse::<f64>().ok())
            .filter(|n| n.is_finite())
            .ok_or_else(|| ValidationFailure::new(INVALID_NUMBER))?;
        let fruit = fields.next().unwrap_or_default();
        Ok(Person {
            name,
            number,
            fruit,
        })
    }
}
