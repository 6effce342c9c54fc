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

//! The built-in `people` schema and the shared `PeopleValidator` fixture
//! must accept and reject the same rows.

use csvguard_cli::schemas::{PeopleSchema, INVALID_NUMBER};
use csvguard_core::{Row, Validator};
use csvguard_test::fixtures::PeopleValidator;

fn row(number: &str) -> Row {
    vec!["Alice".to_string(), number.to_string(), "fig".to_string()]
}

#[test]
fn test_number_rule_matches_fixture_validator() {
    let schema = PeopleSchema::default();
    for number in [
        "23", "22.5", "-1e3", "0", "+7", "thirty", "", "NaN", "nan", "inf", "Infinity",
        "-Infinity", "0x10", "1,5",
    ] {
        let cli = schema.validate(row(number));
        let fixture = PeopleValidator.validate(row(number));
        assert_eq!(cli.is_ok(), fixture.is_ok(), "disagreement on {:?}", number);

        match (cli, fixture) {
            (Ok(a), Ok(b)) => assert_eq!(a.number, b.number),
            (Err(a), Err(b)) => {
                assert_eq!(a.messages(), [INVALID_NUMBER]);
                assert_eq!(a.messages(), b.messages());
            }
            _ => unreachable!(),
        }
    }
}

#[test]
fn test_empty_and_infinite_numbers_rejected() {
    let schema = PeopleSchema::default();
    for number in ["", "Infinity", "-Infinity", "NaN"] {
        assert!(schema.validate(row(number)).is_err(), "{:?} accepted", number);
    }
}
