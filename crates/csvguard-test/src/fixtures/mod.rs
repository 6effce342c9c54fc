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

//! Canonical CSV fixtures.
//!
//! - **people**: the name/number/fruit demo data and its schema
//! - **samples**: quoting, line endings and malformed lines

mod people;
mod samples;

pub use people::*;
pub use samples::*;

use crate::FixtureList;

/// Returns all fixtures for iteration.
pub fn all() -> FixtureList {
    vec![
        ("people", PEOPLE_CSV),
        ("quoted", QUOTED_CSV),
        ("mixed_endings", MIXED_ENDINGS_CSV),
        ("ragged", RAGGED_CSV),
        ("empty", ""),
    ]
}
