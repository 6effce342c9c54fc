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

//! Shared test fixtures and utilities for CSVGuard.
//!
//! # Quick Start
//!
//! ```rust
//! use csvguard_core::{parse_str_with, ParseConfig};
//! use csvguard_test::fixtures::{PeopleValidator, PEOPLE_CSV};
//!
//! let result = parse_str_with(PEOPLE_CSV, &ParseConfig::default(), &PeopleValidator).unwrap();
//! assert_eq!(result.data.len(), 3); // Alice, Charlie, Nim
//! assert_eq!(result.errors.len(), 2); // header row, Bob
//! ```
//!
//! Files on disk, for the path-based entry points:
//!
//! ```rust
//! use csvguard_core::{parse_csv, ParseConfig};
//! use csvguard_test::{fixtures, write_temp_csv};
//!
//! let file = write_temp_csv(fixtures::PEOPLE_CSV);
//! let result = parse_csv(file.path(), &ParseConfig::default()).unwrap();
//! assert_eq!(result.data.len(), 5);
//! ```

/// Canonical CSV fixtures and validators.
pub mod fixtures;

/// Temporary file helpers.
pub mod files;

pub use files::{missing_path, write_temp_csv};

/// Type alias for a list of named CSV fixtures.
pub type FixtureList = Vec<(&'static str, &'static str)>;
