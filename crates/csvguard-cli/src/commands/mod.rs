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

//! CLI command implementations

mod check;
mod parse;

pub use check::check;
pub use parse::{parse, ParseArgs};

use crate::schemas::{PeopleSchema, Person, SchemaKind};
use csvguard_core::{
    parse_csv_with, ParseConfig, ParseError, ParseResult, Passthrough, Result, Row,
};
use serde::Serialize;
use tracing::{debug, info};

/// Rows or records, depending on the schema that produced them.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Records {
    Rows(ParseResult<Row>),
    People(ParseResult<Person>),
}

impl Records {
    /// Row errors collected during the parse.
    pub fn errors(&self) -> &[ParseError] {
        match self {
            Records::Rows(result) => &result.errors,
            Records::People(result) => &result.errors,
        }
    }

    /// Number of accepted rows.
    pub fn accepted(&self) -> usize {
        match self {
            Records::Rows(result) => result.data.len(),
            Records::People(result) => result.data.len(),
        }
    }
}

/// Parse `file` with the chosen schema and configuration.
pub(crate) fn collect(file: &str, schema: SchemaKind, config: &ParseConfig) -> Result<Records> {
    info!(file, %schema, arity = config.expected_arity, "parsing");

    let records = match schema {
        SchemaKind::None => Records::Rows(parse_csv_with(file, config, &Passthrough)?),
        SchemaKind::People => {
            Records::People(parse_csv_with(file, config, &PeopleSchema::default())?)
        }
    };

    for error in records.errors() {
        debug!(line = error.line, messages = ?error.messages, "row rejected");
    }
    info!(
        accepted = records.accepted(),
        rejected = records.errors().len(),
        "parse finished"
    );

    Ok(records)
}
