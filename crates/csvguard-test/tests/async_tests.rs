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

//! Async entry points must agree with the blocking ones.

use csvguard_core::{
    parse_csv, parse_csv_async, parse_csv_async_with, parse_csv_with, CsvGuardError, ParseConfig,
};
use csvguard_test::fixtures::{self, PeopleValidator};
use csvguard_test::{missing_path, write_temp_csv};

#[tokio::test]
async fn test_async_matches_sync_for_all_fixtures() {
    let config = ParseConfig::default();
    for (name, content) in fixtures::all() {
        let file = write_temp_csv(content);
        let sync = parse_csv(file.path(), &config).unwrap();
        let async_result = parse_csv_async(file.path(), &config).await.unwrap();
        assert_eq!(sync, async_result, "fixture {}", name);
    }
}

#[tokio::test]
async fn test_async_schema_matches_sync() {
    let file = write_temp_csv(fixtures::PEOPLE_CSV);
    let config = ParseConfig::default();

    let sync = parse_csv_with(file.path(), &config, &PeopleValidator).unwrap();
    let async_result = parse_csv_async_with(file.path(), &config, &PeopleValidator)
        .await
        .unwrap();

    assert_eq!(sync.data, async_result.data);
    assert_eq!(sync.errors, async_result.errors);
}

#[tokio::test]
async fn test_async_missing_file() {
    let err = parse_csv_async(missing_path(), &ParseConfig::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CsvGuardError::Open { .. }));
}
