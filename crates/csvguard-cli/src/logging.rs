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

//! Log initialisation.
//!
//! Logs go to stderr so stdout stays clean for data. `RUST_LOG` wins when it
//! is set and no `-v` flag was given.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor `-v` is given.
pub const DEFAULT_FILTER: &str = "csvguard=warn";

/// Filter directive for a `-v` count.
pub fn filter_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_FILTER,
        1 => "csvguard=info",
        _ => "csvguard=debug",
    }
}

/// Install the global subscriber.
pub fn init(verbosity: u8) {
    let filter = if verbosity == 0 {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    } else {
        EnvFilter::new(filter_for(verbosity))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
