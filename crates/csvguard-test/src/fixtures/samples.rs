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

/// Quoted fields of both kinds, with embedded commas and padding.
///
/// Every line tokenizes to three fields.
pub const QUOTED_CSV: &str = r#"name,age,fruit
"Smith, Alice",23,fig
'O Brien, Bob' , 30 , "grape, red"
Charlie,"  25  ",'kiwi'
"#;

/// The rows [`QUOTED_CSV`] is expected to produce.
pub fn quoted_rows() -> Vec<Vec<String>> {
    [
        ["name", "age", "fruit"],
        ["Smith, Alice", "23", "fig"],
        ["O Brien, Bob", "30", "grape, red"],
        ["Charlie", "  25  ", "kiwi"],
    ]
    .iter()
    .map(|row| row.iter().map(|f| f.to_string()).collect())
    .collect()
}

/// LF, CRLF and a missing final terminator in one file.
pub const MIXED_ENDINGS_CSV: &str = "a,b,c\r\nd,e,f\ng,h,i";

/// Good and bad lines interleaved; lines 2, 4 and 5 have the wrong arity.
pub const RAGGED_CSV: &str = "\
a,b,c
just one
d,e,f
too,many,fields,here

g,h,i
";

/// Lines that never tokenize to three fields, with a short label.
pub fn malformed_line_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("blank", "   "),
        ("single", "Alice"),
        ("two_fields", "Alice,23"),
        ("four_fields", "Alice,23,fig,extra"),
        ("trailing_comma", "Alice,23,fig,"),
        ("unterminated_quote", "Alice,\"23,fig"),
        ("quoted_comma_only", "\"Alice,23,fig\""),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use csvguard_core::tokenize;

    #[test]
    fn test_malformed_samples_have_wrong_arity() {
        for (name, line) in malformed_line_samples() {
            assert_ne!(tokenize(line).len(), 3, "sample {} has three fields", name);
        }
    }

    #[test]
    fn test_quoted_rows_match_tokenizer() {
        let rows: Vec<Vec<String>> = QUOTED_CSV.lines().map(tokenize).collect();
        assert_eq!(rows, quoted_rows());
    }
}
