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

//! Tokenizer and collector throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use csvguard_core::{parse_str, tokenize, ParseConfig};

fn generate_csv(rows: usize) -> String {
    let mut csv = String::with_capacity(rows * 32);
    for i in 0..rows {
        match i % 4 {
            0 => csv.push_str(&format!("name{i}, {i}, fig\n")),
            1 => csv.push_str(&format!("\"Last, First {i}\",{i},'kiwi, gold'\n")),
            2 => csv.push_str(&format!("  padded {i}  ,  {i}  ,  grape  \r\n")),
            _ => csv.push_str(&format!("short,{i}\n")),
        }
    }
    csv
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");

    for (name, line) in [
        ("plain", "Alice,23,fig"),
        ("padded", "   Alice  ,  23 ,   fig   "),
        ("quoted", r#""Alice, A.",'23',"fig, dried""#),
        ("unterminated", r#"Alice,"23,fig and more text"#),
    ] {
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), line, |b, line| {
            b.iter(|| tokenize(black_box(line)))
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_str");
    let config = ParseConfig::default();

    for rows in [100, 10_000] {
        let csv = generate_csv(rows);
        group.throughput(Throughput::Bytes(csv.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &csv, |b, csv| {
            b.iter(|| parse_str(black_box(csv), &config))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_tokenize, bench_parse);
criterion_main!(benches);
