// Dweve DDF - Spreadsheet-Driven Fixture Compiler
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

//! Case and outcome JSON output.
//!
//! The externally visible case shape spreads extra inputs alongside the
//! document: `{"title": ..., <input name>: ..., "shouldNotExist": [...],
//! "data": {...}}`. Per-sheet outcomes carry either `cases` or `error`.

use ddf_core::{Case, SheetOutcome, Value};
use serde_json::{json, Map, Number, Value as JsonValue};

/// Convert a document value to JSON.
pub fn value_to_json(value: &Value) -> JsonValue {
    match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Int(n) => JsonValue::Number((*n).into()),
        Value::Float(f) => Number::from_f64(*f)
            .map(JsonValue::Number)
            .unwrap_or(JsonValue::Null),
        Value::String(s) => JsonValue::String(s.clone()),
        Value::Seq(items) => JsonValue::Array(items.iter().map(value_to_json).collect()),
        Value::Map(entries) => {
            let mut map = Map::with_capacity(entries.len());
            for (key, value) in entries {
                map.insert(key.clone(), value_to_json(value));
            }
            JsonValue::Object(map)
        }
    }
}

/// Convert one case to its external JSON shape.
pub fn case_to_json(case: &Case) -> JsonValue {
    let mut map = Map::new();
    map.insert("title".to_string(), json!(case.title));
    for (name, value) in &case.extra_inputs {
        map.insert(name.clone(), value_to_json(value));
    }
    map.insert("shouldNotExist".to_string(), json!(case.should_not_exist));
    map.insert("data".to_string(), value_to_json(&case.data));
    JsonValue::Object(map)
}

/// Convert one per-sheet outcome: `cases` on success, `error` on failure.
pub fn outcome_to_json(outcome: &SheetOutcome) -> JsonValue {
    match &outcome.result {
        Ok(cases) => json!({
            "name": outcome.name,
            "cases": cases.iter().map(case_to_json).collect::<Vec<_>>(),
        }),
        Err(error) => json!({
            "name": outcome.name,
            "error": error.to_string(),
        }),
    }
}

/// Convert a whole workbook's outcomes.
pub fn outcomes_to_json(outcomes: &[SheetOutcome]) -> JsonValue {
    JsonValue::Array(outcomes.iter().map(outcome_to_json).collect())
}
