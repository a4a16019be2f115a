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

//! Table-file input.
//!
//! A table file is a JSON document exported from a sheet:
//! `{"table": "name", "header": [...], "rows": [[...], ...]}` with one
//! array per row, cells aligned with the header. Ragged rows are padded
//! with absent cells; JSON nulls are absent too.

use crate::error::Result;
use ddf_core::{Row, Sheet};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::path::Path;

#[derive(Deserialize)]
struct TableFile {
    table: String,
    header: Vec<String>,
    rows: Vec<Vec<JsonValue>>,
}

/// Parse a table file into one [`Sheet`].
pub fn from_table_str(text: &str) -> Result<Sheet> {
    let table: TableFile = serde_json::from_str(text)?;
    let mut sheet = Sheet::new(table.table, table.header);
    for cells in table.rows {
        let mut row = Row::new();
        for (column, cell) in sheet.header.iter().zip(cells) {
            if column.is_empty() {
                continue;
            }
            if let Some(text) = cell_text(cell) {
                row.set(column.clone(), text);
            }
        }
        sheet.rows.push(row);
    }
    Ok(sheet)
}

/// Read a table file from disk.
pub fn read_table(path: impl AsRef<Path>) -> Result<Sheet> {
    from_table_str(&std::fs::read_to_string(path)?)
}

fn cell_text(cell: JsonValue) -> Option<String> {
    match cell {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Number(n) => Some(n.to_string()),
        // Structured cells are not a thing tables export; keep their
        // JSON text so the compiler sees a flow literal.
        other => Some(other.to_string()),
    }
}
