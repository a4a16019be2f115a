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

//! Convert workbook files to DDF sheets.
//!
//! The first row of each worksheet is its header; every later row maps
//! header names to cell text. Empty cells are absent (not empty strings),
//! numeric cells render without a spurious `.0`, and worksheets with no
//! rows at all are skipped.

mod error;

pub use error::{Result, XlsxError};

use calamine::{open_workbook_auto, Data, Reader};
use ddf_core::{Row, Sheet};
use std::path::Path;

/// Read every worksheet of a workbook file into [`Sheet`]s.
///
/// Format detection (xlsx/xlsm/xlsb/xls/ods) follows the file content.
pub fn read_workbook(path: impl AsRef<Path>) -> Result<Vec<Sheet>> {
    let mut workbook = open_workbook_auto(path)?;
    let mut sheets = Vec::new();
    for (name, range) in workbook.worksheets() {
        let mut rows = range.rows();
        let header: Vec<String> = match rows.next() {
            Some(cells) => cells.iter().map(|c| cell_text(c).unwrap_or_default()).collect(),
            None => continue,
        };
        let mut sheet = Sheet::new(name, header);
        for cells in rows {
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
        sheets.push(sheet);
    }
    Ok(sheets)
}

/// Render one cell as text the way a tester sees it in the authoring tool.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(n) => Some(n.to_string()),
        Data::Float(f) => Some(float_text(*f)),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(float_text(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Error(_) => None,
    }
}

/// Integral floats print as integers; cell grids have no `30.0`.
fn float_text(f: f64) -> String {
    if f.fract() == 0.0 && f.is_finite() && f.abs() < 1e15 {
        format!("{}", f as i64)
    } else {
        format!("{}", f)
    }
}
