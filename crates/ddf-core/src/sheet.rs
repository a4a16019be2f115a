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

//! Tabular input model.
//!
//! A [`Sheet`] is the neutral form every tabular source (workbook reader,
//! table file) produces: an ordered header and rows mapping column names to
//! raw cell text. Reserved columns (`FieldType`, `FieldOutput`, `Input`,
//! `Field1..FieldN`) drive compilation; every other column is a test case.

use std::collections::BTreeMap;

/// Reserved column declaring the row's value type.
pub const FIELD_TYPE: &str = "FieldType";
/// Reserved column marking a field as required in the output.
pub const FIELD_OUTPUT: &str = "FieldOutput";
/// Reserved column marking a row as a case-level scalar input.
pub const INPUT: &str = "Input";

/// One spreadsheet row: column name to raw cell text.
///
/// Absent cells are simply missing from the mapping; whitespace-only text
/// is kept raw here and treated as absent by [`Row::text`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: BTreeMap<String, String>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cell's raw text.
    pub fn set(&mut self, column: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.cells.insert(column.into(), text.into());
        self
    }

    /// Raw cell text, untrimmed.
    pub fn cell(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Trimmed cell text; empty and absent cells are both `None`.
    pub fn text(&self, column: &str) -> Option<&str> {
        let trimmed = self.cells.get(column)?.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed)
        }
    }
}

impl FromIterator<(String, String)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// One sheet of tabular input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sheet {
    /// Sheet name, surfaced in per-sheet outcomes.
    pub name: String,
    /// Ordered column names.
    pub header: Vec<String>,
    /// Ordered data rows (the header row is not included).
    pub rows: Vec<Row>,
}

impl Sheet {
    /// Create an empty sheet with the given name and header.
    pub fn new(name: impl Into<String>, header: Vec<String>) -> Self {
        Self {
            name: name.into(),
            header,
            rows: Vec::new(),
        }
    }

    /// The deepest level column index present in the header, or zero when
    /// the sheet has no `Field1..FieldN` columns at all.
    pub fn max_depth(&self) -> usize {
        self.header
            .iter()
            .filter_map(|h| level_index(h))
            .max()
            .unwrap_or(0)
    }

    /// Whether the header carries a `FieldType` column.
    pub fn has_type_column(&self) -> bool {
        self.header.iter().any(|h| h == FIELD_TYPE)
    }

    /// Case columns: every header that is not reserved.
    pub fn case_columns(&self) -> impl Iterator<Item = &str> {
        self.header.iter().map(String::as_str).filter(|h| {
            *h != INPUT && *h != FIELD_TYPE && *h != FIELD_OUTPUT && level_index(h).is_none()
        })
    }
}

/// Parse a `Field{i}` header into its level index.
pub fn level_index(header: &str) -> Option<usize> {
    let digits = header.strip_prefix("Field")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// The `Field{i}` column name for a level index.
pub fn level_column(index: usize) -> String {
    format!("Field{}", index)
}
