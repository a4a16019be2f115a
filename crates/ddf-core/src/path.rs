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

//! Nesting path extraction from the indexed level columns.

use crate::sheet::{level_column, Row};

/// One level slot of a row's nesting path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSlot {
    /// Level left empty; position is inherited from the previous row.
    Blank,
    /// Sequence-element marker (`-`): no key, just array membership.
    Item,
    /// Mapping key at this level.
    Key(String),
}

impl PathSlot {
    /// Whether this slot carries no segment of its own.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

/// Extract a row's nesting path from `Field1..Field{max_depth}`.
///
/// Each level cell is trimmed; empty and absent cells are both blank.
/// Trailing blank levels are removed, so the returned slice's length is the
/// row's depth and its last slot, when any, is the row's own segment. A row
/// with an empty path takes no part in the tree.
pub fn level_slots(row: &Row, max_depth: usize) -> Vec<PathSlot> {
    let mut slots: Vec<PathSlot> = (1..=max_depth)
        .map(|i| match row.text(&level_column(i)) {
            None => PathSlot::Blank,
            Some("-") => PathSlot::Item,
            Some(segment) => PathSlot::Key(segment.to_string()),
        })
        .collect();
    while matches!(slots.last(), Some(PathSlot::Blank)) {
        slots.pop();
    }
    slots
}
