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

//! Compiled case results.

use crate::error::DdfError;
use crate::value::Value;
use indexmap::IndexMap;

/// One compiled test case: the expected document for a single case column.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    /// The case column's header name.
    pub title: String,
    /// Dotted paths asserted absent from the response, in row order.
    pub should_not_exist: Vec<String>,
    /// The expected document; a mapping at the root unless the sheet put
    /// `-` markers in `Field1`.
    pub data: Value,
    /// Case-level scalar inputs from `Input` rows. Externally these sit
    /// alongside `data` as additional top-level fields.
    pub extra_inputs: IndexMap<String, Value>,
}

/// Per-sheet compilation outcome. Sheets are isolated: one sheet failing
/// never disturbs its siblings, and a failed sheet keeps no partial cases.
#[derive(Debug, Clone)]
pub struct SheetOutcome {
    /// Sheet name.
    pub name: String,
    /// All cases, or the single captured error.
    pub result: Result<Vec<Case>, DdfError>,
}

impl SheetOutcome {
    /// Whether compilation of this sheet succeeded.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}
