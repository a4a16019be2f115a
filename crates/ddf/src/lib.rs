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

//! DDF - spreadsheet-driven test fixture compiler.
//!
//! Testers author one spreadsheet row per expected-response field and one
//! override column per test case; this crate compiles each case column
//! into a typed nested document plus the list of field paths that must be
//! absent from the response.
//!
//! The core compiler lives in [`ddf-core`](ddf_core) and is re-exported
//! here. Input/output adapters are feature-gated:
//!
//! - `xlsx`: workbook files via [`ddf-xlsx`](ddf_xlsx)
//! - `json`: table files and case JSON via [`ddf-json`](ddf_json)
//!
//! # Example
//!
//! ```
//! use ddf::{compile_sheet, Row, Sheet, Value};
//!
//! let mut sheet = Sheet::new(
//!     "login",
//!     vec!["Field1".into(), "FieldType".into(), "FieldOutput".into(), "ok".into()],
//! );
//! let mut row = Row::new();
//! row.set("Field1", "age").set("FieldType", "integer").set("FieldOutput", "x").set("ok", "30");
//! sheet.rows.push(row);
//!
//! let cases = compile_sheet(&sheet).unwrap();
//! assert_eq!(cases[0].data.get_path("age"), Some(&Value::Int(30)));
//! ```

pub use ddf_core::*;

#[cfg(feature = "json")]
pub use ddf_json as json;

#[cfg(feature = "xlsx")]
pub use ddf_xlsx as xlsx;
