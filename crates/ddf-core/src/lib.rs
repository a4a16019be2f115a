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

//! Core compiler for DDF sheets.
//!
//! A DDF sheet declares one expected-response field per row — its nesting
//! path in `Field1..FieldN`, its type in `FieldType`, its required marker
//! in `FieldOutput` — and one override column per test case. This crate
//! compiles every case column into a typed nested document plus the list
//! of dotted paths that must be absent from the response.
//!
//! # Example
//!
//! ```
//! use ddf_core::{compile_sheet, Row, Sheet, Value};
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
//!
//! Sheets are compiled independently and any error inside one sheet aborts
//! only that sheet's case set; [`compile_sheets`] collects per-sheet
//! outcomes without letting one failure disturb siblings.

mod case;
mod compile;
mod error;
mod kind;
mod literal;
mod normalize;
mod path;
mod sheet;
mod tree;
mod value;

pub use case::{Case, SheetOutcome};
pub use compile::{compile_sheet, compile_sheets, NOT_EXIST, ONLY_IF_NULL, SENTINELS};
pub use error::{DdfError, DdfErrorKind, Result};
pub use kind::{resolve_kind, FieldKind};
pub use path::{level_slots, PathSlot};
pub use sheet::{level_column, level_index, Row, Sheet, FIELD_OUTPUT, FIELD_TYPE, INPUT};
pub use tree::{Decor, ValueTag};
pub use value::Value;
