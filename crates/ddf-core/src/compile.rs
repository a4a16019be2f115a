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

//! Case compilation.
//!
//! For each case column, rows are walked in order and folded into one
//! decorated entry per surviving row: type and required resolution,
//! sentinel handling, suppression of children under fields pinned to an
//! empty value, then assembly and normalization into the final document.

use crate::case::{Case, SheetOutcome};
use crate::error::{DdfError, Result};
use crate::kind::{resolve_kind, FieldKind};
use crate::literal::{infer_scalar, parse_flow, str_value};
use crate::normalize::normalize;
use crate::path::{level_slots, PathSlot};
use crate::sheet::{Row, Sheet, FIELD_OUTPUT, FIELD_TYPE, INPUT};
use crate::tree::{Assembler, Decor, ValueTag};
use crate::value::Value;
use indexmap::IndexMap;

/// `FieldOutput` marker meaning "required to appear only when null".
pub const ONLY_IF_NULL: &str = "○:null";

/// Cell literal asserting a field must be absent from the response.
pub const NOT_EXIST: &str = "not exist";

/// Sentinel literals that force required-ness and pin a field to an
/// empty/absent expectation.
pub const SENTINELS: [&str; 5] = ["null", NOT_EXIST, "{}", "[]", "\"\""];

/// Compile every case column of a sheet.
///
/// The sheet is atomic: the first error anywhere aborts the whole case
/// set, and no partial cases are returned.
pub fn compile_sheet(sheet: &Sheet) -> Result<Vec<Case>> {
    if !sheet.has_type_column() {
        return Err(DdfError::missing_type_column());
    }
    let max_depth = sheet.max_depth();
    if max_depth == 0 {
        return Err(DdfError::missing_level_columns());
    }
    sheet
        .case_columns()
        .map(|title| compile_case(sheet, title, max_depth))
        .collect()
}

/// Compile a set of sheets independently. Failures are collected per
/// sheet and never abort siblings.
pub fn compile_sheets(sheets: &[Sheet]) -> Vec<SheetOutcome> {
    sheets
        .iter()
        .map(|sheet| SheetOutcome {
            name: sheet.name.clone(),
            result: compile_sheet(sheet),
        })
        .collect()
}

/// Depth and rendered value of the last emitted entry, for the
/// child-suppression rule.
struct Emitted {
    depth: usize,
    value_text: Option<String>,
}

fn compile_case(sheet: &Sheet, title: &str, max_depth: usize) -> Result<Case> {
    let mut assembler = Assembler::new();
    let mut extra_inputs: IndexMap<String, Value> = IndexMap::new();
    let mut last: Option<Emitted> = None;

    for (index, row) in sheet.rows.iter().enumerate() {
        // Spreadsheet row number; the header is row 1.
        let rownum = index + 2;

        let mut kind = resolve_kind(row.text(FIELD_TYPE), rownum)?;
        let mut text: Option<String> = row.text(title).map(str::to_owned);

        // An explicit not-exist expectation is always an opaque string,
        // never a numeric or structured literal.
        if text.as_deref() == Some(NOT_EXIST) {
            kind = Some(FieldKind::Str);
        }

        let mut numeric: Option<Value> = None;
        if let (Some(k @ (FieldKind::Int | FieldKind::Float)), Some(t)) = (kind, text.as_deref()) {
            let value = coerce_number(k, t, rownum, title)?;
            text = Some(number_text(&value));
            numeric = Some(value);
        }

        // A field with no declared type and no override still appears,
        // with an empty placeholder.
        if kind.is_none() && text.is_none() {
            text = Some(String::new());
        }

        if let Some(input_name) = row.text(INPUT) {
            if let Some(t) = text.as_deref() {
                let value = match numeric.take() {
                    Some(v) => v,
                    None if kind.is_none() => infer_scalar(t),
                    None => render_cell(kind, t, rownum, title)?,
                };
                extra_inputs.insert(input_name.to_string(), value);
            }
            continue;
        }

        let slots = level_slots(row, max_depth);
        if slots.is_empty() {
            continue;
        }
        let depth = slots.len();
        let leaf_is_item = matches!(slots.last(), Some(PathSlot::Item));

        let output = row.text(FIELD_OUTPUT);
        let only_if_null = output == Some(ONLY_IF_NULL);
        let is_null = text.as_deref() == Some("null");
        let mut required = output.is_some() && (!only_if_null || is_null);
        if matches!(text.as_deref(), Some(t) if SENTINELS.contains(&t)) {
            required = true;
        }

        // Children under a field already pinned to an empty/absent value
        // are not elaborated.
        if let Some(prev) = &last {
            let nested = prev.depth < depth || (prev.depth == depth && leaf_is_item);
            let pinned = prev
                .value_text
                .as_deref()
                .is_some_and(|t| SENTINELS.iter().any(|s| t.ends_with(s)));
            if nested && pinned {
                continue;
            }
        }

        // An explicit null always wins over the declared type.
        let tag = if is_null {
            Some(ValueTag::Null)
        } else {
            kind.map(ValueTag::Kind)
        };
        let decor = if leaf_is_item {
            Decor::default()
        } else {
            Decor { required, tag }
        };

        // A required typed field with no override gets a concrete empty
        // placeholder so the document stays well-formed.
        if required && text.is_none() {
            if let Some(empty) = kind.and_then(empty_literal) {
                text = Some(empty.to_string());
            }
        }

        let value = match text.as_deref() {
            None => None,
            Some(_) if is_null => Some(Value::Null),
            Some(t) => match numeric.take() {
                Some(v) => Some(v),
                None => Some(render_cell(kind, t, rownum, title)?),
            },
        };

        // A bare list-entry marker with no key and no value is a no-op
        // continuation.
        if leaf_is_item && value.is_none() && slots[..depth - 1].iter().all(PathSlot::is_blank) {
            continue;
        }

        assembler.insert(&slots, decor, value);
        last = Some(Emitted {
            depth,
            value_text: text,
        });
    }

    let (data, should_not_exist) = normalize(assembler.finish());
    Ok(Case {
        title: title.to_string(),
        should_not_exist,
        data,
        extra_inputs,
    })
}

fn empty_literal(kind: FieldKind) -> Option<&'static str> {
    match kind {
        FieldKind::Str => Some("\"\""),
        FieldKind::Seq => Some("[]"),
        FieldKind::Map => Some("{}"),
        _ => None,
    }
}

fn coerce_number(kind: FieldKind, text: &str, rownum: usize, column: &str) -> Result<Value> {
    if kind == FieldKind::Int {
        if let Ok(n) = text.parse::<i64>() {
            return Ok(Value::Int(n));
        }
    }
    // `number` aliases to int but routinely carries fractional cells, so
    // both numeric kinds fall back to float syntax.
    crate::literal::float_token(text)
        .map(Value::Float)
        .ok_or_else(|| DdfError::numeric_coercion(rownum, column, text))
}

fn number_text(value: &Value) -> String {
    match value {
        Value::Int(n) => n.to_string(),
        Value::Float(n) => format!("{}", n),
        _ => String::new(),
    }
}

/// Render a cell's text under its declared kind.
fn render_cell(kind: Option<FieldKind>, text: &str, rownum: usize, column: &str) -> Result<Value> {
    match kind {
        None => {
            if text.is_empty() {
                Ok(Value::Null)
            } else {
                Ok(infer_scalar(text))
            }
        }
        Some(FieldKind::Str) => Ok(str_value(text)),
        Some(FieldKind::Bool) => match text {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(DdfError::literal(
                rownum,
                column,
                format!("cannot parse \"{}\" as a boolean", text),
            )),
        },
        Some(FieldKind::Null) => {
            if text == "null" {
                Ok(Value::Null)
            } else {
                Err(DdfError::literal(
                    rownum,
                    column,
                    format!("cannot parse \"{}\" as null", text),
                ))
            }
        }
        Some(FieldKind::Seq) => match parse_flow(text) {
            Ok(value @ Value::Seq(_)) => Ok(value),
            Ok(_) => Err(DdfError::literal(
                rownum,
                column,
                format!("expected a sequence literal, got \"{}\"", text),
            )),
            Err(message) => Err(DdfError::literal(rownum, column, message)),
        },
        Some(FieldKind::Map) => match parse_flow(text) {
            Ok(value @ Value::Map(_)) => Ok(value),
            Ok(_) => Err(DdfError::literal(
                rownum,
                column,
                format!("expected a mapping literal, got \"{}\"", text),
            )),
            Err(message) => Err(DdfError::literal(rownum, column, message)),
        },
        Some(k @ (FieldKind::Int | FieldKind::Float)) => coerce_number(k, text, rownum, column),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_text_matches_spreadsheet_rendering() {
        assert_eq!(number_text(&Value::Int(30)), "30");
        assert_eq!(number_text(&Value::Float(3.5)), "3.5");
        assert_eq!(number_text(&Value::Float(3.0)), "3");
    }

    #[test]
    fn coerce_number_accepts_fractional_int_cells() {
        assert_eq!(coerce_number(FieldKind::Int, "30", 2, "c").unwrap(), Value::Int(30));
        assert_eq!(
            coerce_number(FieldKind::Int, "2.5", 2, "c").unwrap(),
            Value::Float(2.5)
        );
        assert_eq!(
            coerce_number(FieldKind::Float, "1.25", 2, "c").unwrap(),
            Value::Float(1.25)
        );
    }

    #[test]
    fn coerce_number_rejects_text() {
        let err = coerce_number(FieldKind::Int, "abc", 5, "case A").unwrap_err();
        assert_eq!(err.kind, crate::error::DdfErrorKind::NumericCoercion);
        assert_eq!(err.row, 5);
    }

    #[test]
    fn render_cell_by_kind() {
        assert_eq!(
            render_cell(Some(FieldKind::Str), "007", 2, "c").unwrap(),
            Value::from("007")
        );
        assert_eq!(
            render_cell(Some(FieldKind::Bool), "true", 2, "c").unwrap(),
            Value::Bool(true)
        );
        assert!(render_cell(Some(FieldKind::Bool), "yes", 2, "c").is_err());
        assert_eq!(
            render_cell(Some(FieldKind::Seq), "[1, 2]", 2, "c").unwrap(),
            Value::Seq(vec![Value::Int(1), Value::Int(2)])
        );
        assert!(render_cell(Some(FieldKind::Seq), "{}", 2, "c").is_err());
        assert!(render_cell(Some(FieldKind::Map), "[1]", 2, "c").is_err());
        assert_eq!(render_cell(None, "", 2, "c").unwrap(), Value::Null);
        assert_eq!(render_cell(None, "30", 2, "c").unwrap(), Value::Int(30));
    }
}
