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

//! End-to-end compilation tests over the public API.

use ddf_core::{compile_sheet, compile_sheets, DdfErrorKind, Row, Sheet, Value};

/// Build a sheet from a header and rows of (column, text) pairs.
fn sheet(header: &[&str], rows: &[&[(&str, &str)]]) -> Sheet {
    let mut sheet = Sheet::new("test", header.iter().map(|s| s.to_string()).collect());
    for cells in rows {
        let mut row = Row::new();
        for (column, text) in *cells {
            row.set(*column, *text);
        }
        sheet.rows.push(row);
    }
    sheet
}

const HDR: &[&str] = &["Field1", "Field2", "FieldType", "FieldOutput", "Input", "case 1"];

#[test]
fn numeric_typed_cell_compiles_to_number() {
    let s = sheet(
        HDR,
        &[&[("Field1", "age"), ("FieldType", "integer"), ("FieldOutput", "x"), ("case 1", "30")]],
    );
    let cases = compile_sheet(&s).unwrap();
    assert_eq!(cases.len(), 1);
    assert_eq!(cases[0].title, "case 1");
    assert_eq!(cases[0].data.get_path("age"), Some(&Value::Int(30)));
}

#[test]
fn untyped_numeric_cell_is_inferred() {
    let s = sheet(HDR, &[&[("Field1", "count"), ("case 1", "12")]]);
    let cases = compile_sheet(&s).unwrap();
    assert_eq!(cases[0].data.get_path("count"), Some(&Value::Int(12)));
}

#[test]
fn nested_rows_merge_under_their_parent() {
    let s = sheet(
        HDR,
        &[
            &[("Field1", "user"), ("FieldType", "map")],
            &[("Field2", "name"), ("FieldType", "str"), ("case 1", "ada")],
            &[("Field2", "age"), ("FieldType", "int"), ("case 1", "36")],
        ],
    );
    let cases = compile_sheet(&s).unwrap();
    assert_eq!(cases[0].data.get_path("user.name"), Some(&Value::from("ada")));
    assert_eq!(cases[0].data.get_path("user.age"), Some(&Value::Int(36)));
}

#[test]
fn sequence_marker_rows_build_a_list() {
    let s = sheet(
        HDR,
        &[
            &[("Field1", "tags"), ("FieldType", "list")],
            &[("Field2", "-"), ("FieldType", "str"), ("case 1", "a")],
            &[("Field2", "-"), ("FieldType", "str"), ("case 1", "b")],
        ],
    );
    let cases = compile_sheet(&s).unwrap();
    assert_eq!(
        cases[0].data.get_path("tags"),
        Some(&Value::Seq(vec![Value::from("a"), Value::from("b")]))
    );
}

#[test]
fn required_unset_fields_materialize_typed_empties() {
    let s = sheet(
        HDR,
        &[
            &[("Field1", "s"), ("FieldType", "string"), ("FieldOutput", "x")],
            &[("Field1", "q"), ("FieldType", "list"), ("FieldOutput", "x")],
            &[("Field1", "m"), ("FieldType", "map"), ("FieldOutput", "x")],
        ],
    );
    let data = &compile_sheet(&s).unwrap()[0].data;
    assert_eq!(data.get_path("s"), Some(&Value::String(String::new())));
    assert_eq!(data.get_path("q"), Some(&Value::Seq(vec![])));
    assert!(matches!(data.get_path("m"), Some(Value::Map(m)) if m.is_empty()));
}

#[test]
fn optional_unset_fields_are_omitted() {
    let s = sheet(
        HDR,
        &[
            &[("Field1", "a"), ("FieldType", "str")],
            &[("Field1", "b")],
            &[("Field1", "keep"), ("FieldType", "str"), ("case 1", "v")],
        ],
    );
    let data = &compile_sheet(&s).unwrap()[0].data;
    assert_eq!(data.get_path("a"), None);
    assert_eq!(data.get_path("b"), None);
    assert_eq!(data.get_path("keep"), Some(&Value::from("v")));
}

#[test]
fn not_exist_round_trip() {
    let s = sheet(
        HDR,
        &[
            &[("Field1", "user"), ("FieldType", "map")],
            &[("Field2", "secret"), ("FieldType", "str"), ("case 1", "not exist")],
            &[("Field2", "name"), ("FieldType", "str"), ("case 1", "ada")],
        ],
    );
    let case = &compile_sheet(&s).unwrap()[0];
    assert_eq!(case.should_not_exist, vec!["user.secret".to_string()]);
    assert_eq!(case.data.get_path("user.secret"), None);
    assert_eq!(case.data.get_path("user.name"), Some(&Value::from("ada")));
}

#[test]
fn not_exist_on_numeric_type_stays_a_sentinel() {
    // The string sentinel wins over the declared numeric type; no
    // coercion error.
    let s = sheet(
        HDR,
        &[&[("Field1", "age"), ("FieldType", "integer"), ("case 1", "not exist")]],
    );
    let case = &compile_sheet(&s).unwrap()[0];
    assert_eq!(case.should_not_exist, vec!["age".to_string()]);
    assert_eq!(case.data.get_path("age"), None);
}

#[test]
fn children_under_pinned_empty_parent_are_suppressed() {
    // A field pinned to {} swallows its child rows; the child's
    // "not exist" must reach neither data nor shouldNotExist.
    let s = sheet(
        HDR,
        &[
            &[("Field1", "user"), ("FieldType", "map"), ("FieldOutput", "x"), ("case 1", "{}")],
            &[("Field2", "name"), ("FieldType", "str"), ("FieldOutput", "x"), ("case 1", "not exist")],
        ],
    );
    let case = &compile_sheet(&s).unwrap()[0];
    assert!(case.should_not_exist.is_empty());
    assert!(matches!(case.data.get_path("user"), Some(Value::Map(m)) if m.is_empty()));
}

#[test]
fn suppression_covers_sibling_list_entries() {
    let s = sheet(
        HDR,
        &[
            &[("Field1", "tags"), ("FieldType", "list"), ("FieldOutput", "x"), ("case 1", "[]")],
            &[("Field2", "-"), ("FieldType", "str"), ("case 1", "a")],
        ],
    );
    let case = &compile_sheet(&s).unwrap()[0];
    assert_eq!(case.data.get_path("tags"), Some(&Value::Seq(vec![])));
}

#[test]
fn only_if_null_marker_requires_only_null_values() {
    // value is null: the field is required and pinned to null, type tag
    // replaced by the null pin.
    let s = sheet(
        HDR,
        &[&[("Field1", "tags"), ("FieldType", "list"), ("FieldOutput", "○:null"), ("case 1", "null")]],
    );
    let case = &compile_sheet(&s).unwrap()[0];
    assert_eq!(case.data.get_path("tags"), Some(&Value::Null));

    // value absent: not required, omitted.
    let s = sheet(
        HDR,
        &[&[("Field1", "tags"), ("FieldType", "list"), ("FieldOutput", "○:null")]],
    );
    let case = &compile_sheet(&s).unwrap()[0];
    assert_eq!(case.data.get_path("tags"), None);
}

#[test]
fn explicit_null_beats_declared_type() {
    let s = sheet(
        HDR,
        &[&[("Field1", "name"), ("FieldType", "str"), ("FieldOutput", "x"), ("case 1", "null")]],
    );
    let case = &compile_sheet(&s).unwrap()[0];
    assert_eq!(case.data.get_path("name"), Some(&Value::Null));
}

#[test]
fn empty_string_sentinel_is_required_empty() {
    let s = sheet(
        HDR,
        &[&[("Field1", "note"), ("FieldType", "str"), ("case 1", "\"\"")]],
    );
    let case = &compile_sheet(&s).unwrap()[0];
    assert_eq!(case.data.get_path("note"), Some(&Value::String(String::new())));
}

#[test]
fn input_rows_feed_extra_inputs_not_the_tree() {
    let s = sheet(
        HDR,
        &[
            &[("Input", "limit"), ("case 1", "10")],
            &[("Input", "mode"), ("FieldType", "str"), ("case 1", "fast")],
            &[("Input", "unset")],
            &[("Field1", "age"), ("FieldType", "int"), ("case 1", "1")],
        ],
    );
    let case = &compile_sheet(&s).unwrap()[0];
    assert_eq!(case.extra_inputs.get("limit"), Some(&Value::Int(10)));
    assert_eq!(case.extra_inputs.get("mode"), Some(&Value::from("fast")));
    assert_eq!(case.data.get_path("limit"), None);
    assert_eq!(case.data.get_path("age"), Some(&Value::Int(1)));
}

#[test]
fn inline_flow_literals_are_structured() {
    let s = sheet(
        HDR,
        &[&[("Field1", "user"), ("FieldType", "map"), ("case 1", "{name: ada, ids: [1, 2]}")]],
    );
    let case = &compile_sheet(&s).unwrap()[0];
    assert_eq!(case.data.get_path("user.name"), Some(&Value::from("ada")));
    assert_eq!(case.data.get_path("user.ids.1"), Some(&Value::Int(2)));
}

#[test]
fn not_exist_inside_flow_literal_is_extracted() {
    let s = sheet(
        HDR,
        &[&[("Field1", "user"), ("FieldType", "map"), ("case 1", "{name: not exist, id: 7}")]],
    );
    let case = &compile_sheet(&s).unwrap()[0];
    assert_eq!(case.should_not_exist, vec!["user.name".to_string()]);
    assert_eq!(case.data.get_path("user.id"), Some(&Value::Int(7)));
}

#[test]
fn same_path_last_row_wins() {
    let s = sheet(
        HDR,
        &[
            &[("Field1", "a"), ("FieldType", "str"), ("case 1", "one")],
            &[("Field1", "a"), ("FieldType", "str"), ("case 1", "two")],
        ],
    );
    let case = &compile_sheet(&s).unwrap()[0];
    assert_eq!(case.data.get_path("a"), Some(&Value::from("two")));
}

#[test]
fn each_case_column_compiles_independently() {
    let s = sheet(
        &["Field1", "FieldType", "FieldOutput", "ok", "missing"],
        &[&[("Field1", "name"), ("FieldType", "str"), ("ok", "ada"), ("missing", "not exist")]],
    );
    let cases = compile_sheet(&s).unwrap();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].title, "ok");
    assert_eq!(cases[0].data.get_path("name"), Some(&Value::from("ada")));
    assert!(cases[0].should_not_exist.is_empty());
    assert_eq!(cases[1].title, "missing");
    assert_eq!(cases[1].should_not_exist, vec!["name".to_string()]);
    assert_eq!(cases[1].data.get_path("name"), None);
}

#[test]
fn compilation_is_deterministic() {
    let s = sheet(
        HDR,
        &[
            &[("Field1", "user"), ("FieldType", "map")],
            &[("Field2", "name"), ("FieldType", "str"), ("case 1", "ada")],
            &[("Field1", "age"), ("FieldType", "int"), ("case 1", "3")],
        ],
    );
    assert_eq!(compile_sheet(&s).unwrap(), compile_sheet(&s).unwrap());
}

#[test]
fn reordering_independent_branches_keeps_their_content() {
    let forward = sheet(
        HDR,
        &[
            &[("Field1", "a"), ("FieldType", "map")],
            &[("Field2", "x"), ("FieldType", "int"), ("case 1", "1")],
            &[("Field1", "b"), ("FieldType", "map")],
            &[("Field2", "y"), ("FieldType", "int"), ("case 1", "2")],
        ],
    );
    let reversed = sheet(
        HDR,
        &[
            &[("Field1", "b"), ("FieldType", "map")],
            &[("Field2", "y"), ("FieldType", "int"), ("case 1", "2")],
            &[("Field1", "a"), ("FieldType", "map")],
            &[("Field2", "x"), ("FieldType", "int"), ("case 1", "1")],
        ],
    );
    for path in ["a.x", "b.y"] {
        assert_eq!(
            compile_sheet(&forward).unwrap()[0].data.get_path(path),
            compile_sheet(&reversed).unwrap()[0].data.get_path(path),
        );
    }
}

#[test]
fn missing_type_column_fails_the_sheet() {
    let s = sheet(&["Field1", "case 1"], &[&[("Field1", "a"), ("case 1", "1")]]);
    let err = compile_sheet(&s).unwrap_err();
    assert_eq!(err.kind, DdfErrorKind::MissingTypeColumn);
}

#[test]
fn missing_level_columns_fails_the_sheet() {
    let s = sheet(&["FieldType", "case 1"], &[&[("case 1", "1")]]);
    let err = compile_sheet(&s).unwrap_err();
    assert_eq!(err.kind, DdfErrorKind::MissingLevelColumns);
}

#[test]
fn unsupported_type_reports_spreadsheet_row() {
    let s = sheet(
        HDR,
        &[
            &[("Field1", "ok"), ("FieldType", "str"), ("case 1", "v")],
            &[("Field1", "bad"), ("FieldType", "blob"), ("case 1", "v")],
        ],
    );
    let err = compile_sheet(&s).unwrap_err();
    assert_eq!(err.kind, DdfErrorKind::UnsupportedType);
    assert_eq!(err.row, 3);
    assert!(err.to_string().contains("blob"));
}

#[test]
fn numeric_coercion_failure_aborts_every_case() {
    // The bad cell sits in the second case column; the whole sheet still
    // fails, first column included.
    let s = sheet(
        &["Field1", "FieldType", "good", "bad"],
        &[&[("Field1", "age"), ("FieldType", "int"), ("good", "1"), ("bad", "x")]],
    );
    let err = compile_sheet(&s).unwrap_err();
    assert_eq!(err.kind, DdfErrorKind::NumericCoercion);
    assert_eq!(err.row, 2);
}

#[test]
fn sheets_fail_independently() {
    let good = sheet(
        HDR,
        &[&[("Field1", "a"), ("FieldType", "int"), ("case 1", "1")]],
    );
    let mut bad = sheet(
        HDR,
        &[&[("Field1", "a"), ("FieldType", "blob"), ("case 1", "1")]],
    );
    bad.name = "broken".to_string();
    let outcomes = compile_sheets(&[good, bad]);
    assert_eq!(outcomes.len(), 2);
    assert!(outcomes[0].is_ok());
    assert!(!outcomes[1].is_ok());
    assert_eq!(outcomes[1].name, "broken");
}

#[test]
fn rows_without_a_path_are_skipped() {
    let s = sheet(
        HDR,
        &[
            &[("FieldType", "str"), ("case 1", "orphan")],
            &[("Field1", "keep"), ("FieldType", "str"), ("case 1", "v")],
        ],
    );
    let case = &compile_sheet(&s).unwrap()[0];
    assert_eq!(case.data.as_map().unwrap().len(), 1);
}

#[test]
fn empty_sheet_compiles_to_empty_cases() {
    let s = sheet(HDR, &[]);
    let cases = compile_sheet(&s).unwrap();
    assert_eq!(cases.len(), 1);
    assert!(matches!(&cases[0].data, Value::Map(m) if m.is_empty()));
    assert!(cases[0].should_not_exist.is_empty());
    assert!(cases[0].extra_inputs.is_empty());
}
