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

//! Field type resolution.
//!
//! A row's `FieldType` cell declares the value kind for that field. Tokens
//! are matched case-insensitively and a handful of spreadsheet-friendly
//! aliases map onto the closed kind set.

use crate::error::DdfError;
use crate::value::Value;
use std::fmt;

/// The closed set of value kinds a `FieldType` cell can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldKind {
    /// Nested mapping.
    Map,
    /// Sequence.
    Seq,
    /// Opaque text.
    Str,
    /// Literal null.
    Null,
    /// Boolean.
    Bool,
    /// Integer.
    Int,
    /// Floating-point number.
    Float,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map => write!(f, "map"),
            Self::Seq => write!(f, "seq"),
            Self::Str => write!(f, "str"),
            Self::Null => write!(f, "null"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
        }
    }
}

impl FieldKind {
    /// The canonical empty value for kinds that have one.
    ///
    /// Only `str`, `seq` and `map` materialize a default when a required
    /// field carries no override; the other kinds stay null.
    pub fn empty_value(self) -> Option<Value> {
        match self {
            Self::Str => Some(Value::String(String::new())),
            Self::Seq => Some(Value::Seq(Vec::new())),
            Self::Map => Some(Value::Map(Default::default())),
            _ => None,
        }
    }
}

/// Resolve a raw `FieldType` cell into a kind.
///
/// The token is trimmed and lowercased, then mapped through the alias
/// table (`list` -> `seq`, `string`/`date`/`datetime` -> `str`,
/// `integer`/`number`/`short` -> `int`, `boolean` -> `bool`). An absent
/// cell resolves to `None`; any other unrecognized token is an error for
/// the given spreadsheet row.
pub fn resolve_kind(token: Option<&str>, row: usize) -> Result<Option<FieldKind>, DdfError> {
    let token = match token {
        Some(t) => t.trim(),
        None => return Ok(None),
    };
    if token.is_empty() {
        return Ok(None);
    }
    let lowered = token.to_lowercase();
    let kind = match lowered.as_str() {
        "map" => FieldKind::Map,
        "seq" | "list" => FieldKind::Seq,
        "str" | "string" | "date" | "datetime" => FieldKind::Str,
        "null" => FieldKind::Null,
        "bool" | "boolean" => FieldKind::Bool,
        "int" | "integer" | "number" | "short" => FieldKind::Int,
        "float" => FieldKind::Float,
        _ => return Err(DdfError::unsupported_type(row, &lowered)),
    };
    Ok(Some(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_canonical_kinds() {
        for (token, kind) in [
            ("map", FieldKind::Map),
            ("seq", FieldKind::Seq),
            ("str", FieldKind::Str),
            ("null", FieldKind::Null),
            ("bool", FieldKind::Bool),
            ("int", FieldKind::Int),
            ("float", FieldKind::Float),
        ] {
            assert_eq!(resolve_kind(Some(token), 2).unwrap(), Some(kind));
        }
    }

    #[test]
    fn resolves_aliases() {
        assert_eq!(resolve_kind(Some("list"), 2).unwrap(), Some(FieldKind::Seq));
        assert_eq!(resolve_kind(Some("string"), 2).unwrap(), Some(FieldKind::Str));
        assert_eq!(resolve_kind(Some("date"), 2).unwrap(), Some(FieldKind::Str));
        assert_eq!(resolve_kind(Some("datetime"), 2).unwrap(), Some(FieldKind::Str));
        assert_eq!(resolve_kind(Some("integer"), 2).unwrap(), Some(FieldKind::Int));
        assert_eq!(resolve_kind(Some("number"), 2).unwrap(), Some(FieldKind::Int));
        assert_eq!(resolve_kind(Some("short"), 2).unwrap(), Some(FieldKind::Int));
        assert_eq!(resolve_kind(Some("boolean"), 2).unwrap(), Some(FieldKind::Bool));
    }

    #[test]
    fn resolution_is_case_insensitive() {
        assert_eq!(resolve_kind(Some("Integer"), 2).unwrap(), Some(FieldKind::Int));
        assert_eq!(resolve_kind(Some("LIST"), 2).unwrap(), Some(FieldKind::Seq));
    }

    #[test]
    fn absent_and_blank_resolve_to_none() {
        assert_eq!(resolve_kind(None, 2).unwrap(), None);
        assert_eq!(resolve_kind(Some("   "), 2).unwrap(), None);
    }

    #[test]
    fn unknown_token_is_an_error() {
        let err = resolve_kind(Some("blob"), 9).unwrap_err();
        assert_eq!(err.kind, crate::error::DdfErrorKind::UnsupportedType);
        assert_eq!(err.row, 9);
    }

    #[test]
    fn empty_values_cover_container_kinds_only() {
        assert_eq!(
            FieldKind::Str.empty_value(),
            Some(Value::String(String::new()))
        );
        assert_eq!(FieldKind::Seq.empty_value(), Some(Value::Seq(Vec::new())));
        assert!(matches!(
            FieldKind::Map.empty_value(),
            Some(Value::Map(m)) if m.is_empty()
        ));
        assert_eq!(FieldKind::Int.empty_value(), None);
        assert_eq!(FieldKind::Null.empty_value(), None);
    }
}
