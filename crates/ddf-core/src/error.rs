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

//! Error types for sheet compilation.

use std::fmt;
use thiserror::Error;

/// The kind of error that occurred while compiling a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DdfErrorKind {
    /// Sheet header has no `FieldType` column.
    MissingTypeColumn,
    /// Sheet header has no `Field1` column.
    MissingLevelColumns,
    /// A `FieldType` cell is not a recognized type token.
    UnsupportedType,
    /// An `int`/`float`-typed cell could not be parsed as a number.
    NumericCoercion,
    /// A typed cell holds a malformed structured literal.
    Literal,
}

impl fmt::Display for DdfErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTypeColumn => write!(f, "MissingTypeColumnError"),
            Self::MissingLevelColumns => write!(f, "MissingLevelColumnsError"),
            Self::UnsupportedType => write!(f, "UnsupportedTypeError"),
            Self::NumericCoercion => write!(f, "NumericCoercionError"),
            Self::Literal => write!(f, "LiteralError"),
        }
    }
}

/// An error captured for a failed sheet.
///
/// Row numbers count spreadsheet rows, so the first data row below the
/// header is row 2 — the number a tester needs to locate the offending
/// cell in the authoring tool. Header-level errors point at row 1.
#[derive(Debug, Clone, Error)]
#[error("{kind} at row {row}: {message}")]
pub struct DdfError {
    /// The kind of error.
    pub kind: DdfErrorKind,
    /// Human-readable error message, including the offending token and
    /// the case column where relevant.
    pub message: String,
    /// Spreadsheet row number (1-based, header included).
    pub row: usize,
}

impl DdfError {
    /// Create a new error.
    pub fn new(kind: DdfErrorKind, message: impl Into<String>, row: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            row,
        }
    }

    /// Sheet lacks a `FieldType` header.
    pub fn missing_type_column() -> Self {
        Self::new(DdfErrorKind::MissingTypeColumn, "no FieldType column found", 1)
    }

    /// Sheet lacks a `Field1` header.
    pub fn missing_level_columns() -> Self {
        Self::new(DdfErrorKind::MissingLevelColumns, "no Field1 column found", 1)
    }

    /// A row declared a type token outside the supported set.
    pub fn unsupported_type(row: usize, token: &str) -> Self {
        Self::new(
            DdfErrorKind::UnsupportedType,
            format!("unsupported type: \"{}\"", token),
            row,
        )
    }

    /// A numeric-typed cell did not parse as a number.
    pub fn numeric_coercion(row: usize, column: &str, value: &str) -> Self {
        Self::new(
            DdfErrorKind::NumericCoercion,
            format!("cannot parse \"{}\" as a number in column '{}'", value, column),
            row,
        )
    }

    /// A typed cell held a malformed structured literal.
    pub fn literal(row: usize, column: &str, message: impl Into<String>) -> Self {
        Self::new(
            DdfErrorKind::Literal,
            format!("{} in column '{}'", message.into(), column),
            row,
        )
    }
}

/// Convenience alias for results carrying a [`DdfError`].
pub type Result<T> = std::result::Result<T, DdfError>;
