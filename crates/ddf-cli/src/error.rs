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

//! Structured error types for the DDF CLI.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for DDF CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// I/O operation failed (file read or write).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The error message.
        message: String,
    },

    /// Workbook reading failed.
    #[error("cannot read workbook: {0}")]
    Xlsx(#[from] ddf_xlsx::XlsxError),

    /// Table file reading failed.
    #[error("cannot read table file: {0}")]
    Json(#[from] ddf_json::JsonError),

    /// Output serialization failed.
    #[error("cannot serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The requested sheet is not in the file.
    #[error("sheet '{name}' not found (available: {available})")]
    SheetNotFound {
        /// The sheet that was requested.
        name: String,
        /// Comma-separated names present in the file.
        available: String,
    },

    /// At least one sheet failed to compile.
    #[error("{failed} of {total} sheet(s) failed to compile")]
    SheetsFailed {
        /// Number of failed sheets.
        failed: usize,
        /// Total number of sheets.
        total: usize,
    },
}

impl CliError {
    /// Wrap an I/O error with the path it happened on.
    pub fn io_error(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Convenience alias for `Result` with [`CliError`].
pub type Result<T> = std::result::Result<T, CliError>;
