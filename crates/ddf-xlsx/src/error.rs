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

//! Error types for workbook reading.

use thiserror::Error;

/// Workbook reading error types.
#[derive(Debug, Error)]
pub enum XlsxError {
    /// I/O error while opening or reading the workbook.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the underlying workbook parser.
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),
}

/// Convenience alias for `Result` with [`XlsxError`].
pub type Result<T> = std::result::Result<T, XlsxError>;
