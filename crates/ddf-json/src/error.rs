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

//! Error types for JSON conversion.

use thiserror::Error;

/// JSON conversion error types.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The table file is not valid JSON or misses required fields.
    #[error("invalid table file: {0}")]
    Table(#[from] serde_json::Error),

    /// I/O error while reading a table file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for `Result` with [`JsonError`].
pub type Result<T> = std::result::Result<T, JsonError>;
