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

//! DDF Command Line Interface

use clap::Parser;
use ddf_cli::cli::Commands;
use std::process::ExitCode;

/// DDF - spreadsheet-driven test fixture compiler
///
/// Compiles DDF workbooks into expected-response documents and
/// should-not-exist path lists, one case per override column.
///
/// # Examples
///
/// ```bash
/// # Compile every sheet of a workbook
/// ddf compile fixtures.xlsx --pretty
///
/// # Compile a single sheet to a file
/// ddf compile fixtures.xlsx --sheet login --output login.json
///
/// # List sheet names
/// ddf sheets fixtures.xlsx
/// ```
#[derive(Parser)]
#[command(name = "ddf")]
#[command(author, version, about = "DDF - spreadsheet-driven test fixture compiler", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
