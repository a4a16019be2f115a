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

//! CLI command definitions and execution.

use crate::error::{CliError, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use ddf_core::{compile_sheet, Sheet, SheetOutcome};
use ddf_json::outcomes_to_json;
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Compile a workbook or table file into test-case JSON
    Compile(CompileArgs),
    /// List the sheet names in a workbook or table file
    Sheets(SheetsArgs),
}

/// Arguments for the `compile` command.
#[derive(Args)]
pub struct CompileArgs {
    /// Workbook (.xlsx/.xls) or table file (.json)
    pub file: PathBuf,

    /// Compile only the named sheet
    #[arg(long)]
    pub sheet: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Compile sheets one at a time instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `sheets` command.
#[derive(Args)]
pub struct SheetsArgs {
    /// Workbook (.xlsx/.xls) or table file (.json)
    pub file: PathBuf,
}

impl Commands {
    /// Execute the parsed command.
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Compile(args) => compile(args),
            Commands::Sheets(args) => sheets(args),
        }
    }
}

/// Load every sheet of the input file, by extension.
fn load_sheets(file: &Path) -> Result<Vec<Sheet>> {
    let is_table = file
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_table {
        Ok(vec![ddf_json::read_table(file)?])
    } else {
        Ok(ddf_xlsx::read_workbook(file)?)
    }
}

fn select_sheets(mut sheets: Vec<Sheet>, wanted: Option<&str>) -> Result<Vec<Sheet>> {
    let Some(name) = wanted else {
        return Ok(sheets);
    };
    match sheets.iter().position(|s| s.name == name) {
        Some(index) => Ok(vec![sheets.swap_remove(index)]),
        None => Err(CliError::SheetNotFound {
            name: name.to_string(),
            available: sheets
                .iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        }),
    }
}

fn compile(args: &CompileArgs) -> Result<()> {
    let sheets = select_sheets(load_sheets(&args.file)?, args.sheet.as_deref())?;

    // Sheets are independent compilation units; rayon fans them out
    // without any shared state to guard.
    let outcomes: Vec<SheetOutcome> = if args.sequential {
        sheets.iter().map(outcome).collect()
    } else {
        sheets.par_iter().map(outcome).collect()
    };

    for failed in outcomes.iter().filter(|o| !o.is_ok()) {
        if let Err(error) = &failed.result {
            eprintln!(
                "{} sheet \"{}\": {}",
                "error:".red().bold(),
                failed.name,
                error
            );
        }
    }

    let json = outcomes_to_json(&outcomes);
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&json)?
    } else {
        serde_json::to_string(&json)?
    };

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered).map_err(|e| CliError::io_error(path, e))?;
        }
        None => println!("{}", rendered),
    }

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    if failed > 0 {
        return Err(CliError::SheetsFailed {
            failed,
            total: outcomes.len(),
        });
    }
    Ok(())
}

fn outcome(sheet: &Sheet) -> SheetOutcome {
    SheetOutcome {
        name: sheet.name.clone(),
        result: compile_sheet(sheet),
    }
}

fn sheets(args: &SheetsArgs) -> Result<()> {
    for sheet in load_sheets(&args.file)? {
        println!("{}", sheet.name);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_sheets_finds_by_name() {
        let sheets = vec![Sheet::new("a", vec![]), Sheet::new("b", vec![])];
        let selected = select_sheets(sheets, Some("b")).unwrap();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "b");
    }

    #[test]
    fn select_sheets_reports_available_names() {
        let sheets = vec![Sheet::new("a", vec![]), Sheet::new("b", vec![])];
        let err = select_sheets(sheets, Some("c")).unwrap_err();
        assert!(err.to_string().contains("a, b"));
    }

    #[test]
    fn select_sheets_without_filter_keeps_all() {
        let sheets = vec![Sheet::new("a", vec![]), Sheet::new("b", vec![])];
        assert_eq!(select_sheets(sheets, None).unwrap().len(), 2);
    }
}
