// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `proton-launch logs` - list retained run logs, newest first

use anyhow::Result;
use chrono::{DateTime, Local};
use clap::Args;
use pl_engine::{list_logs, LogEntry};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::exit_error::{ExitError, EXIT_PROGRAM_FAILED};
use crate::output::{format_size, print_json, OutputFormat};
use crate::table::{Column, Table};

#[derive(Args)]
pub struct LogsArgs {
    /// Print only the newest log path
    #[arg(long)]
    pub latest: bool,
}

#[derive(Debug, Serialize)]
struct LogRow {
    path: PathBuf,
    modified: DateTime<Local>,
    size: u64,
}

impl From<LogEntry> for LogRow {
    fn from(entry: LogEntry) -> Self {
        Self {
            path: entry.path,
            modified: entry.modified.into(),
            size: entry.size,
        }
    }
}

pub fn handle(args: LogsArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let dir = settings.run.logs_dir();
    let rows: Vec<LogRow> = list_logs(&dir)?.into_iter().map(LogRow::from).collect();

    if args.latest {
        let Some(newest) = rows.first() else {
            return Err(no_logs(&dir).into());
        };
        match format {
            OutputFormat::Text => println!("{}", newest.path.display()),
            OutputFormat::Json => print_json(newest)?,
        }
        return Ok(());
    }

    match format {
        OutputFormat::Text if rows.is_empty() => println!("No logs in {}", dir.display()),
        OutputFormat::Text => render(&rows).render(&mut std::io::stdout()),
        OutputFormat::Json => print_json(&rows)?,
    }
    Ok(())
}

fn no_logs(dir: &Path) -> ExitError {
    ExitError::new(EXIT_PROGRAM_FAILED, format!("no logs in {}", dir.display()))
}

fn render(rows: &[LogRow]) -> Table {
    let mut table = Table::new(vec![
        Column::left("MODIFIED"),
        Column::right("SIZE"),
        Column::left("PATH"),
    ]);
    for row in rows {
        table.row(vec![
            row.modified.format("%Y-%m-%d %H:%M:%S").to_string(),
            format_size(row.size),
            row.path.display().to_string(),
        ]);
    }
    table
}

#[cfg(test)]
#[path = "logs_tests.rs"]
mod tests;
