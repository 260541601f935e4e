// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `proton-launch tools` - which wrapper tools are installed

use anyhow::Result;
use pl_adapters::{PathProbe, ToolProbe};
use pl_engine::Composer;
use serde::Serialize;
use std::path::PathBuf;

use crate::output::{print_json, OutputFormat};
use crate::table::{Column, Table};

#[derive(Debug, Serialize, PartialEq)]
pub struct ToolReport {
    pub tool: &'static str,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

pub fn collect<P: ToolProbe>(composer: &Composer<P>) -> Vec<ToolReport> {
    composer
        .tool_status()
        .into_iter()
        .map(|(tool, available)| ToolReport {
            tool: tool.binary(),
            available,
            path: composer.probe().locate(tool.binary()),
        })
        .collect()
}

pub fn render(reports: &[ToolReport]) -> Table {
    let mut table = Table::new(vec![Column::left("TOOL"), Column::left("STATUS"), Column::left("PATH")]);
    for report in reports {
        table.row(vec![
            report.tool.to_string(),
            if report.available { "found" } else { "missing" }.to_string(),
            report
                .path
                .as_ref()
                .map_or_else(|| "-".to_string(), |p| p.display().to_string()),
        ]);
    }
    table
}

pub fn handle(format: OutputFormat) -> Result<()> {
    let reports = collect(&Composer::new(PathProbe::from_env()));
    match format {
        OutputFormat::Text => render(&reports).render(&mut std::io::stdout()),
        OutputFormat::Json => print_json(&reports)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "tools_tests.rs"]
mod tests;
