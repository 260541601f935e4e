// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `proton-launch show` - print the composed command without running it

use anyhow::Result;
use clap::Args;
use pl_adapters::{PathProbe, ToolProbe};
use pl_core::{ComposedCommand, EnvSet, LaunchOptions};
use pl_engine::Composer;
use serde::Serialize;

use crate::config::Settings;
use crate::launch::LaunchArgs;
use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub launch: LaunchArgs,
}

#[derive(Debug, Serialize)]
pub struct ShowReport<'a> {
    pub display: String,
    pub argv: &'a [String],
    pub env: &'a EnvSet,
    pub applied: Vec<&'static str>,
    pub skipped: Vec<&'static str>,
    pub profile_key: String,
}

impl<'a> ShowReport<'a> {
    pub fn new(opts: &LaunchOptions, cmd: &'a ComposedCommand) -> Self {
        Self {
            display: cmd.display_line(),
            argv: cmd.argv(),
            env: cmd.overrides(),
            applied: cmd.applied().iter().map(|w| w.tool().binary()).collect(),
            skipped: cmd.skipped().iter().map(|w| w.tool().binary()).collect(),
            profile_key: opts.profile_key(),
        }
    }
}

pub fn handle(args: ShowArgs, settings: &Settings, format: OutputFormat) -> Result<()> {
    let opts = super::launch_options(&args.launch, &settings.run.lsfg_layer_dir())?;
    show(&opts, PathProbe::from_env(), format)
}

fn show<P: ToolProbe>(opts: &LaunchOptions, probe: P, format: OutputFormat) -> Result<()> {
    let cmd = Composer::new(probe).compose(opts);
    let report = ShowReport::new(opts, &cmd);

    match format {
        OutputFormat::Text => {
            println!("{}", report.display);
            println!("profile: {}", report.profile_key);
            for tool in &report.skipped {
                println!("skipped: {} (not found)", tool);
            }
        }
        OutputFormat::Json => print_json(&report)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
