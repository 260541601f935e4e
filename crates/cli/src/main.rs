// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! proton-launch - run Windows games through Proton with optional wrappers

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod commands;
mod config;
mod env;
mod exit_error;
mod launch;
mod logging;
mod output;
mod table;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{logs, run, show, tools};
use config::Settings;
use exit_error::{ExitError, EXIT_USAGE};
use output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "proton-launch",
    version,
    about = "Launch Windows games through Proton with gamescope, GameMode, MangoHud and frame generation"
)]
struct Cli {
    /// Output format
    #[arg(
        short = 'o',
        long = "output",
        value_enum,
        default_value_t,
        global = true
    )]
    output: OutputFormat,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch a game and supervise it until it exits
    Run(run::RunArgs),
    /// Print the command a launch would run, without running it
    Show(show::ShowArgs),
    /// Report which wrapper tools are installed
    Tools,
    /// List retained run logs, newest first
    Logs(logs::LogsArgs),
}

fn cli_command() -> clap::Command {
    Cli::command()
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        let code = e
            .downcast_ref::<ExitError>()
            .map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

/// Format an anyhow error, skipping the cause chain when the top-level
/// message already contains every cause.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.output;

    let Some(command) = cli.command else {
        cli_command().print_help()?;
        println!();
        return Ok(());
    };

    let settings = Settings::resolve().map_err(|e| ExitError::new(EXIT_USAGE, e.to_string()))?;

    match command {
        Commands::Run(args) => {
            let _guard = match logging::setup_logging(&settings.run.debug_log_path()) {
                Ok(guard) => Some(guard),
                Err(e) => {
                    eprintln!("warning: debug log unavailable: {}", e);
                    None
                }
            };
            run::handle(args, settings, format).await
        }
        Commands::Show(args) => show::handle(args, &settings, format),
        Commands::Tools => tools::handle(format),
        Commands::Logs(args) => logs::handle(args, &settings, format),
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
