// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::error::ErrorKind;
use clap::FromArgMatches;

use super::{cli_command, format_error, Cli, Commands};
use crate::output::OutputFormat;

fn parse(args: &[&str]) -> Cli {
    let matches = cli_command().try_get_matches_from(args).unwrap();
    Cli::from_arg_matches(&matches).unwrap()
}

#[test]
fn version_flag() {
    let err = cli_command()
        .try_get_matches_from(["proton-launch", "--version"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
}

#[test]
fn cli_definition_is_consistent() {
    cli_command().debug_assert();
}

#[test]
fn no_subcommand_parses() {
    assert!(parse(&["proton-launch"]).command.is_none());
}

#[test]
fn run_collects_launch_flags() {
    let cli = parse(&[
        "proton-launch", "run",
        "--game", "/games/foo.exe",
        "--gamescope", "--gs-w", "1920", "--gs-h", "1080", "--gs-r", "60",
        "--mango", "--logs",
    ]);
    let Some(Commands::Run(args)) = cli.command else {
        panic!("expected run");
    };
    assert!(args.logs);
    assert!(args.launch.gamescope && args.launch.mango);
    assert_eq!(args.launch.gs_w, "1920");
}

#[test]
fn output_flag_is_global() {
    let cli = parse(&["proton-launch", "tools", "-o", "json"]);
    assert_eq!(cli.output, OutputFormat::Json);
    assert!(matches!(cli.command, Some(Commands::Tools)));
}

#[test]
fn show_requires_game() {
    let err = cli_command()
        .try_get_matches_from(["proton-launch", "show", "--mango"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn logs_latest_flag() {
    let Some(Commands::Logs(args)) = parse(&["proton-launch", "logs", "--latest"]).command else {
        panic!("expected logs");
    };
    assert!(args.latest);
}

#[test]
fn unknown_subcommand_is_rejected() {
    let err = cli_command()
        .try_get_matches_from(["proton-launch", "launch"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
}

#[test]
fn format_error_drops_redundant_chain() {
    let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err = anyhow::Error::new(inner).context("failed to read config: no such file");
    assert_eq!(format_error(&err), "failed to read config: no such file");
}

#[test]
fn format_error_keeps_new_causes() {
    let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
    let err = anyhow::Error::new(inner).context("config unavailable");
    assert_eq!(
        format_error(&err),
        "config unavailable\n\nCaused by:\n    0: no such file"
    );
}
