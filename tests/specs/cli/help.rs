//! CLI help output specs
//!
//! Verify help text displays for all commands.

use crate::prelude::*;

#[test]
fn no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("run")
        .stdout_has("show")
        .stdout_has("tools")
        .stdout_has("logs");
}

#[test]
fn run_help_lists_launch_flags() {
    cli()
        .args(&["run", "--help"])
        .passes()
        .stdout_has("--game")
        .stdout_has("--gamescope")
        .stdout_has("--lsfg-mult")
        .stdout_has("--memory-min-value")
        .stdout_has("--logs");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
