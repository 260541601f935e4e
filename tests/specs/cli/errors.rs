//! CLI error handling specs
//!
//! Usage problems exit with code 2 before anything is launched.

use crate::prelude::*;

#[test]
fn run_without_game_is_a_usage_error() {
    let project = Project::with_runner();
    project
        .pl()
        .args(&["run"])
        .exits_with(2)
        .stderr_has("--game");
    assert_eq!(project.log_count(), 0);
}

#[test]
fn empty_game_is_a_usage_error() {
    let project = Project::with_runner();
    project.pl().args(&["run", "--game", ""]).exits_with(2);
    assert_eq!(project.log_count(), 0);
}

#[test]
fn multiplier_out_of_range_is_rejected() {
    let project = Project::with_runner();
    project
        .pl()
        .args(&["show", "--game", "/g/foo.exe", "--lsfg", "--lsfg-mult", "1"])
        .exits_with(2);
}

#[test]
fn malformed_memory_size_is_rejected() {
    let project = Project::with_runner();
    project
        .pl()
        .args(&[
            "show",
            "--game",
            "/g/foo.exe",
            "--memory-min",
            "--memory-min-value",
            "lots",
        ])
        .exits_with(2);
}

#[test]
fn invalid_config_file_is_reported() {
    let project = Project::with_runner();
    project.file("config.toml", "[log]\nretain = \"many\"\n");
    project
        .pl()
        .args(&["show", "--game", "/g/foo.exe"])
        .exits_with(2)
        .stderr_has("Error: invalid config");
}

#[test]
fn unknown_config_key_is_reported() {
    let project = Project::with_runner();
    project.file("config.toml", "colour = true\n");
    project
        .pl()
        .args(&["tools"])
        .exits_with(2)
        .stderr_has("colour");
}
