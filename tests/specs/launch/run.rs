//! `run` specs
//!
//! A fake runner executes the game as a shell script so the whole launch
//! path (log file, banner, output forwarding, exit status) is exercised.

use crate::prelude::*;

#[test]
fn successful_run_logs_output_and_exits_zero() {
    let project = Project::with_runner();
    let game = project.game("foo.exe", "echo hello from game\necho oops >&2");

    project
        .pl()
        .args(&["run", "--game", game.to_str().unwrap()])
        .passes()
        .stdout_has("Launching foo\n")
        .stdout_has("Running (pid ")
        .stdout_has("foo exited normally after ");

    let log = project.latest_log();
    assert!(log.starts_with("--- EXECUTION START ---\n"), "{log}");
    assert!(log.contains("COMMAND: umu-run "), "{log}");
    assert!(log.contains("hello from game\n"), "{log}");
    assert!(log.contains("oops\n"), "{log}");
    assert!(log.ends_with("--- Process Exited ---\n"), "{log}");
}

#[test]
fn nonzero_exit_is_reported_with_code_one() {
    let project = Project::with_runner();
    let game = project.game("crash.exe", "exit 3");

    project
        .pl()
        .args(&["run", "--game", game.to_str().unwrap()])
        .exits_with(1)
        .stdout_has("crash exit status 3 after ");
}

#[test]
fn missing_runner_fails_to_start() {
    let project = Project::empty();
    let game = project.game("foo.exe", "exit 0");

    project
        .pl()
        .args(&["run", "--game", game.to_str().unwrap()])
        .exits_with(127)
        .stderr_has("Error: failed to start foo");

    let log = project.latest_log();
    assert!(log.contains("ERROR: "), "{log}");
}

#[test]
fn extra_arguments_reach_the_game() {
    let project = Project::with_runner();
    let game = project.game("args.exe", "echo \"argc=$# first=$1\"");

    project
        .pl()
        .args(&["run", "--game", game.to_str().unwrap(), "--args", "-windowed -dx11"])
        .passes();

    assert!(project.latest_log().contains("argc=2 first=-windowed\n"));
}

#[test]
fn feature_variables_reach_the_game() {
    let project = Project::with_runner();
    let game = project.game("env.exe", "echo \"hud=$MANGOHUD pfx=$WINEPREFIX\"");

    project
        .pl()
        .args(&[
            "run",
            "--game",
            game.to_str().unwrap(),
            "--mango",
            "--prefix",
            "/pfx",
        ])
        .passes();

    let log = project.latest_log();
    assert!(log.contains("hud=1 pfx=/pfx\n"), "{log}");
    assert!(log.contains("[+] MangoHud"), "{log}");
}

#[test]
fn available_wrapper_runs_and_is_listed() {
    let project = Project::with_runner();
    project.tool("gamemoderun", "#!/bin/sh\necho wrapped-by-gamemode\nexec \"$@\"\n");
    let game = project.game("foo.exe", "echo in game");

    project
        .pl()
        .args(&["run", "--game", game.to_str().unwrap(), "--gamemode"])
        .passes();

    let log = project.latest_log();
    assert!(log.contains("COMMAND: gamemoderun umu-run "), "{log}");
    assert!(log.contains("[+] GameMode"), "{log}");
    assert!(log.contains("wrapped-by-gamemode\nin game\n"), "{log}");
}

#[test]
fn missing_wrapper_is_listed_as_skipped() {
    let project = Project::with_runner();
    let game = project.game("foo.exe", "exit 0");

    project
        .pl()
        .args(&["run", "--game", game.to_str().unwrap(), "--gamescope"])
        .passes();

    let log = project.latest_log();
    assert!(log.contains("SKIPPED (tool not found):\n  [-] gamescope\n"), "{log}");
}

#[test]
fn json_output_streams_lifecycle_events() {
    let project = Project::with_runner();
    let game = project.game("foo.exe", "exit 0");

    let result = project
        .pl()
        .args(&["run", "--game", game.to_str().unwrap(), "-o", "json"])
        .passes();

    let types: Vec<String> = result
        .stdout()
        .lines()
        .map(|l| {
            let v: serde_json::Value = serde_json::from_str(l).unwrap();
            v["type"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(types, vec!["run:starting", "run:running", "run:exited"]);
}

#[test]
fn retention_keeps_configured_number_of_logs() {
    let project = Project::with_runner();
    project.file("config.toml", "[log]\nretain = 2\n");
    let game = project.game("foo.exe", "exit 0");

    for _ in 0..4 {
        project
            .pl()
            .args(&["run", "--game", game.to_str().unwrap()])
            .passes();
    }

    // retained logs plus the one written by the latest run
    assert_eq!(project.log_count(), 3);
}
