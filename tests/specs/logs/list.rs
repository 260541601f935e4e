//! `logs` specs

use crate::prelude::*;

#[test]
fn no_logs_yet() {
    let project = Project::with_runner();
    project.pl().args(&["logs"]).passes().stdout_has("No logs in ");
}

#[test]
fn latest_without_logs_fails() {
    let project = Project::with_runner();
    project
        .pl()
        .args(&["logs", "--latest"])
        .exits_with(1)
        .stderr_has("Error: no logs in ");
}

#[test]
fn latest_points_at_the_last_run() {
    let project = Project::with_runner();
    let game = project.game("foo.exe", "echo marker-line");
    project
        .pl()
        .args(&["run", "--game", game.to_str().unwrap()])
        .passes();

    let result = project.pl().args(&["logs", "--latest"]).passes();
    let path = result.stdout().trim().to_string();
    assert!(path.contains("/logs/foo.exe-"), "{path}");
    assert!(std::fs::read_to_string(path).unwrap().contains("marker-line\n"));
}

#[test]
fn listing_shows_a_row_per_log() {
    let project = Project::with_runner();
    let game = project.game("foo.exe", "exit 0");
    for _ in 0..2 {
        project
            .pl()
            .args(&["run", "--game", game.to_str().unwrap()])
            .passes();
    }

    let result = project.pl().args(&["logs"]).passes();
    let stdout = result.stdout();
    let mut lines = stdout.lines();
    assert!(lines.next().unwrap().starts_with("MODIFIED"));
    assert_eq!(lines.filter(|l| l.contains("foo.exe-")).count(), 2);

    let json = project.pl().args(&["logs", "-o", "json"]).passes().json();
    assert_eq!(json.as_array().unwrap().len(), 2);
}
