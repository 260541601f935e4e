//! `show` specs
//!
//! The composed command reflects which wrapper tools are on PATH.

use crate::prelude::*;

#[test]
fn plain_launch_is_runner_and_target() {
    let project = Project::with_runner();
    project
        .pl()
        .args(&["show", "--game", "/games/foo.exe"])
        .passes()
        .stdout_has("umu-run /games/foo.exe\n")
        .stdout_has("profile: foo-")
        .stdout_lacks("skipped:");
}

#[test]
fn prefix_and_proton_selection_become_env() {
    let project = Project::with_runner();
    project
        .pl()
        .args(&[
            "show",
            "--game",
            "/games/foo.exe",
            "--prefix",
            "/pfx",
            "--proton-pattern",
            "GE-Proton*",
        ])
        .passes()
        .stdout_has("WINEPREFIX=/pfx UMU_PROTON_PATTERN=GE-Proton* umu-run /games/foo.exe");
}

#[test]
fn missing_wrappers_are_skipped_and_reported() {
    let project = Project::with_runner();
    project
        .pl()
        .args(&["show", "--game", "/games/foo.exe", "--gamescope", "--gamemode"])
        .passes()
        .stdout_has("umu-run /games/foo.exe\n")
        .stdout_has("skipped: gamescope (not found)")
        .stdout_has("skipped: gamemoderun (not found)");
}

#[test]
fn compositor_carries_feature_variables_as_arguments() {
    let project = Project::with_runner();
    project.tool("gamescope", PASSTHROUGH);
    project.tool("gamemoderun", PASSTHROUGH);
    project
        .pl()
        .args(&[
            "show", "--game", "/games/foo.exe", "--gamescope", "--gs-w", "1920", "--gs-h",
            "1080", "--gs-r", "60", "--gamemode", "--mango",
        ])
        .passes()
        .stdout_has(
            "gamescope -W 1920 -H 1080 -r 60 -- env MANGOHUD=1 gamemoderun umu-run /games/foo.exe\n",
        );
}

#[test]
fn without_compositor_feature_variables_go_to_the_process() {
    let project = Project::with_runner();
    project
        .pl()
        .args(&["show", "--game", "/games/foo.exe", "--mango"])
        .passes()
        .stdout_has("MANGOHUD=1 umu-run /games/foo.exe\n");
}

#[test]
fn memory_floor_wraps_outermost() {
    let project = Project::with_runner();
    project.tool("systemd-run", PASSTHROUGH);
    project
        .pl()
        .args(&[
            "show",
            "--game",
            "/games/foo.exe",
            "--memory-min",
            "--memory-min-value",
            "8G",
        ])
        .passes()
        .stdout_has("[MemMin:8G] systemd-run --user --scope -pMemoryMin=8G -- umu-run /games/foo.exe\n");
}

#[test]
fn launcher_and_extra_arguments() {
    let project = Project::with_runner();
    project
        .pl()
        .args(&[
            "show",
            "--game",
            "/games/foo.exe",
            "--launcher",
            "/games/Launcher.exe",
            "--args",
            "-windowed -dx11",
        ])
        .passes()
        .stdout_has("umu-run /games/Launcher.exe -windowed -dx11\n");
}

#[test]
fn json_report_lists_argv_and_skipped_tools() {
    let project = Project::with_runner();
    let result = project
        .pl()
        .args(&["show", "--game", "/games/foo.exe", "--gamemode", "-o", "json"])
        .passes();
    let report = result.json();
    assert_eq!(report["argv"], serde_json::json!(["umu-run", "/games/foo.exe"]));
    assert_eq!(report["skipped"], serde_json::json!(["gamemoderun"]));
    assert!(report["profile_key"].as_str().unwrap().starts_with("foo-"));
}
