//! `tools` specs

use crate::prelude::*;

#[test]
fn reports_found_and_missing_tools() {
    let project = Project::with_runner();
    project.tool("gamemoderun", PASSTHROUGH);
    let result = project.pl().args(&["tools"]).passes();
    let stdout = result.stdout();

    assert!(stdout.starts_with("TOOL"), "missing header: {stdout}");
    let line = |tool: &str| {
        stdout
            .lines()
            .find(|l| l.starts_with(tool))
            .unwrap_or_else(|| panic!("no row for {tool}: {stdout}"))
            .to_string()
    };
    assert!(line("umu-run").contains("found"));
    assert!(line("gamemoderun").contains("found"));
    assert!(line("gamescope").contains("missing"));
}

#[test]
fn json_lists_every_tool() {
    let project = Project::with_runner();
    let result = project.pl().args(&["tools", "-o", "json"]).passes();
    let tools = result.json();
    let names: Vec<&str> = tools
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["tool"].as_str().unwrap())
        .collect();
    for expected in ["gamescope", "gamemoderun", "mangohud", "systemd-run", "umu-run"] {
        assert!(names.contains(&expected), "{expected} not in {names:?}");
    }
    let runner = tools
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["tool"] == "umu-run")
        .unwrap();
    assert_eq!(runner["available"], true);
    assert!(runner["path"].as_str().unwrap().ends_with("bin/umu-run"));
}
