// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use pl_adapters::FakeToolProbe;
use pl_core::{MemorySize, Resolution};

fn compose(opts: &LaunchOptions, tools: &[&str]) -> ComposedCommand {
    Composer::with_inherited_env(FakeToolProbe::with_tools(tools), EnvSet::new()).compose(opts)
}

#[test]
fn report_lists_applied_and_skipped_wrappers() {
    let opts = LaunchOptions {
        mangohud: true,
        gamescope: Some(Resolution {
            width: Some(1280),
            height: Some(800),
            refresh: None,
        }),
        memory_floor: Some("4G".parse::<MemorySize>().unwrap()),
        ..LaunchOptions::new("/games/foo.exe")
    };
    let cmd = compose(&opts, &["gamescope"]);
    let report = ShowReport::new(&opts, &cmd);

    assert_eq!(report.applied, vec!["gamescope"]);
    assert_eq!(report.skipped, vec!["systemd-run"]);
    assert_eq!(
        report.display,
        "gamescope -W 1280 -H 800 -- env MANGOHUD=1 umu-run /games/foo.exe"
    );
    assert_eq!(report.profile_key, opts.profile_key());
}

#[test]
fn report_serializes_overrides_only() {
    let opts = LaunchOptions {
        prefix: Some("/pfx".into()),
        ..LaunchOptions::new("/games/foo.exe")
    };
    let mut inherited = EnvSet::new();
    inherited.set("HOME", "/home/pat");
    let cmd = Composer::with_inherited_env(FakeToolProbe::new(), inherited).compose(&opts);

    let json = serde_json::to_value(ShowReport::new(&opts, &cmd)).unwrap();
    assert_eq!(json["env"], serde_json::json!({ "WINEPREFIX": "/pfx" }));
    assert_eq!(json["argv"], serde_json::json!(["umu-run", "/games/foo.exe"]));
    assert!(json["profile_key"].as_str().unwrap().starts_with("foo-"));
}
