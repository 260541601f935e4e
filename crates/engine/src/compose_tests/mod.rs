// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Composer tests

mod properties;
mod scenarios;

use super::*;
use pl_adapters::FakeToolProbe;
use pl_core::{FrameGenOptions, MemorySize};
use std::path::PathBuf;

const ALL_TOOLS: [&str; 5] = ["gamescope", "gamemoderun", "mangohud", "systemd-run", "umu-run"];

fn inherited() -> EnvSet {
    [("PATH", "/usr/bin:/bin"), ("HOME", "/home/player")]
        .into_iter()
        .collect()
}

fn composer(tools: &[&str]) -> Composer<FakeToolProbe> {
    Composer::with_inherited_env(FakeToolProbe::with_tools(tools), inherited())
}

fn game() -> LaunchOptions {
    LaunchOptions::new("/games/foo.exe")
}

fn tokens(cmd: &ComposedCommand) -> Vec<&str> {
    cmd.argv().iter().map(String::as_str).collect()
}

fn resolution(w: u32, h: u32, r: u32) -> Resolution {
    Resolution {
        width: Some(w),
        height: Some(h),
        refresh: Some(r),
    }
}

fn gib(n: u64) -> MemorySize {
    MemorySize::new(n, pl_core::MemoryUnit::Gibi).unwrap()
}

#[test]
fn bare_launch_is_runner_and_target() {
    let cmd = composer(&ALL_TOOLS).compose(&game());
    assert_eq!(tokens(&cmd), vec!["umu-run", "/games/foo.exe"]);
    assert!(cmd.applied().is_empty());
    assert!(cmd.skipped().is_empty());
}

#[test]
fn base_env_sets_prefix_and_proton_selection() {
    let opts = LaunchOptions {
        prefix: Some(PathBuf::from("/pfx/foo")),
        proton_pattern: Some("GE-Proton*".to_string()),
        proton_path: Some(PathBuf::from("/proton/GE-Proton9-20")),
        ..game()
    };
    let cmd = composer(&ALL_TOOLS).compose(&opts);

    assert_eq!(
        cmd.overrides().to_assignments(),
        vec![
            "WINEPREFIX=/pfx/foo",
            "UMU_PROTON_PATTERN=GE-Proton*",
            "PROTONPATH=/proton/GE-Proton9-20",
        ]
    );
    assert_eq!(cmd.env().get("WINEPREFIX"), Some("/pfx/foo"));
    assert_eq!(cmd.env().get("HOME"), Some("/home/player"));
}

#[test]
fn empty_base_values_are_omitted() {
    let opts = LaunchOptions {
        prefix: Some(PathBuf::new()),
        proton_pattern: Some(String::new()),
        proton_path: None,
        ..game()
    };
    let cmd = composer(&ALL_TOOLS).compose(&opts);
    assert!(cmd.overrides().is_empty());
}

#[test]
fn overrides_replace_inherited_values() {
    let inherited: EnvSet = [("WINEPREFIX", "/stale"), ("MANGOHUD", "0")].into_iter().collect();
    let composer = Composer::with_inherited_env(FakeToolProbe::new(), inherited);
    let opts = LaunchOptions {
        prefix: Some(PathBuf::from("/pfx")),
        mangohud: true,
        ..game()
    };
    let cmd = composer.compose(&opts);
    assert_eq!(cmd.env().get("WINEPREFIX"), Some("/pfx"));
    assert_eq!(cmd.env().get("MANGOHUD"), Some("1"));
}

#[test]
fn launcher_replaces_game_as_target() {
    let opts = LaunchOptions {
        launcher: Some(PathBuf::from("/games/Launcher.exe")),
        ..game()
    };
    let cmd = composer(&ALL_TOOLS).compose(&opts);
    assert_eq!(tokens(&cmd), vec!["umu-run", "/games/Launcher.exe"]);
}

#[test]
fn extra_args_follow_target_in_order() {
    let opts = LaunchOptions {
        custom_args: "-windowed  -skipintro".to_string(),
        ..game()
    };
    let cmd = composer(&ALL_TOOLS).compose(&opts);
    assert_eq!(
        tokens(&cmd),
        vec!["umu-run", "/games/foo.exe", "-windowed", "-skipintro"]
    );
}

#[test]
fn gamescope_omits_unset_geometry_flags() {
    let opts = LaunchOptions {
        gamescope: Some(Resolution {
            width: Some(2560),
            height: None,
            refresh: Some(144),
        }),
        ..game()
    };
    let cmd = composer(&ALL_TOOLS).compose(&opts);
    assert_eq!(
        tokens(&cmd),
        vec!["gamescope", "-W", "2560", "-r", "144", "--", "env", "umu-run", "/games/foo.exe"]
    );
}

#[test]
fn gamemode_sits_between_compositor_and_runner() {
    let opts = LaunchOptions {
        gamescope: Some(resolution(1280, 800, 60)),
        gamemode: true,
        mangohud: true,
        ..game()
    };
    let cmd = composer(&ALL_TOOLS).compose(&opts);
    assert_eq!(
        tokens(&cmd),
        vec![
            "gamescope", "-W", "1280", "-H", "800", "-r", "60", "--", "env", "MANGOHUD=1",
            "gamemoderun", "umu-run", "/games/foo.exe",
        ]
    );
    assert_eq!(cmd.applied(), &[Wrapper::Gamescope, Wrapper::GameMode]);
}

#[test]
fn gamemode_without_compositor_prefixes_runner() {
    let opts = LaunchOptions {
        gamemode: true,
        ..game()
    };
    let cmd = composer(&ALL_TOOLS).compose(&opts);
    assert_eq!(tokens(&cmd), vec!["gamemoderun", "umu-run", "/games/foo.exe"]);
}

#[test]
fn missing_tools_are_skipped_silently() {
    let opts = LaunchOptions {
        gamescope: Some(resolution(1920, 1080, 60)),
        gamemode: true,
        mangohud: true,
        memory_floor: Some(gib(4)),
        ..game()
    };
    let cmd = composer(&["umu-run"]).compose(&opts);

    assert_eq!(tokens(&cmd), vec!["umu-run", "/games/foo.exe"]);
    assert!(cmd.applied().is_empty());
    assert_eq!(
        cmd.skipped(),
        &[Wrapper::Gamescope, Wrapper::GameMode, Wrapper::MemoryFloor]
    );
    // Features fall back to the process environment
    assert_eq!(cmd.env().get("MANGOHUD"), Some("1"));
}

#[test]
fn memory_floor_is_outermost() {
    let opts = LaunchOptions {
        gamescope: Some(resolution(1920, 1080, 60)),
        gamemode: true,
        memory_floor: Some(gib(8)),
        ..game()
    };
    let cmd = composer(&ALL_TOOLS).compose(&opts);
    assert_eq!(&tokens(&cmd)[..6], &["systemd-run", "--user", "--scope", "-pMemoryMin=8G", "--", "gamescope"]);
    assert_eq!(
        cmd.applied(),
        &[Wrapper::MemoryFloor, Wrapper::Gamescope, Wrapper::GameMode]
    );
    assert!(cmd.display_line().starts_with("[MemMin:8G] "));
}

#[test]
fn frame_gen_variables_follow_placement() {
    let frame_gen = Some(FrameGenOptions {
        multiplier: "4".parse().unwrap(),
        ..FrameGenOptions::default()
    });
    let wrapped = LaunchOptions {
        gamescope: Some(resolution(1920, 1080, 60)),
        frame_gen: frame_gen.clone(),
        ..game()
    };
    let cmd = composer(&ALL_TOOLS).compose(&wrapped);
    assert!(tokens(&cmd).contains(&"LSFG_MULTIPLIER=4"));
    assert!(!cmd.env().contains_key("LSFG_MULTIPLIER"));

    let unwrapped = LaunchOptions { frame_gen, ..game() };
    let cmd = composer(&ALL_TOOLS).compose(&unwrapped);
    assert_eq!(cmd.env().get("LSFG_MULTIPLIER"), Some("4"));
    assert!(!tokens(&cmd).iter().any(|t| t.starts_with("LSFG_")));
}

#[test]
fn tool_status_reports_every_tool() {
    let status = composer(&["gamescope", "umu-run"]).tool_status();
    assert_eq!(
        status,
        vec![
            (Tool::Gamescope, true),
            (Tool::GameModeRun, false),
            (Tool::MangoHud, false),
            (Tool::SystemdRun, false),
            (Tool::UmuRun, true),
        ]
    );
}
