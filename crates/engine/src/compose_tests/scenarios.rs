// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end composition scenarios

use super::*;

#[test]
fn gamescope_with_overlay_passes_hud_flag_as_argument() {
    let opts = LaunchOptions {
        gamescope: Some(resolution(1920, 1080, 60)),
        mangohud: true,
        ..game()
    };
    let cmd = composer(&ALL_TOOLS).compose(&opts);

    assert_eq!(
        tokens(&cmd),
        vec![
            "gamescope", "-W", "1920", "-H", "1080", "-r", "60", "--", "env", "MANGOHUD=1",
            "umu-run", "/games/foo.exe",
        ]
    );
    assert!(!cmd.env().contains_key("MANGOHUD"));
    assert!(!cmd.overrides().contains_key("MANGOHUD"));
}

#[test]
fn memory_floor_wraps_plain_launch() {
    let opts = LaunchOptions {
        memory_floor: Some("4G".parse().unwrap()),
        ..game()
    };
    let cmd = composer(&ALL_TOOLS).compose(&opts);

    assert_eq!(
        tokens(&cmd),
        vec![
            "systemd-run", "--user", "--scope", "-pMemoryMin=4G", "--", "umu-run",
            "/games/foo.exe",
        ]
    );
}

#[test]
fn full_stack_launch() {
    let opts = LaunchOptions {
        launcher: Some(PathBuf::from("/games/foo/Launcher.exe")),
        prefix: Some(PathBuf::from("/pfx/foo")),
        proton_pattern: Some("GE-Proton*".to_string()),
        custom_args: "-dx11".to_string(),
        mangohud: true,
        gamemode: true,
        gamescope: Some(resolution(2560, 1440, 165)),
        frame_gen: Some(FrameGenOptions {
            multiplier: "2".parse().unwrap(),
            performance_mode: true,
            dll_path: None,
            layer_dir: Some(PathBuf::from("/data/tools/lsfg")),
        }),
        memory_floor: Some("25%".parse().unwrap()),
        ..game()
    };
    let cmd = composer(&ALL_TOOLS).compose(&opts);
    let argv = tokens(&cmd);

    assert_eq!(&argv[..5], &["systemd-run", "--user", "--scope", "-pMemoryMin=25%", "--"]);
    let env_at = argv.iter().position(|t| *t == "env").unwrap();
    let gamemode_at = argv.iter().position(|t| *t == "gamemoderun").unwrap();
    let assignments = &argv[env_at + 1..gamemode_at];
    assert_eq!(assignments[0], "MANGOHUD=1");
    assert!(assignments.contains(&"LSFG_PERFORMANCE_MODE=1"));
    assert!(assignments.contains(&"VK_ADD_LAYER_PATH=/data/tools/lsfg"));
    assert_eq!(
        &argv[gamemode_at..],
        &["gamemoderun", "umu-run", "/games/foo/Launcher.exe", "-dx11"]
    );

    assert_eq!(
        cmd.overrides().keys().collect::<Vec<_>>(),
        vec!["WINEPREFIX", "UMU_PROTON_PATTERN"]
    );
}

#[test]
fn gamescope_requested_but_missing_keeps_features_in_env() {
    let opts = LaunchOptions {
        gamescope: Some(resolution(1920, 1080, 60)),
        mangohud: true,
        ..game()
    };
    let cmd = composer(&["umu-run", "gamemoderun", "systemd-run"]).compose(&opts);

    assert_eq!(tokens(&cmd), vec!["umu-run", "/games/foo.exe"]);
    assert_eq!(cmd.env().get("MANGOHUD"), Some("1"));
    assert_eq!(cmd.skipped(), &[Wrapper::Gamescope]);
}
