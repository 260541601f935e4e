// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Property tests for feature placement and wrapper layering

use super::*;
use proptest::prelude::*;

fn path_segment() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_ ]{0,10}".prop_map(|s| s.to_string())
}

fn resolution_strategy() -> impl Strategy<Value = Resolution> {
    (
        proptest::option::of(320u32..7680),
        proptest::option::of(200u32..4320),
        proptest::option::of(24u32..360),
    )
        .prop_map(|(width, height, refresh)| Resolution {
            width,
            height,
            refresh,
        })
}

fn frame_gen_strategy() -> impl Strategy<Value = FrameGenOptions> {
    (2u8..=20, any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(mult, performance_mode, dll, layer)| FrameGenOptions {
            multiplier: pl_core::Multiplier::new(mult).unwrap_or_default(),
            performance_mode,
            dll_path: dll.then(|| PathBuf::from("/steam/Lossless.dll")),
            layer_dir: layer.then(|| PathBuf::from("/data/tools/lsfg")),
        },
    )
}

fn options_strategy() -> impl Strategy<Value = LaunchOptions> {
    (
        path_segment(),
        proptest::option::of(path_segment()),
        "[a-z -]{0,20}",
        any::<bool>(),
        any::<bool>(),
        proptest::option::of(resolution_strategy()),
        proptest::option::of(frame_gen_strategy()),
        proptest::option::of(1u64..64),
    )
        .prop_map(
            |(game, launcher, args, mangohud, gamemode, gamescope, frame_gen, mem)| LaunchOptions {
                game: PathBuf::from(format!("/games/{game}.exe")),
                launcher: launcher.map(|l| PathBuf::from(format!("/games/{l}/launch.exe"))),
                prefix: Some(PathBuf::from("/pfx")),
                proton_pattern: Some("GE-Proton*".to_string()),
                proton_path: None,
                custom_args: args,
                mangohud,
                gamemode,
                gamescope,
                frame_gen,
                memory_floor: mem.map(gib),
            },
        )
}

fn tool_subset() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::sample::subsequence(ALL_TOOLS.to_vec(), 0..=ALL_TOOLS.len())
}

proptest! {
    #[test]
    fn unwrapped_features_live_in_process_env(
        opts in options_strategy(),
        tools in tool_subset(),
    ) {
        let opts = LaunchOptions { gamescope: None, ..opts };
        let cmd = composer(&tools).compose(&opts);
        let features = feature_env(&opts);

        for (key, value) in features.iter() {
            prop_assert_eq!(cmd.env().get(key), Some(value));
            let assignment = format!("{key}={value}");
            prop_assert!(!cmd.argv().contains(&assignment));
        }
    }

    #[test]
    fn wrapped_features_are_argv_tokens_only(
        opts in options_strategy(),
        res in resolution_strategy(),
        tools in tool_subset(),
    ) {
        let mut tools = tools;
        if !tools.contains(&"gamescope") {
            tools.push("gamescope");
        }
        let opts = LaunchOptions { gamescope: Some(res), ..opts };
        let cmd = composer(&tools).compose(&opts);
        let features = feature_env(&opts);
        let env_at = cmd.argv().iter().position(|t| t == "env");
        prop_assert!(env_at.is_some());
        let env_at = env_at.unwrap_or_default();
        prop_assert_eq!(cmd.argv()[env_at - 1].as_str(), "--");

        let after_env = &cmd.argv()[env_at + 1..];
        for (i, assignment) in features.to_assignments().iter().enumerate() {
            prop_assert_eq!(&after_env[i], assignment);
        }
        for key in features.keys() {
            prop_assert!(!cmd.env().contains_key(key));
            prop_assert!(!cmd.overrides().contains_key(key));
        }
    }

    #[test]
    fn memory_floor_wraps_unmodified_command(
        opts in options_strategy(),
        size in 1u64..64,
        tools in tool_subset(),
    ) {
        let mut with_scope = tools.clone();
        if !with_scope.contains(&"systemd-run") {
            with_scope.push("systemd-run");
        }
        let floor = LaunchOptions { memory_floor: Some(gib(size)), ..opts.clone() };
        let plain = LaunchOptions { memory_floor: None, ..opts };

        let wrapped = composer(&with_scope).compose(&floor);
        let inner = composer(&with_scope).compose(&plain);

        let prefix = [
            "systemd-run".to_string(),
            "--user".to_string(),
            "--scope".to_string(),
            format!("-pMemoryMin={size}G"),
            "--".to_string(),
        ];
        prop_assert_eq!(&wrapped.argv()[..5], &prefix[..]);
        prop_assert_eq!(&wrapped.argv()[5..], inner.argv());
        prop_assert_eq!(wrapped.env(), inner.env());
    }

    #[test]
    fn runner_and_target_always_precede_extra_args(opts in options_strategy(), tools in tool_subset()) {
        let cmd = composer(&tools).compose(&opts);
        let argv = cmd.argv();
        let extra: Vec<&str> = opts.extra_args().collect();
        let runner_at = argv.iter().position(|t| t == "umu-run");
        prop_assert!(runner_at.is_some());
        let runner_at = runner_at.unwrap_or_default();
        prop_assert_eq!(argv[runner_at + 1].as_str(), opts.resolved_path().to_string_lossy());
        let tail: Vec<&str> = argv[runner_at + 2..].iter().map(String::as_str).collect();
        prop_assert_eq!(tail, extra);
    }
}
