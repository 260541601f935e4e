// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Feature environment: overlay HUD and frame-generation layer variables.
//!
//! Built once per launch. Where the variables end up (process environment
//! or `KEY=VALUE` tokens after `env`) is decided by [`placement`].

use pl_core::{EnvSet, FrameGenOptions, LaunchOptions};

/// Vulkan layer names for the frame-generation shim (current and legacy).
pub const LSFG_LAYERS: &str = "VK_LAYER_LSFGVK_frame_generation:VK_LAYER_LS_frame_generation";

/// Where feature variables must go for them to reach the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Set on the spawned process
    ProcessEnv,
    /// Passed as `KEY=VALUE` arguments to the `env` shim inside the compositor
    ArgvTokens,
}

/// Programs under the compositor only see variables passed to its `env` shim.
pub fn placement(compositor_applied: bool) -> Placement {
    if compositor_applied {
        Placement::ArgvTokens
    } else {
        Placement::ProcessEnv
    }
}

pub fn feature_env(opts: &LaunchOptions) -> EnvSet {
    let mut env = EnvSet::new();
    if opts.mangohud {
        env.set("MANGOHUD", "1");
    }
    if let Some(fg) = &opts.frame_gen {
        frame_gen_env(fg, &mut env);
    }
    env
}

fn frame_gen_env(fg: &FrameGenOptions, env: &mut EnvSet) {
    env.set("ENABLE_LSFG", "1");
    env.set("DISABLE_LSFGVK", "0");
    env.set("LSFG_LEGACY", "1");
    env.set("VK_LOADER_LAYERS_ENABLE", LSFG_LAYERS);
    env.set("VK_INSTANCE_LAYERS", LSFG_LAYERS);
    env.set("LSFG_HUD", "1");
    env.set("LSFG_LOG_LEVEL", "debug");

    if let Some(dir) = fg.layer_dir.as_ref().filter(|d| !d.as_os_str().is_empty()) {
        let dir = dir.to_string_lossy().into_owned();
        env.set("VK_ADD_LAYER_PATH", dir.clone());
        env.set("PRESSURE_VESSEL_FILESYSTEMS_RW", dir);
    }

    env.set("LSFG_MULTIPLIER", fg.multiplier.to_string());
    if fg.performance_mode {
        env.set("LSFG_PERFORMANCE_MODE", "1");
    }
    if let Some(dll) = fg.dll_path.as_ref().filter(|d| !d.as_os_str().is_empty()) {
        env.set("LSFG_DLL_PATH", dll.to_string_lossy());
    }
}

#[cfg(test)]
#[path = "features_tests.rs"]
mod tests;
