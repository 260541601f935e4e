// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command composition: launch options to argv plus environment.
//!
//! Layering, outermost first:
//!
//! ```text
//! [systemd-run --user --scope -pMemoryMin=N --]
//!   [gamescope -W w -H h -r r -- env KEY=VAL...]
//!     [gamemoderun]
//!       umu-run <target> <extra args...>
//! ```
//!
//! Wrappers whose tool is missing are skipped, never an error.

mod features;

pub use features::{feature_env, placement, Placement, LSFG_LAYERS};

use pl_adapters::ToolProbe;
use pl_core::{ComposedCommand, EnvSet, LaunchOptions, Resolution, Tool, Wrapper};

/// Runner that selects and starts the Proton build.
pub const RUNNER: Tool = Tool::UmuRun;

#[derive(Clone, Debug)]
pub struct Composer<P> {
    probe: P,
    inherited: EnvSet,
}

impl<P: ToolProbe> Composer<P> {
    /// Composer inheriting this process's environment.
    pub fn new(probe: P) -> Self {
        Self::with_inherited_env(probe, crate::env::inherited())
    }

    pub fn with_inherited_env(probe: P, inherited: EnvSet) -> Self {
        Self { probe, inherited }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Availability of every tool the launcher can use.
    pub fn tool_status(&self) -> Vec<(Tool, bool)> {
        Tool::ALL
            .iter()
            .map(|&tool| (tool, self.probe.is_available(tool.binary())))
            .collect()
    }

    fn available(&self, wrapper: Wrapper) -> bool {
        self.probe.is_available(wrapper.tool().binary())
    }

    /// Compose the command for one launch.
    ///
    /// Callers validate `opts` first; an empty target still composes but
    /// will fail to spawn.
    pub fn compose(&self, opts: &LaunchOptions) -> ComposedCommand {
        let mut overrides = base_env(opts);
        let features = feature_env(opts);

        let mut argv: Vec<String> = Vec::new();
        let mut applied = Vec::new();
        let mut skipped = Vec::new();

        let compositor = opts
            .gamescope
            .filter(|_| self.request(Wrapper::Gamescope, &mut applied, &mut skipped));
        match placement(compositor.is_some()) {
            Placement::ArgvTokens => {
                argv.extend(gamescope_prefix(compositor.unwrap_or_default()));
                argv.extend(features.to_assignments());
            }
            Placement::ProcessEnv => overrides.merge(&features),
        }

        if opts.gamemode && self.request(Wrapper::GameMode, &mut applied, &mut skipped) {
            argv.push(Tool::GameModeRun.binary().to_string());
        }

        argv.push(RUNNER.binary().to_string());
        argv.push(opts.resolved_path().to_string_lossy().into_owned());
        argv.extend(opts.extra_args().map(str::to_string));

        if let Some(floor) = opts.memory_floor {
            if self.request(Wrapper::MemoryFloor, &mut applied, &mut skipped) {
                let mut wrapped = vec![
                    Tool::SystemdRun.binary().to_string(),
                    "--user".to_string(),
                    "--scope".to_string(),
                    format!("-pMemoryMin={}", floor),
                    "--".to_string(),
                ];
                wrapped.append(&mut argv);
                argv = wrapped;
                // outermost wrapper first
                applied.rotate_right(1);
            }
        }

        for wrapper in &skipped {
            tracing::info!(tool = wrapper.tool().binary(), "wrapper tool not found, skipping");
        }

        ComposedCommand::new(argv, self.inherited.clone(), overrides)
            .with_wrappers(applied, skipped)
            .with_memory_floor(opts.memory_floor)
    }

    /// Record a requested wrapper as applied or skipped; true when applied.
    fn request(
        &self,
        wrapper: Wrapper,
        applied: &mut Vec<Wrapper>,
        skipped: &mut Vec<Wrapper>,
    ) -> bool {
        if self.available(wrapper) {
            applied.push(wrapper);
            true
        } else {
            skipped.push(wrapper);
            false
        }
    }
}

/// Prefix and Proton selection variables.
fn base_env(opts: &LaunchOptions) -> EnvSet {
    let mut env = EnvSet::new();
    if let Some(prefix) = opts.prefix.as_ref().filter(|p| !p.as_os_str().is_empty()) {
        env.set("WINEPREFIX", prefix.to_string_lossy());
    }
    if let Some(pattern) = opts.proton_pattern.as_deref().filter(|p| !p.is_empty()) {
        env.set("UMU_PROTON_PATTERN", pattern);
    }
    if let Some(path) = opts.proton_path.as_ref().filter(|p| !p.as_os_str().is_empty()) {
        env.set("PROTONPATH", path.to_string_lossy());
    }
    env
}

fn gamescope_prefix(res: Resolution) -> Vec<String> {
    let mut argv = vec![Tool::Gamescope.binary().to_string()];
    for (flag, value) in [("-W", res.width), ("-H", res.height), ("-r", res.refresh)] {
        if let Some(v) = value {
            argv.push(flag.to_string());
            argv.push(v.to_string());
        }
    }
    argv.push("--".to_string());
    argv.push("env".to_string());
    argv
}

#[cfg(test)]
#[path = "../compose_tests/mod.rs"]
mod tests;
