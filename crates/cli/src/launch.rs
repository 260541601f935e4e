// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Launch flags shared by `run` and `show`, and their conversion into
//! [`LaunchOptions`].

use clap::Args;
use pl_core::{FrameGenOptions, LaunchOptions, MemorySize, Multiplier, OptionsError, Resolution};
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Clone)]
pub struct LaunchArgs {
    /// Game executable (.exe)
    #[arg(long)]
    pub game: PathBuf,

    /// Separate launcher executable started instead of the game
    #[arg(long)]
    pub launcher: Option<PathBuf>,

    /// Wine prefix directory
    #[arg(long)]
    pub prefix: Option<PathBuf>,

    /// Explicit Proton build directory
    #[arg(long = "proton-path")]
    pub proton_path: Option<PathBuf>,

    /// Proton selection pattern (e.g. GE-Proton*)
    #[arg(long = "proton-pattern")]
    pub proton_pattern: Option<String>,

    /// Enable the MangoHud overlay
    #[arg(long)]
    pub mango: bool,

    /// Run under gamemoderun
    #[arg(long)]
    pub gamemode: bool,

    /// Run inside gamescope
    #[arg(long)]
    pub gamescope: bool,

    /// Gamescope output width
    #[arg(long = "gs-w", default_value = "")]
    pub gs_w: String,

    /// Gamescope output height
    #[arg(long = "gs-h", default_value = "")]
    pub gs_h: String,

    /// Gamescope refresh rate
    #[arg(long = "gs-r", default_value = "")]
    pub gs_r: String,

    /// Enable LSFG-VK frame generation
    #[arg(long)]
    pub lsfg: bool,

    /// Frame generation multiplier (2-20)
    #[arg(long = "lsfg-mult", default_value = "2")]
    pub lsfg_mult: Multiplier,

    /// Frame generation performance mode
    #[arg(long = "lsfg-perf")]
    pub lsfg_perf: bool,

    /// Path to Lossless.dll
    #[arg(long = "lsfg-dll-path")]
    pub lsfg_dll_path: Option<PathBuf>,

    /// Guarantee a minimum amount of memory via systemd-run
    #[arg(long = "memory-min")]
    pub memory_min: bool,

    /// Memory floor size (e.g. 4G, 512M, 25%)
    #[arg(long = "memory-min-value", default_value = "4G")]
    pub memory_min_value: MemorySize,

    /// Extra arguments passed to the game
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub args: String,
}

impl LaunchArgs {
    /// Build launch options. `layer_dir` is the frame generation layer
    /// directory, used only when it exists.
    pub fn to_options(&self, layer_dir: &Path) -> Result<LaunchOptions, OptionsError> {
        let gamescope = if self.gamescope {
            Some(Resolution::parse(&self.gs_w, &self.gs_h, &self.gs_r)?)
        } else {
            None
        };

        let frame_gen = self.lsfg.then(|| FrameGenOptions {
            multiplier: self.lsfg_mult,
            performance_mode: self.lsfg_perf,
            dll_path: self.lsfg_dll_path.as_deref().map(resolve_dll),
            layer_dir: Some(layer_dir.to_path_buf()).filter(|d| d.is_dir()),
        });

        Ok(LaunchOptions {
            game: expand_tilde(&self.game),
            launcher: self.launcher.as_deref().map(expand_tilde),
            prefix: self.prefix.as_deref().map(expand_tilde),
            proton_pattern: self.proton_pattern.clone().filter(|p| !p.is_empty()),
            proton_path: self.proton_path.as_deref().map(expand_tilde),
            custom_args: self.args.clone(),
            mangohud: self.mango,
            gamemode: self.gamemode,
            gamescope,
            frame_gen,
            memory_floor: self.memory_min.then_some(self.memory_min_value),
        })
    }
}

/// Expand a leading `~` or `~/` against the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    expand_tilde_with(path, crate::env::home_dir().as_deref())
}

fn expand_tilde_with(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };
    match path.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// DLL paths are handed to the layer after symlink resolution; a path that
/// cannot be resolved is passed through unchanged.
fn resolve_dll(path: &Path) -> PathBuf {
    let expanded = expand_tilde(path);
    std::fs::canonicalize(&expanded).unwrap_or(expanded)
}

#[cfg(test)]
#[path = "launch_tests.rs"]
mod tests;
