// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The launch option model: what to run and which wrappers to apply.

use crate::units::{MemorySize, Multiplier, Resolution};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Rejected launch options
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchError {
    #[error("no game executable given")]
    MissingTarget,
}

/// Frame-generation layer parameters, already resolved from any profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameGenOptions {
    #[serde(default)]
    pub multiplier: Multiplier,
    #[serde(default)]
    pub performance_mode: bool,
    /// Shim library path (symlinks already resolved)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dll_path: Option<PathBuf>,
    /// Directory holding the Vulkan layer manifest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_dir: Option<PathBuf>,
}

/// Everything needed to compose one launch.
///
/// Optional wrappers are `Some` when the user turned them on. Whether they
/// are actually applied also depends on tool availability at compose time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchOptions {
    pub game: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launcher: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proton_pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proton_path: Option<PathBuf>,
    /// Extra game arguments, split on whitespace at compose time
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub custom_args: String,
    #[serde(default)]
    pub mangohud: bool,
    #[serde(default)]
    pub gamemode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gamescope: Option<Resolution>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_gen: Option<FrameGenOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_floor: Option<MemorySize>,
}

impl LaunchOptions {
    pub fn new(game: impl Into<PathBuf>) -> Self {
        Self {
            game: game.into(),
            ..Self::default()
        }
    }

    /// Reject options that cannot be composed.
    pub fn validate(&self) -> Result<(), LaunchError> {
        if self.game.as_os_str().is_empty() {
            return Err(LaunchError::MissingTarget);
        }
        Ok(())
    }

    /// The path actually handed to the runner.
    ///
    /// A distinct launcher wins over the game executable; an empty launcher
    /// counts as unset.
    pub fn resolved_path(&self) -> &Path {
        match &self.launcher {
            Some(l) if !l.as_os_str().is_empty() => l,
            _ => &self.game,
        }
    }

    /// Game name without directory or extension, e.g. `foo` for `/games/foo.exe`.
    pub fn display_name(&self) -> String {
        stem_of(&self.game)
    }

    /// File name of the resolved launch target, e.g. `Launcher.exe`.
    pub fn launcher_name(&self) -> String {
        self.resolved_path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Base name used for this run's log file.
    pub fn log_base_name(&self) -> String {
        self.game
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "game".to_string())
    }

    /// Key that profile stores use for this game: `<stem>-<8 hex digits>`.
    pub fn profile_key(&self) -> String {
        let resolved = self.resolved_path();
        let digest = Sha256::digest(resolved.to_string_lossy().as_bytes());
        let hex: String = digest.iter().take(4).map(|b| format!("{:02x}", b)).collect();
        format!("{}-{}", stem_of(resolved), hex)
    }

    /// Extra arguments in user order.
    pub fn extra_args(&self) -> impl Iterator<Item = &str> {
        self.custom_args.split_whitespace()
    }
}

fn stem_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "game".to_string())
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
