// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Launcher settings: optional TOML file, then environment overrides.

use crate::env;
use pl_engine::RunConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Contents of `config.toml`. Every field is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub base_dir: Option<PathBuf>,
    pub show_logs: Option<bool>,
    pub notifications: Option<bool>,
    pub exit_grace_ms: Option<u64>,
    pub log: LogSection,
    pub stop: StopSection,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    pub retain: Option<usize>,
    pub max_lines: Option<usize>,
    pub trim_interval_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StopSection {
    pub grace_ms: Option<u64>,
    pub kill_after_ms: Option<u64>,
}

/// Effective settings for one invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub run: RunConfig,
    pub notifications: bool,
}

impl FileConfig {
    /// Read `path`; a missing file is an empty config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Merge onto defaults. Environment overrides are applied afterwards by
    /// [`Settings::resolve`].
    pub fn into_settings(self, default_base: PathBuf) -> Settings {
        let mut run = RunConfig::new(self.base_dir.unwrap_or(default_base));
        if let Some(show) = self.show_logs {
            run.show_logs = show;
        }
        if let Some(ms) = self.exit_grace_ms {
            run.exit_grace = Duration::from_millis(ms);
        }
        if let Some(retain) = self.log.retain {
            run.log.retain = retain;
        }
        if let Some(max) = self.log.max_lines {
            run.log.max_lines = max;
        }
        if let Some(ms) = self.log.trim_interval_ms {
            run.log.trim_interval = Duration::from_millis(ms);
        }
        if let Some(ms) = self.stop.grace_ms {
            run.stop.grace = Duration::from_millis(ms);
        }
        if let Some(ms) = self.stop.kill_after_ms {
            run.stop.kill_after = Some(Duration::from_millis(ms)).filter(|d| !d.is_zero());
        }
        Settings {
            run,
            notifications: self.notifications.unwrap_or(true),
        }
    }
}

impl Settings {
    /// Load the config file (if any) and apply `PL_*` overrides.
    pub fn resolve() -> Result<Self, ConfigError> {
        let file = match env::config_path() {
            Some(path) => FileConfig::load(&path)?,
            None => FileConfig::default(),
        };
        let mut settings = file.into_settings(env::default_base_dir());
        settings.apply_env();
        Ok(settings)
    }

    fn apply_env(&mut self) {
        if let Some(dir) = env::base_dir() {
            self.run.base_dir = dir;
        }
        if let Some(d) = env::trim_interval_ms() {
            self.run.log.trim_interval = d;
        }
        if let Some(d) = env::stop_grace_ms() {
            self.run.stop.grace = d;
        }
        if let Some(d) = env::exit_grace_ms() {
            self.run.exit_grace = d;
        }
        if let Some(d) = env::kill_after_ms() {
            self.run.stop.kill_after = Some(d).filter(|d| !d.is_zero());
        }
        if let Some(on) = env::notifications() {
            self.notifications = on;
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
