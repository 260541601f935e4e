// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run configuration: where files go and how runs are paced and stopped.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Log retention and trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPolicy {
    /// Historical log files kept per log directory
    pub retain: usize,
    /// Line ceiling for the active log; 0 disables trimming
    pub max_lines: usize,
    pub trim_interval: Duration,
}

impl Default for LogPolicy {
    fn default() -> Self {
        Self {
            retain: 10,
            max_lines: 500,
            trim_interval: Duration::from_secs(30),
        }
    }
}

/// Two-phase stop: SIGINT, `grace`, SIGTERM, then optionally SIGKILL
/// `kill_after` later if the program is still running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopPolicy {
    pub grace: Duration,
    pub kill_after: Option<Duration>,
}

impl Default for StopPolicy {
    fn default() -> Self {
        Self {
            grace: Duration::from_millis(200),
            kill_after: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub base_dir: PathBuf,
    pub log: LogPolicy,
    pub stop: StopPolicy,
    /// Pause after exit before the run reports completion
    pub exit_grace: Duration,
    /// Open a terminal following the log
    pub show_logs: bool,
}

impl RunConfig {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            log: LogPolicy::default(),
            stop: StopPolicy::default(),
            exit_grace: Duration::from_secs(1),
            show_logs: false,
        }
    }

    pub fn logs_dir(&self) -> PathBuf {
        logs_dir(&self.base_dir)
    }

    /// Directory holding the frame-generation Vulkan layer.
    pub fn lsfg_layer_dir(&self) -> PathBuf {
        self.base_dir.join("tools").join("lsfg")
    }

    /// The launcher's own tracing output.
    pub fn debug_log_path(&self) -> PathBuf {
        self.base_dir.join("debug.log")
    }
}

/// `{base_dir}/logs`
pub fn logs_dir(base_dir: &Path) -> PathBuf {
    base_dir.join("logs")
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
