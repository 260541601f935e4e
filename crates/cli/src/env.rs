// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI crate.

use std::path::PathBuf;
use std::time::Duration;

/// Name of the tracing filter variable
pub const LOG_FILTER_VAR: &str = "PL_LOG";

const APP_DIR: &str = "proton-launch";

// --- Duration helper (private) ---

fn parse_duration_ms(var: &str) -> Option<Duration> {
    std::env::var(var)
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_millis)
}

fn non_empty(var: &str) -> Option<String> {
    std::env::var(var).ok().filter(|s| !s.trim().is_empty())
}

// --- Paths ---

/// Config file: PL_CONFIG > XDG config dir/proton-launch/config.toml
pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = non_empty("PL_CONFIG") {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
}

/// Explicit base directory override
pub fn base_dir() -> Option<PathBuf> {
    non_empty("PL_BASE_DIR").map(PathBuf::from)
}

/// Default base directory: XDG data dir/proton-launch > ~/.local/share/proton-launch
pub fn default_base_dir() -> PathBuf {
    dirs::data_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

// --- Timings ---

pub fn trim_interval_ms() -> Option<Duration> {
    parse_duration_ms("PL_TRIM_INTERVAL_MS")
}
pub fn stop_grace_ms() -> Option<Duration> {
    parse_duration_ms("PL_STOP_GRACE_MS")
}
pub fn exit_grace_ms() -> Option<Duration> {
    parse_duration_ms("PL_EXIT_GRACE_MS")
}
pub fn kill_after_ms() -> Option<Duration> {
    parse_duration_ms("PL_KILL_AFTER_MS")
}

// --- Notifications ---

/// `PL_NOTIFY=0` disables desktop notifications
pub fn notifications() -> Option<bool> {
    non_empty("PL_NOTIFY").map(|v| !matches!(v.trim(), "0" | "false" | "no" | "off"))
}
