// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.

use std::ffi::OsString;

/// Executable search path used by `PathProbe::from_env`.
pub fn search_path() -> Option<OsString> {
    std::env::var_os("PATH")
}

/// User's preferred terminal emulator (`$TERMINAL`), if set and non-blank.
pub fn terminal() -> Option<String> {
    std::env::var("TERMINAL")
        .ok()
        .filter(|t| !t.trim().is_empty())
}
