// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process environment captured for launched programs.

use pl_core::EnvSet;

/// The launcher's own environment, inherited by everything it starts.
///
/// Entries that are not valid UTF-8 are converted lossily.
pub fn inherited() -> EnvSet {
    std::env::vars_os()
        .map(|(k, v)| {
            (
                k.to_string_lossy().into_owned(),
                v.to_string_lossy().into_owned(),
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
