// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `PATH`-based executable lookup.

use super::ToolProbe;
use std::ffi::OsString;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Resolves programs like a shell would, against a fixed search path.
///
/// The search path is captured at construction so lookups during one
/// launch are consistent.
#[derive(Clone, Debug, Default)]
pub struct PathProbe {
    search_path: Option<Arc<OsString>>,
}

impl PathProbe {
    pub fn new(search_path: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(Arc::new(search_path.into())),
        }
    }

    /// Probe against the current process `PATH`.
    pub fn from_env() -> Self {
        Self {
            search_path: crate::env::search_path().map(Arc::new),
        }
    }
}

impl ToolProbe for PathProbe {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        if program.is_empty() {
            return None;
        }
        let candidate = Path::new(program);
        if candidate.components().count() > 1 {
            return is_executable(candidate).then(|| candidate.to_path_buf());
        }

        let search_path = self.search_path.as_deref()?;
        std::env::split_paths(search_path)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(|dir| dir.join(program))
            .find(|p| is_executable(p))
    }
}

fn is_executable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod tests;
