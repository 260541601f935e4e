// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake tool probe for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::ToolProbe;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

struct FakeProbeState {
    installed: HashMap<String, PathBuf>,
    lookups: Vec<String>,
}

/// Probe backed by an in-memory set of installed programs.
#[derive(Clone)]
pub struct FakeToolProbe {
    inner: Arc<Mutex<FakeProbeState>>,
}

impl Default for FakeToolProbe {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeProbeState {
                installed: HashMap::new(),
                lookups: Vec::new(),
            })),
        }
    }
}

impl FakeToolProbe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe that reports every listed program as installed under `/usr/bin`.
    pub fn with_tools(programs: &[&str]) -> Self {
        let probe = Self::new();
        for p in programs {
            probe.install(p);
        }
        probe
    }

    pub fn install(&self, program: &str) {
        self.inner
            .lock()
            .installed
            .insert(program.to_string(), PathBuf::from("/usr/bin").join(program));
    }

    pub fn uninstall(&self, program: &str) {
        self.inner.lock().installed.remove(program);
    }

    /// Programs looked up so far, in order
    pub fn lookups(&self) -> Vec<String> {
        self.inner.lock().lookups.clone()
    }
}

impl ToolProbe for FakeToolProbe {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        let mut state = self.inner.lock();
        state.lookups.push(program.to_string());
        state.installed.get(program).cloned()
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
