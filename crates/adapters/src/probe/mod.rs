// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tool availability probes

mod path;

pub use path::PathProbe;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeToolProbe;

use std::path::PathBuf;

/// Answers whether an external program can be run.
///
/// Probes are read-only lookups; a missing tool is an answer, not an error.
pub trait ToolProbe: Clone + Send + Sync + 'static {
    /// Resolve a program name to the executable that would run.
    fn locate(&self, program: &str) -> Option<PathBuf>;

    fn is_available(&self, program: &str) -> bool {
        self.locate(program).is_some()
    }
}
