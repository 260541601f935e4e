// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Live log viewers

mod terminal;

pub use terminal::{terminal_command, tail_script, TerminalLogViewer, TERMINALS};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeLogViewer, ViewerCall};

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// Errors from opening a log viewer
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("no terminal emulator found")]
    NoTerminal,
    #[error("failed to launch {terminal}: {reason}")]
    SpawnFailed { terminal: String, reason: String },
}

/// Shows a run's log to the user while the program is alive
#[async_trait]
pub trait LogViewer: Clone + Send + Sync + 'static {
    /// Open a viewer following `log_path` until process `pid` exits.
    ///
    /// Returns once the viewer is launched; it is never waited on.
    async fn open(&self, log_path: &Path, pid: u32) -> Result<(), ViewerError>;
}
