// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake log viewer for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{LogViewer, ViewerError};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Recorded viewer launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerCall {
    pub log_path: PathBuf,
    pub pid: u32,
}

#[derive(Default)]
struct FakeViewerState {
    calls: Vec<ViewerCall>,
    missing_terminal: bool,
}

#[derive(Clone, Default)]
pub struct FakeLogViewer {
    inner: Arc<Mutex<FakeViewerState>>,
}

impl FakeLogViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Behave as if no terminal emulator is installed
    pub fn without_terminal() -> Self {
        let viewer = Self::new();
        viewer.inner.lock().missing_terminal = true;
        viewer
    }

    pub fn calls(&self) -> Vec<ViewerCall> {
        self.inner.lock().calls.clone()
    }
}

#[async_trait]
impl LogViewer for FakeLogViewer {
    async fn open(&self, log_path: &Path, pid: u32) -> Result<(), ViewerError> {
        let mut state = self.inner.lock();
        state.calls.push(ViewerCall {
            log_path: log_path.to_path_buf(),
            pid,
        });
        if state.missing_terminal {
            return Err(ViewerError::NoTerminal);
        }
        Ok(())
    }
}
