// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::signal::{GroupSignaller, SignalError, StopSignal};
use crate::viewer::{LogViewer, ViewerError};
use async_trait::async_trait;
use std::path::Path;
use tracing::Instrument;

/// Wrapper that adds tracing to any GroupSignaller
#[derive(Clone)]
pub struct TracedSignaller<S> {
    inner: S,
}

impl<S> TracedSignaller<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: GroupSignaller> GroupSignaller for TracedSignaller<S> {
    fn signal_group(&self, pgid: u32, signal: StopSignal) -> Result<(), SignalError> {
        let _span = tracing::info_span!("signal.group", pgid, %signal).entered();
        let result = self.inner.signal_group(pgid, signal);
        match &result {
            Ok(()) => tracing::info!("signal sent"),
            Err(e) => tracing::error!(error = %e, "signal failed"),
        }
        result
    }
}

/// Wrapper that adds tracing to any LogViewer
#[derive(Clone)]
pub struct TracedViewer<V> {
    inner: V,
}

impl<V> TracedViewer<V> {
    pub fn new(inner: V) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<V: LogViewer> LogViewer for TracedViewer<V> {
    async fn open(&self, log_path: &Path, pid: u32) -> Result<(), ViewerError> {
        async {
            let start = std::time::Instant::now();
            let result = self.inner.open(log_path, pid).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "viewer opened"),
                Err(ViewerError::NoTerminal) => {
                    tracing::info!("no terminal emulator found, log viewer disabled")
                }
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "viewer failed"),
            }
            result
        }
        .instrument(tracing::info_span!("viewer.open", path = %log_path.display(), pid))
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
