// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Periodic head-truncation of the active log.

use crate::log_session::{LogSession, TrimOutcome};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Handle to a background task trimming a [`LogSession`] every `period`.
///
/// Cancelled explicitly with [`TrimTicker::cancel`] or on drop.
pub struct TrimTicker {
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl TrimTicker {
    /// Start trimming `session` to `max_lines`. A zero ceiling or zero
    /// period yields an inert ticker.
    pub fn start(session: LogSession, max_lines: usize, period: Duration) -> Self {
        if max_lines == 0 || period.is_zero() {
            return Self {
                shutdown: None,
                task: None,
            };
        }

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let task = tokio::spawn(run(session, max_lines, period, shutdown_rx));
        Self {
            shutdown: Some(shutdown_tx),
            task: Some(task),
        }
    }

    pub fn is_active(&self) -> bool {
        self.shutdown.is_some()
    }

    /// Stop the ticker. Returns false when it was already stopped.
    pub fn cancel(&mut self) -> bool {
        match self.shutdown.take() {
            Some(tx) => {
                let _ = tx.send(());
                true
            }
            None => false,
        }
    }

    /// Cancel and wait for an in-flight trim to finish.
    pub async fn shutdown(mut self) {
        self.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for TrimTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run(
    session: LogSession,
    max_lines: usize,
    period: Duration,
    mut shutdown_rx: oneshot::Receiver<()>,
) {
    // First trim one full period after start
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = &mut shutdown_rx => break,
            _ = ticker.tick() => match session.trim(max_lines) {
                Ok(TrimOutcome::Trimmed { removed, kept }) => {
                    tracing::debug!(path = %session.path().display(), removed, kept, "log trimmed");
                }
                Ok(TrimOutcome::Unchanged { .. }) => {}
                Err(e) => tracing::warn!(error = %e, "log trim failed"),
            },
        }
    }
    tracing::debug!(path = %session.path().display(), "trim ticker stopped");
}

#[cfg(test)]
#[path = "trim_ticker_tests.rs"]
mod tests;
