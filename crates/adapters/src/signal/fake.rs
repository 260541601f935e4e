// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake signaller for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{GroupSignaller, SignalError, StopSignal};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::time::Instant;

/// Recorded signal delivery
#[derive(Debug, Clone)]
pub struct SignalCall {
    pub pgid: u32,
    pub signal: StopSignal,
    pub at: Instant,
}

struct FakeSignallerState {
    calls: Vec<SignalCall>,
    fail: bool,
}

/// Signaller that records deliveries instead of sending them.
///
/// Timestamps use tokio's clock so paused-time tests can assert spacing.
#[derive(Clone)]
pub struct FakeSignaller {
    inner: Arc<Mutex<FakeSignallerState>>,
}

impl Default for FakeSignaller {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeSignallerState {
                calls: Vec::new(),
                fail: false,
            })),
        }
    }
}

impl FakeSignaller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later delivery fail
    pub fn set_failing(&self, fail: bool) {
        self.inner.lock().fail = fail;
    }

    pub fn calls(&self) -> Vec<SignalCall> {
        self.inner.lock().calls.clone()
    }

    pub fn signals(&self) -> Vec<StopSignal> {
        self.inner.lock().calls.iter().map(|c| c.signal).collect()
    }
}

impl GroupSignaller for FakeSignaller {
    fn signal_group(&self, pgid: u32, signal: StopSignal) -> Result<(), SignalError> {
        let mut state = self.inner.lock();
        state.calls.push(SignalCall {
            pgid,
            signal,
            at: Instant::now(),
        });
        if state.fail {
            return Err(SignalError::DeliveryFailed {
                pgid,
                signal,
                reason: "injected failure".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
