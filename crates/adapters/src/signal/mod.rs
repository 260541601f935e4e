// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-group signalling

mod killpg;

pub use killpg::KillpgSignaller;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeSignaller, SignalCall};

use std::fmt;
use thiserror::Error;

/// Signals used when stopping a supervised program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StopSignal {
    Interrupt,
    Terminate,
    Kill,
}

impl StopSignal {
    pub fn name(self) -> &'static str {
        match self {
            StopSignal::Interrupt => "SIGINT",
            StopSignal::Terminate => "SIGTERM",
            StopSignal::Kill => "SIGKILL",
        }
    }
}

impl fmt::Display for StopSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors from signal delivery
#[derive(Debug, Error)]
pub enum SignalError {
    #[error("refusing to signal process group {0}")]
    InvalidGroup(u32),
    #[error("{signal} to process group {pgid} failed: {reason}")]
    DeliveryFailed {
        pgid: u32,
        signal: StopSignal,
        reason: String,
    },
}

/// Delivers signals to a whole process group.
///
/// A group that no longer exists counts as delivered.
pub trait GroupSignaller: Clone + Send + Sync + 'static {
    fn signal_group(&self, pgid: u32, signal: StopSignal) -> Result<(), SignalError>;
}
