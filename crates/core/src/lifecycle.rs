// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run lifecycle: states, allowed transitions and the events emitted to hosts.

use crate::exit::ExitStatus;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// State of one supervised run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleState {
    Starting,
    Running,
    Stopping,
    Exited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid lifecycle transition {from} -> {to}")]
pub struct InvalidTransition {
    pub from: LifecycleState,
    pub to: LifecycleState,
}

impl LifecycleState {
    /// Validate and perform a transition. `Exited` is terminal and no state
    /// transitions to itself.
    pub fn transition(self, to: LifecycleState) -> Result<LifecycleState, InvalidTransition> {
        use LifecycleState::*;
        match (self, to) {
            (Starting, Running)
            | (Starting, Exited)
            | (Running, Stopping)
            | (Running, Exited)
            | (Stopping, Exited) => Ok(to),
            _ => Err(InvalidTransition { from: self, to }),
        }
    }

    pub fn is_terminal(self) -> bool {
        self == LifecycleState::Exited
    }
}

impl fmt::Display for LifecycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LifecycleState::Starting => "starting",
            LifecycleState::Running => "running",
            LifecycleState::Stopping => "stopping",
            LifecycleState::Exited => "exited",
        };
        f.write_str(s)
    }
}

/// Who asked the run to stop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Explicit stop request from the host
    User,
    /// SIGINT delivered to the launcher
    Interrupt,
    /// SIGTERM delivered to the launcher
    Terminate,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StopReason::User => "user request",
            StopReason::Interrupt => "interrupt",
            StopReason::Terminate => "terminate",
        };
        f.write_str(s)
    }
}

/// Events emitted to the host while a run progresses.
///
/// Serializes with `{"type": "run:name", ...fields}` format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LifecycleEvent {
    #[serde(rename = "run:starting")]
    Starting { name: String, log_path: PathBuf },

    #[serde(rename = "run:running")]
    Running { pid: u32 },

    #[serde(rename = "run:stopping")]
    Stopping { pid: u32, reason: StopReason },

    #[serde(rename = "run:exited")]
    Exited {
        status: ExitStatus,
        elapsed_ms: u64,
    },
}

impl LifecycleEvent {
    /// State the run is in once this event has been emitted.
    pub fn state(&self) -> LifecycleState {
        match self {
            LifecycleEvent::Starting { .. } => LifecycleState::Starting,
            LifecycleEvent::Running { .. } => LifecycleState::Running,
            LifecycleEvent::Stopping { .. } => LifecycleState::Stopping,
            LifecycleEvent::Exited { .. } => LifecycleState::Exited,
        }
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
