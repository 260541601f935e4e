// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Launch engine: command composition, process supervision, run logs and
//! the control loop tying them together

mod banner;
pub mod compose;
mod config;
mod control;
pub mod env;
mod error;
pub mod log_session;
mod signals;
mod supervisor;
mod trim_ticker;

pub use banner::{startup_banner, EXIT_MARKER};
pub use compose::{Composer, RUNNER};
pub use config::{logs_dir, LogPolicy, RunConfig, StopPolicy};
pub use control::{
    ControlLoop, RunDeps, RunOutcome, StopRequester, EXITED_TITLE, LAUNCH_ERROR_TITLE,
    LAUNCH_TITLE,
};
pub use error::{LogError, RunError, SpawnError};
pub use log_session::{list_logs, sweep_retention, LogEntry, LogSession, TrimOutcome};
pub use signals::{ChannelSignals, NoSignals, SignalSource, UnixSignals};
pub use supervisor::{ProcessHandle, StopOutcome, Stopper, Supervisor};
pub use trim_ticker::TrimTicker;
