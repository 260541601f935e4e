// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O: tool lookup, signals, notifications, log viewers

mod env;
pub mod notify;
pub mod probe;
pub mod signal;
pub mod traced;
pub mod viewer;

pub use notify::{DesktopNotifyAdapter, NoOpNotifyAdapter, NotifyAdapter, NotifyError};
pub use probe::{PathProbe, ToolProbe};
pub use signal::{GroupSignaller, KillpgSignaller, SignalError, StopSignal};
pub use traced::{TracedSignaller, TracedViewer};
pub use viewer::{LogViewer, TerminalLogViewer, ViewerError};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use notify::{FakeNotifyAdapter, NotifyCall};
#[cfg(any(test, feature = "test-support"))]
pub use probe::FakeToolProbe;
#[cfg(any(test, feature = "test-support"))]
pub use signal::{FakeSignaller, SignalCall};
#[cfg(any(test, feature = "test-support"))]
pub use viewer::{FakeLogViewer, ViewerCall};
