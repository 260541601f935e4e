// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pl-core: launch option model and shared types for proton-launch

pub mod command;
pub mod exit;
pub mod lifecycle;
pub mod options;
pub mod time_fmt;
pub mod units;

pub use command::{ComposedCommand, EnvSet, Tool, Wrapper};
pub use exit::ExitStatus;
pub use lifecycle::{InvalidTransition, LifecycleEvent, LifecycleState, StopReason};
pub use options::{FrameGenOptions, LaunchError, LaunchOptions};
pub use time_fmt::format_elapsed;
pub use units::{MemorySize, MemoryUnit, Multiplier, OptionsError, Resolution};
