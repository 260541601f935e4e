// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Signal delivery through `killpg(2)`.

use super::{GroupSignaller, SignalError, StopSignal};
use nix::errno::Errno;
use nix::sys::signal::{killpg, Signal};
use nix::unistd::Pid;

#[derive(Clone, Copy, Debug, Default)]
pub struct KillpgSignaller;

impl KillpgSignaller {
    pub fn new() -> Self {
        Self
    }
}

fn to_nix(signal: StopSignal) -> Signal {
    match signal {
        StopSignal::Interrupt => Signal::SIGINT,
        StopSignal::Terminate => Signal::SIGTERM,
        StopSignal::Kill => Signal::SIGKILL,
    }
}

impl GroupSignaller for KillpgSignaller {
    fn signal_group(&self, pgid: u32, signal: StopSignal) -> Result<(), SignalError> {
        // 0 and 1 would address our own group and init
        let raw = match i32::try_from(pgid) {
            Ok(raw) if raw > 1 => raw,
            _ => return Err(SignalError::InvalidGroup(pgid)),
        };

        match killpg(Pid::from_raw(raw), to_nix(signal)) {
            Ok(()) => {
                tracing::debug!(pgid, %signal, "signal delivered");
                Ok(())
            }
            Err(Errno::ESRCH) => {
                tracing::debug!(pgid, %signal, "process group already gone");
                Ok(())
            }
            Err(e) => Err(SignalError::DeliveryFailed {
                pgid,
                signal,
                reason: e.desc().to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "killpg_tests.rs"]
mod tests;
