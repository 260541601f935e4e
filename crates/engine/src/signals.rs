// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sources of stop requests coming from outside the run: OS signals
//! delivered to the launcher, or a host-provided channel.

use async_trait::async_trait;
use pl_core::StopReason;
use tokio::signal::unix::{signal, Signal, SignalKind};
use tokio::sync::mpsc;

/// Yields a [`StopReason`] each time the launcher itself is asked to stop.
#[async_trait]
pub trait SignalSource: Send + 'static {
    /// Next request, or `None` once the source can never fire again.
    async fn recv(&mut self) -> Option<StopReason>;
}

/// SIGINT and SIGTERM delivered to this process.
///
/// Installing replaces the default disposition, so Ctrl-C in the launching
/// terminal stops the game instead of killing the launcher.
pub struct UnixSignals {
    interrupt: Signal,
    terminate: Signal,
}

impl UnixSignals {
    pub fn install() -> std::io::Result<Self> {
        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }
}

#[async_trait]
impl SignalSource for UnixSignals {
    async fn recv(&mut self) -> Option<StopReason> {
        tokio::select! {
            got = self.interrupt.recv() => got.map(|()| StopReason::Interrupt),
            got = self.terminate.recv() => got.map(|()| StopReason::Terminate),
        }
    }
}

/// Stop requests delivered over a channel.
pub struct ChannelSignals {
    rx: mpsc::Receiver<StopReason>,
}

impl ChannelSignals {
    pub fn new() -> (mpsc::Sender<StopReason>, Self) {
        let (tx, rx) = mpsc::channel(4);
        (tx, Self { rx })
    }
}

#[async_trait]
impl SignalSource for ChannelSignals {
    async fn recv(&mut self) -> Option<StopReason> {
        self.rx.recv().await
    }
}

/// A source that never fires.
pub struct NoSignals;

#[async_trait]
impl SignalSource for NoSignals {
    async fn recv(&mut self) -> Option<StopReason> {
        None
    }
}

#[cfg(test)]
#[path = "signals_tests.rs"]
mod tests;
