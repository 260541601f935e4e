// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process supervisor: spawn in a fresh process group, forward output to
//! the run log, wait for exit, and stop the whole group on request.

use crate::banner::EXIT_MARKER;
use crate::config::StopPolicy;
use crate::error::SpawnError;
use crate::log_session::LogSession;
use pl_adapters::{GroupSignaller, StopSignal};
use pl_core::{ComposedCommand, ExitStatus};
use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Upper bound on waiting for output readers after the program exits.
/// Descendants that outlive the leader can hold the pipes open.
const OUTPUT_DRAIN_TIMEOUT: Duration = Duration::from_millis(500);

/// Spawns composed commands and hands out [`ProcessHandle`]s.
#[derive(Clone)]
pub struct Supervisor<S> {
    signaller: S,
    policy: StopPolicy,
}

impl<S: GroupSignaller> Supervisor<S> {
    pub fn new(signaller: S, policy: StopPolicy) -> Self {
        Self { signaller, policy }
    }

    /// Start `cmd` as leader of its own process group, with stdout and
    /// stderr appended line by line to `log`.
    ///
    /// The environment is exactly `cmd.env()`; nothing else is inherited.
    pub fn spawn(
        &self,
        cmd: &ComposedCommand,
        log: &LogSession,
    ) -> Result<ProcessHandle<S>, SpawnError> {
        let program = cmd.program().ok_or(SpawnError::EmptyCommand)?;

        let mut command = Command::new(program);
        command
            .args(cmd.args())
            .env_clear()
            .envs(cmd.env().iter())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .process_group(0);

        let mut child = command
            .spawn()
            .map_err(|e| SpawnError::from_io(program, e))?;
        let Some(pid) = child.id() else {
            return Err(SpawnError::NoPid {
                program: program.to_string(),
            });
        };
        tracing::info!(pid, program, "process spawned");

        let mut readers = Vec::with_capacity(2);
        if let Some(stdout) = child.stdout.take() {
            readers.push(tokio::spawn(forward(stdout, log.clone(), "stdout")));
        }
        if let Some(stderr) = child.stderr.take() {
            readers.push(tokio::spawn(forward(stderr, log.clone(), "stderr")));
        }

        let exited = Arc::new(AtomicBool::new(false));
        let (exit_tx, exit_rx) = oneshot::channel();
        let waiter_exited = Arc::clone(&exited);
        let waiter_log = log.clone();
        tokio::spawn(async move {
            let status = match child.wait().await {
                Ok(status) => ExitStatus::from(status),
                Err(e) => ExitStatus::Failed(format!("wait failed: {}", e)),
            };
            waiter_exited.store(true, Ordering::SeqCst);
            tracing::info!(pid, %status, "process exited");

            drain(readers).await;
            waiter_log.append_line(EXIT_MARKER);
            let _ = exit_tx.send(status);
        });

        Ok(ProcessHandle {
            pid,
            stopper: Stopper {
                pgid: pid,
                signaller: self.signaller.clone(),
                policy: self.policy.clone(),
                stopping: Arc::new(AtomicBool::new(false)),
                exited,
            },
            exit_rx,
        })
    }
}

/// A running program and its process group.
pub struct ProcessHandle<S> {
    pid: u32,
    stopper: Stopper<S>,
    exit_rx: oneshot::Receiver<ExitStatus>,
}

impl<S: GroupSignaller> ProcessHandle<S> {
    /// Pid of the group leader, which is also the process group id.
    pub fn pid(&self) -> u32 {
        self.pid
    }

    pub fn stopper(&self) -> Stopper<S> {
        self.stopper.clone()
    }

    /// Wait for the program to exit. Never times out.
    pub async fn wait(self) -> ExitStatus {
        self.exit_rx
            .await
            .unwrap_or_else(|_| ExitStatus::Failed("exit waiter ended without a status".to_string()))
    }
}

/// Result of a stop request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopOutcome {
    /// Signals were sent; `last` is the final one delivered
    Signalled { last: StopSignal },
    /// A previous request is handling the stop
    AlreadyStopping,
    /// The program had already exited; nothing was sent
    AlreadyExited,
}

/// Stops a process group: SIGINT, grace period, SIGTERM, and SIGKILL when
/// [`StopPolicy::kill_after`] is set.
///
/// Returning does not mean the program has exited; observe
/// [`ProcessHandle::wait`] for that. Only the first call sends signals.
#[derive(Clone)]
pub struct Stopper<S> {
    pgid: u32,
    signaller: S,
    policy: StopPolicy,
    stopping: Arc<AtomicBool>,
    exited: Arc<AtomicBool>,
}

impl<S: GroupSignaller> Stopper<S> {
    pub fn is_stopping(&self) -> bool {
        self.stopping.load(Ordering::SeqCst)
    }

    pub async fn stop(&self) -> StopOutcome {
        if self.has_exited() {
            return StopOutcome::AlreadyExited;
        }
        if self.stopping.swap(true, Ordering::SeqCst) {
            return StopOutcome::AlreadyStopping;
        }

        self.send(StopSignal::Interrupt);
        tokio::time::sleep(self.policy.grace).await;
        if self.has_exited() {
            return StopOutcome::Signalled {
                last: StopSignal::Interrupt,
            };
        }
        self.send(StopSignal::Terminate);

        let Some(kill_after) = self.policy.kill_after else {
            return StopOutcome::Signalled {
                last: StopSignal::Terminate,
            };
        };
        tokio::time::sleep(kill_after).await;
        if self.has_exited() {
            return StopOutcome::Signalled {
                last: StopSignal::Terminate,
            };
        }
        tracing::warn!(pgid = self.pgid, "process group ignored SIGTERM, killing");
        self.send(StopSignal::Kill);
        StopOutcome::Signalled {
            last: StopSignal::Kill,
        }
    }

    fn has_exited(&self) -> bool {
        self.exited.load(Ordering::SeqCst)
    }

    fn send(&self, signal: StopSignal) {
        if let Err(e) = self.signaller.signal_group(self.pgid, signal) {
            tracing::warn!(pgid = self.pgid, %signal, error = %e, "failed to signal process group");
        }
    }
}

/// Append each line read from `reader` to `log`. Invalid UTF-8 is replaced.
async fn forward<R: AsyncRead + Unpin>(reader: R, log: LogSession, stream: &'static str) {
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf);
                log.append_line(line.trim_end_matches(['\n', '\r']));
            }
            Err(e) => {
                tracing::warn!(stream, error = %e, "output reader failed");
                break;
            }
        }
    }
}

async fn drain(readers: Vec<JoinHandle<()>>) {
    let all = async {
        for reader in readers {
            let _ = reader.await;
        }
    };
    if tokio::time::timeout(OUTPUT_DRAIN_TIMEOUT, all).await.is_err() {
        tracing::debug!("output still open after exit, not waiting for it");
    }
}

#[cfg(test)]
#[path = "supervisor_tests.rs"]
mod tests;
