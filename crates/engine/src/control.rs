// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Control loop: drives one run through its lifecycle.
//!
//! ```text
//! Starting ──spawn ok──▶ Running ──stop request──▶ Stopping
//!    │                      │                          │
//!    └──spawn failed──▶ Exited ◀──────process exit─────┘
//! ```
//!
//! Stop requests (host or OS signal) only ask the supervisor to stop. The
//! process exit observed by the waiter is the only way into `Exited`.

use crate::banner::startup_banner;
use crate::compose::Composer;
use crate::config::RunConfig;
use crate::error::RunError;
use crate::log_session::LogSession;
use crate::signals::SignalSource;
use crate::supervisor::{StopOutcome, Supervisor};
use crate::trim_ticker::TrimTicker;
use pl_adapters::{GroupSignaller, LogViewer, NotifyAdapter, ToolProbe};
use pl_core::{
    format_elapsed, ExitStatus, LaunchOptions, LifecycleEvent, LifecycleState, StopReason,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// Title of the launch notification
pub const LAUNCH_TITLE: &str = "proton-launch";
pub const LAUNCH_ERROR_TITLE: &str = "Launch Error";
pub const EXITED_TITLE: &str = "Process Exited";

/// External collaborators of a run
#[derive(Clone)]
pub struct RunDeps<P, S, N, V> {
    pub composer: Composer<P>,
    pub signaller: S,
    pub notifier: N,
    pub viewer: V,
}

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutcome {
    pub status: ExitStatus,
    pub log_path: PathBuf,
    pub elapsed: Duration,
    /// `None` when the program never started
    pub pid: Option<u32>,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn spawned(&self) -> bool {
        self.pid.is_some()
    }
}

/// Asks the current run to stop. Cloneable and usable from any task.
///
/// A request made before the program is running stops it as soon as it
/// starts.
#[derive(Clone)]
pub struct StopRequester {
    notify: Arc<Notify>,
}

impl StopRequester {
    pub fn request(&self) {
        self.notify.notify_one();
    }
}

pub struct ControlLoop<P, S, N, V> {
    deps: RunDeps<P, S, N, V>,
    config: RunConfig,
    events: Option<mpsc::Sender<LifecycleEvent>>,
    stop: Arc<Notify>,
}

impl<P, S, N, V> ControlLoop<P, S, N, V>
where
    P: ToolProbe,
    S: GroupSignaller,
    N: NotifyAdapter,
    V: LogViewer,
{
    pub fn new(deps: RunDeps<P, S, N, V>, config: RunConfig) -> Self {
        Self {
            deps,
            config,
            events: None,
            stop: Arc::new(Notify::new()),
        }
    }

    /// Emit lifecycle events on `tx` as the run progresses.
    pub fn with_events(mut self, tx: mpsc::Sender<LifecycleEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn stop_requester(&self) -> StopRequester {
        StopRequester {
            notify: Arc::clone(&self.stop),
        }
    }

    /// Launch `opts` and supervise it until it exits.
    ///
    /// Errors only when nothing could be started at all (invalid options,
    /// log file unavailable). A program that fails to spawn or exits
    /// unsuccessfully is reported through [`RunOutcome::status`].
    pub async fn run<Src: SignalSource>(
        &self,
        opts: &LaunchOptions,
        mut signals: Src,
    ) -> Result<RunOutcome, RunError> {
        opts.validate()?;
        let started = Instant::now();
        let name = opts.display_name();
        let launcher = opts.launcher_name();

        let cmd = self.deps.composer.compose(opts);
        let log = LogSession::open(
            &self.config.base_dir,
            &opts.log_base_name(),
            self.config.log.retain,
        )?;
        log.write_banner(&startup_banner(opts, &cmd));
        let log_path = log.path().to_path_buf();

        let mut state = LifecycleState::Starting;
        tracing::info!(game = %name, log = %log_path.display(), "starting run");
        self.emit(LifecycleEvent::Starting {
            name: name.clone(),
            log_path: log_path.clone(),
        })
        .await;
        self.notify(LAUNCH_TITLE, &format!("Launching {} ({})...", name, launcher))
            .await;

        let supervisor = Supervisor::new(self.deps.signaller.clone(), self.config.stop.clone());
        let handle = match supervisor.spawn(&cmd, &log) {
            Ok(handle) => handle,
            Err(e) => {
                tracing::error!(error = %e, "spawn failed");
                log.append_line(&format!("ERROR: {}", e));
                self.notify(
                    LAUNCH_ERROR_TITLE,
                    &format!("Failed to start {} ({}): {}", name, launcher, e),
                )
                .await;
                advance(&mut state, LifecycleState::Exited);
                let status = ExitStatus::Failed(e.to_string());
                let elapsed = started.elapsed();
                self.emit(LifecycleEvent::Exited {
                    status: status.clone(),
                    elapsed_ms: elapsed.as_millis() as u64,
                })
                .await;
                return Ok(RunOutcome {
                    status,
                    log_path,
                    elapsed,
                    pid: None,
                });
            }
        };

        let pid = handle.pid();
        advance(&mut state, LifecycleState::Running);
        self.emit(LifecycleEvent::Running { pid }).await;

        let ticker = TrimTicker::start(
            log.clone(),
            self.config.log.max_lines,
            self.config.log.trim_interval,
        );
        if self.config.show_logs {
            if let Err(e) = self.deps.viewer.open(&log_path, pid).await {
                tracing::debug!(error = %e, "log viewer not opened");
            }
        }

        let stopper = handle.stopper();
        let wait = handle.wait();
        tokio::pin!(wait);
        let mut stop_task: Option<JoinHandle<StopOutcome>> = None;
        let mut signals_open = true;

        let status = loop {
            let reason = tokio::select! {
                status = &mut wait => break status,
                _ = self.stop.notified() => StopReason::User,
                got = signals.recv(), if signals_open => match got {
                    Some(reason) => reason,
                    None => {
                        signals_open = false;
                        continue;
                    }
                },
            };

            if state != LifecycleState::Running {
                tracing::debug!(%reason, "stop already in progress");
                continue;
            }
            advance(&mut state, LifecycleState::Stopping);
            tracing::info!(pid, %reason, "stopping");
            self.emit(LifecycleEvent::Stopping { pid, reason }).await;
            let stopper = stopper.clone();
            stop_task = Some(tokio::spawn(async move { stopper.stop().await }));
        };

        advance(&mut state, LifecycleState::Exited);
        if let Some(task) = stop_task {
            task.abort();
        }
        ticker.shutdown().await;

        let elapsed = started.elapsed();
        tracing::info!(pid, %status, elapsed_ms = elapsed.as_millis() as u64, "run finished");
        self.notify(
            EXITED_TITLE,
            &format!("{} exited after {}: {}", name, format_elapsed(elapsed), status),
        )
        .await;
        self.emit(LifecycleEvent::Exited {
            status: status.clone(),
            elapsed_ms: elapsed.as_millis() as u64,
        })
        .await;

        tokio::time::sleep(self.config.exit_grace).await;

        Ok(RunOutcome {
            status,
            log_path,
            elapsed,
            pid: Some(pid),
        })
    }

    async fn emit(&self, event: LifecycleEvent) {
        if let Some(tx) = &self.events {
            if tx.send(event).await.is_err() {
                tracing::debug!("lifecycle event receiver dropped");
            }
        }
    }

    async fn notify(&self, title: &str, message: &str) {
        if let Err(e) = self.deps.notifier.notify(title, message).await {
            tracing::warn!(error = %e, title, "notification failed");
        }
    }
}

fn advance(state: &mut LifecycleState, to: LifecycleState) {
    match state.transition(to) {
        Ok(next) => *state = next,
        Err(e) => tracing::warn!(error = %e, "ignoring lifecycle transition"),
    }
}

#[cfg(test)]
#[path = "control_tests.rs"]
mod tests;
