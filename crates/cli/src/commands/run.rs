// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `proton-launch run` - launch a game and supervise it until it exits

use anyhow::{Context, Result};
use clap::Args;
use pl_adapters::{
    DesktopNotifyAdapter, KillpgSignaller, NoOpNotifyAdapter, NotifyAdapter, PathProbe,
    TerminalLogViewer, TracedSignaller, TracedViewer,
};
use pl_core::{format_elapsed, ExitStatus, LaunchOptions, LifecycleEvent};
use pl_engine::{Composer, ControlLoop, RunConfig, RunDeps, RunError, RunOutcome, UnixSignals};
use tokio::sync::mpsc;

use crate::config::Settings;
use crate::exit_error::{ExitError, EXIT_PROGRAM_FAILED, EXIT_SPAWN_FAILED, EXIT_USAGE};
use crate::launch::LaunchArgs;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub launch: LaunchArgs,

    /// Open a terminal following the run log
    #[arg(long)]
    pub logs: bool,
}

pub async fn handle(args: RunArgs, settings: Settings, format: OutputFormat) -> Result<()> {
    let mut config = settings.run;
    config.show_logs |= args.logs;
    let opts = super::launch_options(&args.launch, &config.lsfg_layer_dir())?;

    let outcome = if settings.notifications {
        execute(&opts, config, DesktopNotifyAdapter::new(), format).await?
    } else {
        execute(&opts, config, NoOpNotifyAdapter::new(), format).await?
    };

    exit_for(&opts, &outcome, format)
}

async fn execute<N: NotifyAdapter>(
    opts: &LaunchOptions,
    config: RunConfig,
    notifier: N,
    format: OutputFormat,
) -> Result<RunOutcome> {
    let probe = PathProbe::from_env();
    let deps = RunDeps {
        composer: Composer::new(probe.clone()),
        signaller: TracedSignaller::new(KillpgSignaller::new()),
        notifier,
        viewer: TracedViewer::new(TerminalLogViewer::new(probe)),
    };

    let (tx, rx) = mpsc::channel(16);
    let printer = tokio::spawn(print_events(rx, format));
    let signals = UnixSignals::install().context("failed to install signal handlers")?;

    let result = ControlLoop::new(deps, config)
        .with_events(tx)
        .run(opts, signals)
        .await;
    // The loop owned the sender; the printer ends once it has drained
    let _ = printer.await;

    result.map_err(|e| match e {
        RunError::Options(e) => ExitError::new(EXIT_USAGE, e.to_string()).into(),
        other => anyhow::Error::new(other),
    })
}

async fn print_events(mut rx: mpsc::Receiver<LifecycleEvent>, format: OutputFormat) {
    while let Some(event) = rx.recv().await {
        match format {
            OutputFormat::Json => match serde_json::to_string(&event) {
                Ok(line) => println!("{}", line),
                Err(e) => tracing::warn!(error = %e, "failed to encode lifecycle event"),
            },
            OutputFormat::Text => {
                if let Some(line) = event_line(&event) {
                    println!("{}", line);
                }
            }
        }
    }
}

/// Progress line for text output. The exit is reported by the summary.
pub(crate) fn event_line(event: &LifecycleEvent) -> Option<String> {
    match event {
        LifecycleEvent::Starting { name, log_path } => {
            Some(format!("Launching {}\nLog: {}", name, log_path.display()))
        }
        LifecycleEvent::Running { pid } => Some(format!("Running (pid {})", pid)),
        LifecycleEvent::Stopping { reason, .. } => Some(format!("Stopping ({})...", reason)),
        LifecycleEvent::Exited { .. } => None,
    }
}

/// Map the outcome to the process exit code, printing the text summary.
pub(crate) fn exit_for(opts: &LaunchOptions, outcome: &RunOutcome, format: OutputFormat) -> Result<()> {
    if let ExitStatus::Failed(reason) = &outcome.status {
        if !outcome.spawned() {
            return Err(ExitError::new(
                EXIT_SPAWN_FAILED,
                format!("failed to start {}: {}", opts.display_name(), reason),
            )
            .into());
        }
    }

    if format == OutputFormat::Text {
        println!(
            "{} {} after {}",
            opts.display_name(),
            outcome.status,
            format_elapsed(outcome.elapsed)
        );
    }

    if outcome.is_success() {
        Ok(())
    } else {
        Err(ExitError::silent(EXIT_PROGRAM_FAILED).into())
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
