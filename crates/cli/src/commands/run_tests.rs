// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use pl_core::StopReason;
use std::path::PathBuf;
use std::time::Duration;

fn outcome(status: ExitStatus, pid: Option<u32>) -> RunOutcome {
    RunOutcome {
        status,
        log_path: PathBuf::from("/data/logs/foo.exe-20260314-092653.log"),
        elapsed: Duration::from_secs(75),
        pid,
    }
}

fn exit_code(result: Result<()>) -> Option<i32> {
    result
        .err()
        .map(|e| e.downcast_ref::<ExitError>().map_or(-1, |x| x.code))
}

#[test]
fn event_lines() {
    assert_eq!(
        event_line(&LifecycleEvent::Starting {
            name: "foo".to_string(),
            log_path: PathBuf::from("/l/foo.log"),
        }),
        Some("Launching foo\nLog: /l/foo.log".to_string())
    );
    assert_eq!(
        event_line(&LifecycleEvent::Running { pid: 42 }),
        Some("Running (pid 42)".to_string())
    );
    assert_eq!(
        event_line(&LifecycleEvent::Stopping {
            pid: 42,
            reason: StopReason::Interrupt,
        }),
        Some("Stopping (interrupt)...".to_string())
    );
    assert_eq!(
        event_line(&LifecycleEvent::Exited {
            status: ExitStatus::Exited(0),
            elapsed_ms: 10,
        }),
        None
    );
}

#[yare::parameterized(
    success        = { ExitStatus::Exited(0),   Some(7), None },
    program_failed = { ExitStatus::Exited(3),   Some(7), Some(EXIT_PROGRAM_FAILED) },
    killed         = { ExitStatus::Signaled(2), Some(7), Some(EXIT_PROGRAM_FAILED) },
    spawn_failed   = { ExitStatus::Failed("umu-run: command not found".to_string()), None, Some(EXIT_SPAWN_FAILED) },
    wait_failed    = { ExitStatus::Failed("wait failed".to_string()), Some(7), Some(EXIT_PROGRAM_FAILED) },
)]
fn exit_codes(status: ExitStatus, pid: Option<u32>, expected: Option<i32>) {
    let opts = LaunchOptions::new("/games/foo.exe");
    let result = exit_for(&opts, &outcome(status, pid), OutputFormat::Json);
    assert_eq!(exit_code(result), expected);
}

#[test]
fn spawn_failure_message_names_game() {
    let opts = LaunchOptions::new("/games/foo.exe");
    let err = exit_for(
        &opts,
        &outcome(ExitStatus::Failed("umu-run: command not found".to_string()), None),
        OutputFormat::Text,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "failed to start foo: umu-run: command not found");
}
