// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::os::unix::process::{CommandExt, ExitStatusExt};
use std::process::Command;

#[yare::parameterized(
    zero     = { 0 },
    init     = { 1 },
    overflow = { u32::MAX },
)]
fn refuses_reserved_groups(pgid: u32) {
    let err = KillpgSignaller::new()
        .signal_group(pgid, StopSignal::Terminate)
        .unwrap_err();
    assert!(matches!(err, SignalError::InvalidGroup(p) if p == pgid));
}

#[test]
fn terminate_reaches_group_leader() {
    let mut child = Command::new("sleep")
        .arg("30")
        .process_group(0)
        .spawn()
        .unwrap();

    KillpgSignaller::new()
        .signal_group(child.id(), StopSignal::Terminate)
        .unwrap();

    let status = child.wait().unwrap();
    assert_eq!(status.signal(), Some(15));
}

#[test]
fn vanished_group_is_not_an_error() {
    let mut child = Command::new("true").process_group(0).spawn().unwrap();
    let pgid = child.id();
    child.wait().unwrap();

    assert!(KillpgSignaller::new()
        .signal_group(pgid, StopSignal::Interrupt)
        .is_ok());
}

#[test]
fn signal_names() {
    assert_eq!(StopSignal::Interrupt.to_string(), "SIGINT");
    assert_eq!(StopSignal::Terminate.to_string(), "SIGTERM");
    assert_eq!(StopSignal::Kill.to_string(), "SIGKILL");
}
