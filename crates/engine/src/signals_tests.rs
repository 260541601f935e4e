// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;
use std::time::Duration;

#[tokio::test]
async fn channel_source_yields_requests_then_closes() {
    let (tx, mut source) = ChannelSignals::new();
    tx.send(StopReason::Terminate).await.unwrap();
    tx.send(StopReason::Interrupt).await.unwrap();
    drop(tx);

    assert_eq!(source.recv().await, Some(StopReason::Terminate));
    assert_eq!(source.recv().await, Some(StopReason::Interrupt));
    assert_eq!(source.recv().await, None);
}

#[tokio::test]
async fn no_signals_is_closed() {
    assert_eq!(NoSignals.recv().await, None);
}

#[tokio::test]
#[serial(process_signals)]
async fn unix_source_maps_sigterm() {
    let mut source = UnixSignals::install().unwrap();
    let me = nix::unistd::Pid::this();
    nix::sys::signal::kill(me, nix::sys::signal::Signal::SIGTERM).unwrap();

    let got = tokio::time::timeout(Duration::from_secs(5), source.recv())
        .await
        .unwrap();
    assert_eq!(got, Some(StopReason::Terminate));
}

#[tokio::test]
#[serial(process_signals)]
async fn unix_source_maps_sigint() {
    let mut source = UnixSignals::install().unwrap();
    let me = nix::unistd::Pid::this();
    nix::sys::signal::kill(me, nix::sys::signal::Signal::SIGINT).unwrap();

    let got = tokio::time::timeout(Duration::from_secs(5), source.recv())
        .await
        .unwrap();
    assert_eq!(got, Some(StopReason::Interrupt));
}
