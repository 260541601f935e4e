// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[tokio::test]
async fn noop_notify_discards() {
    let adapter = NoOpNotifyAdapter::new();
    assert!(adapter.notify("Launch Error", "Failed to start foo").await.is_ok());
}
