// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn defaults() {
    let config = RunConfig::new("/data/proton-launch");
    assert_eq!(config.log.retain, 10);
    assert_eq!(config.log.max_lines, 500);
    assert_eq!(config.log.trim_interval, Duration::from_secs(30));
    assert_eq!(config.stop.grace, Duration::from_millis(200));
    assert_eq!(config.stop.kill_after, None);
    assert_eq!(config.exit_grace, Duration::from_secs(1));
    assert!(!config.show_logs);
}

#[test]
fn derived_paths() {
    let config = RunConfig::new("/data/proton-launch");
    assert_eq!(config.logs_dir(), PathBuf::from("/data/proton-launch/logs"));
    assert_eq!(config.lsfg_layer_dir(), PathBuf::from("/data/proton-launch/tools/lsfg"));
    assert_eq!(config.debug_log_path(), PathBuf::from("/data/proton-launch/debug.log"));
}
