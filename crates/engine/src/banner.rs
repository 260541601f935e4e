// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Startup banner and markers written into run logs.

use pl_core::{ComposedCommand, LaunchOptions, Wrapper};

/// Appended once the supervised program has been reaped.
pub const EXIT_MARKER: &str = "--- Process Exited ---";

const START_RULE: &str = "--- EXECUTION START ---";
const END_RULE: &str = "-----------------------";

/// Header written at the top of every run log.
pub fn startup_banner(opts: &LaunchOptions, cmd: &ComposedCommand) -> String {
    let mut lines = vec![
        START_RULE.to_string(),
        format!("COMMAND: {}", cmd.display_line()),
        "ENABLED FEATURES:".to_string(),
    ];

    let features = enabled_features(opts, cmd);
    if features.is_empty() {
        lines.push("  (none)".to_string());
    }
    lines.extend(features.into_iter().map(|f| format!("  [+] {}", f)));

    if !cmd.skipped().is_empty() {
        lines.push("SKIPPED (tool not found):".to_string());
        lines.extend(
            cmd.skipped()
                .iter()
                .map(|w| format!("  [-] {}", w.tool().binary())),
        );
    }

    lines.push(END_RULE.to_string());
    lines.join("\n")
}

fn enabled_features(opts: &LaunchOptions, cmd: &ComposedCommand) -> Vec<String> {
    let mut features = Vec::new();
    if opts.mangohud {
        features.push("MangoHud".to_string());
    }
    if cmd.is_applied(Wrapper::GameMode) {
        features.push("GameMode".to_string());
    }
    if let Some(res) = opts.gamescope.filter(|_| cmd.is_applied(Wrapper::Gamescope)) {
        features.push(format!("Gamescope ({})", res));
    }
    if let Some(fg) = &opts.frame_gen {
        features.push(format!(
            "LSFG-VK (x{}, PerfMode:{})",
            fg.multiplier, fg.performance_mode
        ));
    }
    if let Some(floor) = opts.memory_floor.filter(|_| cmd.is_applied(Wrapper::MemoryFloor)) {
        features.push(format!("Memory Protection (Min: {})", floor));
    }
    features
}

#[cfg(test)]
#[path = "banner_tests.rs"]
mod tests;
