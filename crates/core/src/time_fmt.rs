// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable run durations.

use std::time::Duration;

/// Format a run duration: `"850ms"`, `"42s"`, `"3m12s"`, `"1h5m"`.
///
/// Sub-second runs keep millisecond precision since they usually mean the
/// program failed right away.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs == 0 {
        return format!("{}ms", elapsed.as_millis());
    }
    if secs < 60 {
        return format!("{}s", secs);
    }
    if secs < 3600 {
        let s = secs % 60;
        return if s > 0 {
            format!("{}m{}s", secs / 60, s)
        } else {
            format!("{}m", secs / 60)
        };
    }
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    if m > 0 {
        format!("{}h{}m", h, m)
    } else {
        format!("{}h", h)
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
