// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[yare::parameterized(
    zero      = { 0, "0B" },
    bytes     = { 1023, "1023B" },
    kibi      = { 1024, "1.0K" },
    fraction  = { 1536, "1.5K" },
    mebi      = { 5 * 1024 * 1024, "5.0M" },
    gibi      = { 3 * 1024 * 1024 * 1024, "3.0G" },
)]
fn sizes(bytes: u64, expected: &str) {
    assert_eq!(format_size(bytes), expected);
}

#[test]
fn default_format_is_text() {
    assert_eq!(OutputFormat::default(), OutputFormat::Text);
}
