// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod logs;
pub mod run;
pub mod show;
pub mod tools;

use crate::exit_error::{ExitError, EXIT_USAGE};
use crate::launch::LaunchArgs;
use pl_core::LaunchOptions;
use std::path::Path;

/// Launch flags to validated options; failures are usage errors.
pub(crate) fn launch_options(args: &LaunchArgs, layer_dir: &Path) -> Result<LaunchOptions, ExitError> {
    let opts = args
        .to_options(layer_dir)
        .map_err(|e| ExitError::new(EXIT_USAGE, e.to_string()))?;
    opts.validate()
        .map_err(|e| ExitError::new(EXIT_USAGE, e.to_string()))?;
    Ok(opts)
}
