// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the launch engine

use pl_core::LaunchError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors starting the composed command
#[derive(Debug, Error)]
pub enum SpawnError {
    #[error("nothing to run: composed command is empty")]
    EmptyCommand,
    #[error("{program}: command not found")]
    NotFound { program: String },
    #[error("{program}: permission denied")]
    PermissionDenied { program: String },
    #[error("failed to start {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{program} started but reported no pid")]
    NoPid { program: String },
}

impl SpawnError {
    pub(crate) fn from_io(program: &str, source: std::io::Error) -> Self {
        let program = program.to_string();
        match source.kind() {
            std::io::ErrorKind::NotFound => SpawnError::NotFound { program },
            std::io::ErrorKind::PermissionDenied => SpawnError::PermissionDenied { program },
            _ => SpawnError::Io { program, source },
        }
    }
}

/// Errors managing run log files
#[derive(Debug, Error)]
pub enum LogError {
    #[error("failed to create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to open log file {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("log I/O failed on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that stop a run before anything is spawned
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Options(#[from] LaunchError),
    #[error(transparent)]
    Log(#[from] LogError),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
