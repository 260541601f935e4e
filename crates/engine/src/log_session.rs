// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-run log files: creation, retention and head truncation.
//!
//! Files live at `{base_dir}/logs/{exe_name}-{YYYYmmdd-HHMMSS}.log`. Every
//! write and every trim goes through one mutex around the file handle, so
//! a trim never interleaves with output being forwarded from the program.

use crate::config::logs_dir;
use crate::error::LogError;
use chrono::{DateTime, Local};
use parking_lot::Mutex;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

/// Result of a trim pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimOutcome {
    /// Already within the ceiling; the file was not touched
    Unchanged { lines: usize },
    Trimmed { removed: usize, kept: usize },
}

/// The active log file of one run. Clones share the same file handle.
#[derive(Clone, Debug)]
pub struct LogSession {
    inner: Arc<SessionFile>,
}

#[derive(Debug)]
struct SessionFile {
    path: PathBuf,
    file: Mutex<File>,
}

impl LogSession {
    /// Open a fresh log for `exe_name` under `{base_dir}/logs`, first
    /// deleting the oldest logs beyond `retain`.
    pub fn open(base_dir: &Path, exe_name: &str, retain: usize) -> Result<Self, LogError> {
        Self::open_at(base_dir, exe_name, retain, Local::now())
    }

    pub fn open_at(
        base_dir: &Path,
        exe_name: &str,
        retain: usize,
        started: DateTime<Local>,
    ) -> Result<Self, LogError> {
        let dir = logs_dir(base_dir);
        fs::create_dir_all(&dir).map_err(|source| LogError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        sweep_retention(&dir, retain)?;

        let path = unique_path(&dir, exe_name, started);
        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&path)
            .map_err(|source| LogError::Open {
                path: path.clone(),
                source,
            })?;

        tracing::info!(path = %path.display(), "log session opened");
        Ok(Self {
            inner: Arc::new(SessionFile {
                path,
                file: Mutex::new(file),
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Append one line. Failures are reported via tracing and otherwise ignored.
    pub fn append_line(&self, line: &str) {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        if let Err(e) = self.inner.file.lock().write_all(buf.as_bytes()) {
            tracing::warn!(path = %self.inner.path.display(), error = %e, "failed to write log line");
        }
    }

    /// Append a multi-line block (startup banner, exit marker).
    pub fn write_banner(&self, banner: &str) {
        let mut text = banner.trim_end_matches('\n').to_string();
        text.push('\n');
        let mut file = self.inner.file.lock();
        if let Err(e) = file.write_all(text.as_bytes()) {
            tracing::warn!(path = %self.inner.path.display(), error = %e, "failed to write log banner");
        }
    }

    /// Keep only the last `max_lines` lines, rewriting the file in place.
    ///
    /// A file at or under the ceiling is left byte-for-byte untouched.
    pub fn trim(&self, max_lines: usize) -> Result<TrimOutcome, LogError> {
        let io_err = |source| LogError::Io {
            path: self.inner.path.clone(),
            source,
        };
        let mut file = self.inner.file.lock();

        let mut content = Vec::new();
        file.seek(SeekFrom::Start(0)).map_err(io_err)?;
        file.read_to_end(&mut content).map_err(io_err)?;

        let lines = content.split_inclusive(|b| *b == b'\n').count();
        if max_lines == 0 || lines <= max_lines {
            return Ok(TrimOutcome::Unchanged { lines });
        }

        let removed = lines - max_lines;
        let cut = content
            .split_inclusive(|b| *b == b'\n')
            .take(removed)
            .map(<[u8]>::len)
            .sum::<usize>();

        file.set_len(0).map_err(io_err)?;
        file.write_all(&content[cut..]).map_err(io_err)?;
        file.flush().map_err(io_err)?;

        Ok(TrimOutcome::Trimmed {
            removed,
            kept: max_lines,
        })
    }
}

/// Log file name for a run started at `started`.
pub fn log_file_name(exe_name: &str, started: DateTime<Local>) -> String {
    format!("{}-{}.log", exe_name, started.format("%Y%m%d-%H%M%S"))
}

/// Two launches within the same second get `-1`, `-2`, ... suffixes.
fn unique_path(dir: &Path, exe_name: &str, started: DateTime<Local>) -> PathBuf {
    let name = log_file_name(exe_name, started);
    let first = dir.join(&name);
    if !first.exists() {
        return first;
    }
    let stem = name.trim_end_matches(".log");
    (1..)
        .map(|n| dir.join(format!("{}-{}.log", stem, n)))
        .find(|p| !p.exists())
        .unwrap_or(first)
}

/// A log file found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub path: PathBuf,
    pub modified: SystemTime,
    pub size: u64,
}

/// All `*.log` files in `dir`, newest first. A missing directory is empty.
pub fn list_logs(dir: &Path) -> Result<Vec<LogEntry>, LogError> {
    let mut entries = scan(dir)?;
    entries.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| b.path.cmp(&a.path)));
    Ok(entries)
}

/// Delete the oldest `*.log` files in `dir` so at most `keep` remain.
///
/// Returns the deleted paths, oldest first. Individual delete failures are
/// logged and skipped.
pub fn sweep_retention(dir: &Path, keep: usize) -> Result<Vec<PathBuf>, LogError> {
    let mut entries = scan(dir)?;
    if entries.len() <= keep {
        return Ok(Vec::new());
    }
    entries.sort_by(|a, b| a.modified.cmp(&b.modified).then_with(|| a.path.cmp(&b.path)));

    let excess = entries.len() - keep;
    let mut deleted = Vec::with_capacity(excess);
    for entry in entries.into_iter().take(excess) {
        match fs::remove_file(&entry.path) {
            Ok(()) => deleted.push(entry.path),
            Err(e) => {
                tracing::warn!(path = %entry.path.display(), error = %e, "failed to delete old log")
            }
        }
    }
    tracing::debug!(dir = %dir.display(), deleted = deleted.len(), "log retention sweep");
    Ok(deleted)
}

fn scan(dir: &Path) -> Result<Vec<LogEntry>, LogError> {
    let read_dir = match fs::read_dir(dir) {
        Ok(rd) => rd,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(LogError::Io {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    let mut entries = Vec::new();
    for entry in read_dir.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("log") {
            continue;
        }
        let Ok(meta) = entry.metadata() else { continue };
        if !meta.is_file() {
            continue;
        }
        entries.push(LogEntry {
            path,
            modified: meta.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            size: meta.len(),
        });
    }
    Ok(entries)
}

#[cfg(test)]
#[path = "log_session_tests.rs"]
mod tests;
