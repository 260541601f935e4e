// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal-emulator log viewer running a filtered `tail -f`.

use super::{LogViewer, ViewerError};
use crate::probe::ToolProbe;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Terminal emulators tried in order when `$TERMINAL` is unset or missing.
pub const TERMINALS: [&str; 6] = [
    "kitty",
    "alacritty",
    "gnome-terminal",
    "konsole",
    "xfce4-terminal",
    "xterm",
];

/// Log lines that flood the view without saying anything useful.
const NOISE: &str = "setpriority|vk_xwayland_wait_ready|vk_wsi_force_swapchain";

#[derive(Clone, Debug)]
pub struct TerminalLogViewer<P> {
    probe: P,
    preferred: Option<String>,
}

impl<P: ToolProbe> TerminalLogViewer<P> {
    /// Viewer honouring `$TERMINAL`.
    pub fn new(probe: P) -> Self {
        Self::with_preferred(probe, crate::env::terminal())
    }

    pub fn with_preferred(probe: P, preferred: Option<String>) -> Self {
        Self { probe, preferred }
    }

    /// First usable terminal: the preferred one, then the fallback list.
    pub fn find_terminal(&self) -> Option<PathBuf> {
        let preferred = self
            .preferred
            .as_deref()
            .and_then(|t| t.split_whitespace().next());
        preferred
            .into_iter()
            .chain(TERMINALS)
            .find_map(|t| self.probe.locate(t))
    }
}

/// Shell script that replays the log so far, then follows it until `pid`
/// exits, and waits for Enter before the window closes.
pub fn tail_script(log_path: &Path, pid: u32) -> String {
    let log = shell_quote(&log_path.to_string_lossy());
    format!(
        "sleep 0.2; \
         grep -E -v '{noise}' {log}; \
         tail --pid {pid} -n 0 -f {log} | grep --line-buffered -E -v '{noise}'; \
         echo; echo '----------------------------------------'; \
         echo 'Process finished. Press Enter to close...'; read _",
        noise = NOISE,
        log = log,
        pid = pid,
    )
}

/// Arguments for running `script` under `bash -c` in `terminal`.
///
/// kitty and alacritty take the command after `--`; the rest use `-e`.
pub fn terminal_command(terminal: &Path, script: &str) -> Vec<String> {
    let name = terminal
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let separator = match name.as_str() {
        "kitty" | "alacritty" => "--",
        _ => "-e",
    };
    vec![
        separator.to_string(),
        "bash".to_string(),
        "-c".to_string(),
        script.to_string(),
    ]
}

fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

#[async_trait]
impl<P: ToolProbe> LogViewer for TerminalLogViewer<P> {
    async fn open(&self, log_path: &Path, pid: u32) -> Result<(), ViewerError> {
        let terminal = self.find_terminal().ok_or(ViewerError::NoTerminal)?;
        let args = terminal_command(&terminal, &tail_script(log_path, pid));

        let child = Command::new(&terminal)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ViewerError::SpawnFailed {
                terminal: terminal.display().to_string(),
                reason: e.to_string(),
            })?;

        tracing::info!(
            terminal = %terminal.display(),
            viewer_pid = child.id(),
            pid,
            "log viewer opened"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "terminal_tests.rs"]
mod tests;
