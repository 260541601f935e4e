// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Composed launch commands: argv, environment and the wrappers involved.

use crate::units::MemorySize;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// External programs the launcher knows how to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    Gamescope,
    GameModeRun,
    MangoHud,
    SystemdRun,
    UmuRun,
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::Gamescope,
        Tool::GameModeRun,
        Tool::MangoHud,
        Tool::SystemdRun,
        Tool::UmuRun,
    ];

    /// Executable name looked up on `PATH`.
    pub fn binary(self) -> &'static str {
        match self {
            Tool::Gamescope => "gamescope",
            Tool::GameModeRun => "gamemoderun",
            Tool::MangoHud => "mangohud",
            Tool::SystemdRun => "systemd-run",
            Tool::UmuRun => "umu-run",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

/// Optional wrapper programs placed around the runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wrapper {
    Gamescope,
    GameMode,
    MemoryFloor,
}

impl Wrapper {
    pub fn tool(self) -> Tool {
        match self {
            Wrapper::Gamescope => Tool::Gamescope,
            Wrapper::GameMode => Tool::GameModeRun,
            Wrapper::MemoryFloor => Tool::SystemdRun,
        }
    }
}

/// Ordered environment variable set. Keys are unique; the last write wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvSet(IndexMap<String, String>);

impl EnvSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Overlay every entry of `other`, replacing existing values.
    pub fn merge(&mut self, other: &EnvSet) {
        for (k, v) in other.iter() {
            self.set(k, v);
        }
    }

    /// Entries rendered as `KEY=VALUE` tokens, in insertion order.
    pub fn to_assignments(&self) -> Vec<String> {
        self.iter().map(|(k, v)| format!("{}={}", k, v)).collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = EnvSet::new();
        for (k, v) in iter {
            set.set(k, v);
        }
        set
    }
}

/// A fully composed launch: argv plus the complete process environment.
///
/// Built once per launch by the composer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedCommand {
    argv: Vec<String>,
    env: EnvSet,
    overrides: EnvSet,
    applied: Vec<Wrapper>,
    skipped: Vec<Wrapper>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    memory_floor: Option<MemorySize>,
}

impl ComposedCommand {
    /// Assemble a command. `env` is the inherited environment; `overrides`
    /// are layered on top of it and remembered for display.
    pub fn new(argv: Vec<String>, inherited: EnvSet, overrides: EnvSet) -> Self {
        let mut env = inherited;
        env.merge(&overrides);
        Self {
            argv,
            env,
            overrides,
            applied: Vec::new(),
            skipped: Vec::new(),
            memory_floor: None,
        }
    }

    pub fn with_wrappers(mut self, applied: Vec<Wrapper>, skipped: Vec<Wrapper>) -> Self {
        self.applied = applied;
        self.skipped = skipped;
        self
    }

    pub fn with_memory_floor(mut self, floor: Option<MemorySize>) -> Self {
        self.memory_floor = floor;
        self
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn program(&self) -> Option<&str> {
        self.argv.first().map(String::as_str)
    }

    pub fn args(&self) -> &[String] {
        self.argv.get(1..).unwrap_or(&[])
    }

    /// Complete environment for the child process.
    pub fn env(&self) -> &EnvSet {
        &self.env
    }

    /// Only the variables the composer set.
    pub fn overrides(&self) -> &EnvSet {
        &self.overrides
    }

    /// Wrappers present in argv, innermost last.
    pub fn applied(&self) -> &[Wrapper] {
        &self.applied
    }

    /// Wrappers that were requested but whose tool is missing.
    pub fn skipped(&self) -> &[Wrapper] {
        &self.skipped
    }

    pub fn is_applied(&self, wrapper: Wrapper) -> bool {
        self.applied.contains(&wrapper)
    }

    /// Single-line rendering for banners and `show`.
    pub fn display_line(&self) -> String {
        let mut parts = Vec::new();
        if let Some(floor) = self.memory_floor.filter(|_| self.is_applied(Wrapper::MemoryFloor)) {
            parts.push(format!("[MemMin:{}]", floor));
        }
        parts.extend(
            self.overrides
                .iter()
                .map(|(k, v)| format!("{}={}", k, quote(v))),
        );
        parts.extend(self.argv.iter().map(|a| quote(a)));
        parts.join(" ")
    }
}

impl fmt::Display for ComposedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_line())
    }
}

fn quote(token: &str) -> String {
    if !token.is_empty() && !token.contains(|c: char| c.is_whitespace() || c == '\'') {
        return token.to_string();
    }
    format!("'{}'", token.replace('\'', r"'\''"))
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
