// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validated value objects for launch parameters.
//!
//! Free-text inputs (multiplier, memory floor, gamescope geometry) are parsed
//! once at the boundary and carried through the core as typed values.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing launch parameter values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    #[error("invalid frame multiplier `{0}`: expected an integer from {min} to {max}", min = Multiplier::MIN, max = Multiplier::MAX)]
    InvalidMultiplier(String),
    #[error("invalid memory size `{0}`: expected e.g. 4G, 512M or 25%")]
    InvalidMemorySize(String),
    #[error("invalid {field} `{value}`: expected a positive integer")]
    InvalidDimension { field: &'static str, value: String },
}

/// Frame-generation multiplier (2x, 3x, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Multiplier(u8);

impl Multiplier {
    pub const MIN: u8 = 2;
    pub const MAX: u8 = 20;

    pub fn new(value: u8) -> Result<Self, OptionsError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(OptionsError::InvalidMultiplier(value.to_string()))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<u8> for Multiplier {
    type Error = OptionsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Multiplier> for u8 {
    fn from(m: Multiplier) -> Self {
        m.0
    }
}

impl FromStr for Multiplier {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches(['x', 'X']);
        trimmed
            .parse::<u8>()
            .map_err(|_| OptionsError::InvalidMultiplier(s.to_string()))
            .and_then(|v| Self::new(v).map_err(|_| OptionsError::InvalidMultiplier(s.to_string())))
    }
}

impl fmt::Display for Multiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unit suffix of a [`MemorySize`], in systemd resource-control notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryUnit {
    Bytes,
    Kibi,
    Mebi,
    Gibi,
    Tebi,
    /// Percentage of physical memory
    Percent,
}

impl MemoryUnit {
    fn suffix(self) -> &'static str {
        match self {
            MemoryUnit::Bytes => "",
            MemoryUnit::Kibi => "K",
            MemoryUnit::Mebi => "M",
            MemoryUnit::Gibi => "G",
            MemoryUnit::Tebi => "T",
            MemoryUnit::Percent => "%",
        }
    }

    fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "" | "b" | "B" => Some(MemoryUnit::Bytes),
            "k" | "K" => Some(MemoryUnit::Kibi),
            "m" | "M" => Some(MemoryUnit::Mebi),
            "g" | "G" => Some(MemoryUnit::Gibi),
            "t" | "T" => Some(MemoryUnit::Tebi),
            "%" => Some(MemoryUnit::Percent),
            _ => None,
        }
    }
}

/// A memory quantity accepted by `systemd-run -pMemoryMin=`.
///
/// Displays in canonical form (`4G`, `512M`, `25%`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MemorySize {
    amount: u64,
    unit: MemoryUnit,
}

impl MemorySize {
    pub fn new(amount: u64, unit: MemoryUnit) -> Result<Self, OptionsError> {
        let candidate = Self { amount, unit };
        if amount == 0 || (unit == MemoryUnit::Percent && amount > 100) {
            return Err(OptionsError::InvalidMemorySize(candidate.to_string()));
        }
        Ok(candidate)
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn unit(&self) -> MemoryUnit {
        self.unit
    }
}

impl FromStr for MemorySize {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        let (digits, suffix) = trimmed.split_at(split);
        let invalid = || OptionsError::InvalidMemorySize(s.to_string());

        let amount = digits.parse::<u64>().map_err(|_| invalid())?;
        let unit = MemoryUnit::from_suffix(suffix).ok_or_else(invalid)?;
        Self::new(amount, unit).map_err(|_| invalid())
    }
}

impl TryFrom<String> for MemorySize {
    type Error = OptionsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MemorySize> for String {
    fn from(m: MemorySize) -> Self {
        m.to_string()
    }
}

impl fmt::Display for MemorySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.unit.suffix())
    }
}

/// Gamescope output geometry. Unset fields omit the matching flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<u32>,
}

impl Resolution {
    /// Parse the three raw fields; empty strings become `None`.
    pub fn parse(width: &str, height: &str, refresh: &str) -> Result<Self, OptionsError> {
        Ok(Self {
            width: parse_dimension("width", width)?,
            height: parse_dimension("height", height)?,
            refresh: parse_dimension("refresh rate", refresh)?,
        })
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |v: Option<u32>| v.map_or_else(|| "?".to_string(), |v| v.to_string());
        write!(
            f,
            "{}x{}@{}",
            show(self.width),
            show(self.height),
            show(self.refresh)
        )
    }
}

fn parse_dimension(field: &'static str, raw: &str) -> Result<Option<u32>, OptionsError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<u32>() {
        Ok(v) if v > 0 => Ok(Some(v)),
        _ => Err(OptionsError::InvalidDimension {
            field,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "units_tests.rs"]
mod tests;
