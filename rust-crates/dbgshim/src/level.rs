// Copyright The OpenTelemetry Authors
// SPDX-License-Identifier: Apache-2.0

//! Log levels and their output markers.

use std::{fmt, str};

/// Severity of a log line.
///
/// There is no filtering by severity: every level prints whenever the shim is
/// active. The level only decides the marker at the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Regular diagnostic output.
    Debug,
    /// Something looks off but execution continues normally.
    Warning,
    /// Something went wrong.
    Error,
}

impl Level {
    /// All levels, in increasing severity.
    pub const ALL: [Level; 3] = [Level::Debug, Level::Warning, Level::Error];

    /// Glyph printed at the start of every line of this level.
    pub const fn marker(self) -> &'static str {
        match self {
            Level::Debug => "💬",
            Level::Warning => "❗",
            Level::Error => "❌",
        }
    }

    /// Lower-case name of the level.
    pub const fn name(self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Warning => "warning",
            Level::Error => "error",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown level name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level `{0}` (expected debug, warning or error)")]
pub struct ParseLevelError(String);

impl str::FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}
