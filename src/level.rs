// SPDX-License-Identifier: MIT
//! Log severity levels and the textual level parser.

use serde::Serialize;
use std::fmt;

/// Severity of a log record, ordered from most to least verbose.
///
/// The derived [`Ord`] gives `Debug < Info < Warn < Error`; a sink suppresses
/// records whose severity is below its configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Detailed information useful during development.
    Debug,
    /// General informational messages.
    Info,
    /// Potential issues that do not prevent normal operation.
    Warn,
    /// Failures that require attention.
    Error,
}

impl Severity {
    /// Wire form of the severity, as it appears in emitted records.
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a textual level name to a [`Severity`].
///
/// Input is trimmed and matched case-insensitively against `debug`, `info`,
/// `warn` and `error`. Anything else, including the empty string, resolves to
/// [`Severity::Info`]; an unset or misspelled `LOG_LEVEL` must never prevent a
/// service from logging.
///
/// # Examples
/// ```
/// use ctxlog::{parse_level, Severity};
/// assert_eq!(parse_level(" DEBUG "), Severity::Debug);
/// assert_eq!(parse_level("bogus-level"), Severity::Info);
/// ```
pub fn parse_level(text: &str) -> Severity {
    match text.trim().to_ascii_lowercase().as_str() {
        "debug" => Severity::Debug,
        "info" => Severity::Info,
        "warn" => Severity::Warn,
        "error" => Severity::Error,
        _ => Severity::Info,
    }
}
