// SPDX-License-Identifier: MIT
//! The structured log record emitted through a sink chain.

use crate::level::Severity;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// Map of structured fields attached to a record, in insertion order.
pub type FieldMap = serde_json::Map<String, Value>;

/// An immutable-at-emission log record: timestamp, severity, message and a set
/// of structured fields.
///
/// Serializes to a single flat JSON object — `time` (RFC 3339), `level`
/// (uppercase), `msg`, followed by the fields in the order they were added.
#[derive(Debug, Clone, Serialize)]
pub struct Record {
    /// When the record was created.
    #[serde(rename = "time")]
    pub timestamp: DateTime<Utc>,
    /// Record severity.
    #[serde(rename = "level")]
    pub severity: Severity,
    /// Human-readable message text.
    #[serde(rename = "msg")]
    pub message: String,
    /// Structured fields beyond the message.
    #[serde(flatten)]
    pub fields: FieldMap,
}

impl Record {
    /// Create a record stamped with the current time and no fields.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            message: message.into(),
            fields: FieldMap::new(),
        }
    }

    /// Append a structured field. A repeated key overwrites the earlier value.
    pub fn push_field(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(key.into(), value.into());
    }
}
