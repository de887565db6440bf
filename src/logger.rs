// SPDX-License-Identifier: MIT
//! Logger handles and the process-wide default slot.

use crate::level::Severity;
use crate::record::{FieldMap, Record};
use crate::sink::{JsonSink, Sink, TraceSink};
use opentelemetry::Context;
use serde_json::Value;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

/// A cheaply cloneable handle over a sink chain, with optional pre-bound
/// structured fields.
///
/// Loggers are immutable; [`Logger::with_fields`] derives a sub-logger by
/// copy-on-extend, leaving the parent untouched. Clones share the sink.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn Sink>,
    fields: FieldMap,
}

impl Logger {
    /// Logger over the given sink with no pre-bound fields.
    pub fn new(sink: impl Sink + 'static) -> Self {
        Self {
            sink: Arc::new(sink),
            fields: FieldMap::new(),
        }
    }

    /// Derive a sub-logger carrying additional pre-bound fields.
    ///
    /// Every record emitted through the sub-logger includes these fields
    /// before any per-call fields.
    pub fn with_fields(&self, fields: &[(&str, Value)]) -> Logger {
        let mut bound = self.fields.clone();
        for (key, value) in fields {
            bound.insert((*key).to_owned(), value.clone());
        }
        Logger {
            sink: Arc::clone(&self.sink),
            fields: bound,
        }
    }

    /// Emit one record at `severity`, carrying the caller's context through
    /// the sink chain.
    ///
    /// Pre-bound fields are applied first, then per-call fields; a per-call
    /// field with the same key overrides the pre-bound one. Returns without
    /// building the record when the sink reports the severity disabled.
    pub fn log(&self, cx: &Context, severity: Severity, message: &str, fields: &[(&str, Value)]) {
        if !self.sink.enabled(severity) {
            return;
        }
        let mut record = Record::new(severity, message);
        for (key, value) in &self.fields {
            record.fields.insert(key.clone(), value.clone());
        }
        for (key, value) in fields {
            record.push_field(*key, value.clone());
        }
        self.sink.emit(cx, record);
    }

    /// Emit at [`Severity::Debug`].
    pub fn debug(&self, cx: &Context, message: &str, fields: &[(&str, Value)]) {
        self.log(cx, Severity::Debug, message, fields);
    }

    /// Emit at [`Severity::Info`].
    pub fn info(&self, cx: &Context, message: &str, fields: &[(&str, Value)]) {
        self.log(cx, Severity::Info, message, fields);
    }

    /// Emit at [`Severity::Warn`].
    pub fn warn(&self, cx: &Context, message: &str, fields: &[(&str, Value)]) {
        self.log(cx, Severity::Warn, message, fields);
    }

    /// Emit at [`Severity::Error`].
    pub fn error(&self, cx: &Context, message: &str, fields: &[(&str, Value)]) {
        self.log(cx, Severity::Error, message, fields);
    }
}

// Before any setup runs, the default is an info-level stdout pipeline with
// per-record trace enrichment, so early log calls are never lost.
static DEFAULT: LazyLock<RwLock<Logger>> = LazyLock::new(|| {
    RwLock::new(Logger::new(TraceSink::new(JsonSink::stdout(Severity::Info))))
});

// Tests that install a default hold this so they never race on the slot.
#[cfg(test)]
pub(crate) static SETUP_GUARD: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// Install `logger` as the process-wide default, replacing any prior one.
///
/// Last call wins. Intended to be called once during startup, before
/// concurrent logging begins; callers must serialize invocations.
pub fn set_default(logger: Logger) {
    let mut slot = DEFAULT.write().unwrap_or_else(PoisonError::into_inner);
    *slot = logger;
}

/// Handle to the current process-wide default logger.
pub fn default_logger() -> Logger {
    DEFAULT.read().unwrap_or_else(PoisonError::into_inner).clone()
}
