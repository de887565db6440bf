// SPDX-License-Identifier: MIT
//! Sink chain: anything that accepts a finished record.
//!
//! Sinks form a small chain of responsibility. [`JsonSink`] is the terminal
//! stage writing JSON lines; [`TraceSink`] is a decorator that stamps trace
//! identifiers onto each record before forwarding; [`MemorySink`] collects
//! records in memory for assertions in tests.

use crate::level::Severity;
use crate::record::Record;
use opentelemetry::trace::TraceContextExt;
use opentelemetry::Context;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// A stage in the record pipeline.
///
/// `enabled` is the cheap pre-flight check consulted before a record is even
/// built; `emit` consumes the finished record. Decorators forward both calls
/// to the next stage after performing their own concern.
pub trait Sink: Send + Sync {
    /// Whether a record at `severity` would be emitted.
    fn enabled(&self, severity: Severity) -> bool;

    /// Handle one record. `cx` is the caller's request context, carried so
    /// decorators can consult the active span at emission time.
    fn emit(&self, cx: &Context, record: Record);
}

/// Canonical hex identifiers of the span bound to `cx`, or `None` when the
/// context carries no span or an invalid one.
///
/// A span context is valid only when both the trace identifier and the span
/// identifier are non-zero; a context that never had a span attached yields
/// the no-op span, which is invalid. Absence of a valid span is an expected,
/// silent condition, not an error.
pub fn span_identifiers(cx: &Context) -> Option<(String, String)> {
    let span = cx.span();
    let span_context = span.span_context();
    if span_context.is_valid() {
        Some((
            span_context.trace_id().to_string(),
            span_context.span_id().to_string(),
        ))
    } else {
        None
    }
}

/// Terminal sink writing one JSON object per line, suppressing records below
/// its severity threshold.
///
/// Each record is serialized to a buffer first and written with a single
/// locked call, so lines from concurrent emitters never interleave. Write and
/// serialization failures are swallowed; logging never surfaces I/O errors to
/// the caller.
pub struct JsonSink {
    threshold: Severity,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonSink {
    /// Sink writing to standard output.
    pub fn stdout(threshold: Severity) -> Self {
        Self::with_writer(threshold, Box::new(io::stdout()))
    }

    /// Sink writing to an arbitrary writer. Useful for tests and for services
    /// that redirect their log stream.
    pub fn with_writer(threshold: Severity, writer: Box<dyn Write + Send>) -> Self {
        Self {
            threshold,
            writer: Mutex::new(writer),
        }
    }
}

impl Sink for JsonSink {
    fn enabled(&self, severity: Severity) -> bool {
        severity >= self.threshold
    }

    fn emit(&self, _cx: &Context, record: Record) {
        if !self.enabled(record.severity) {
            return;
        }
        if let Ok(mut line) = serde_json::to_vec(&record) {
            line.push(b'\n');
            let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
            let _ = writer.write_all(&line);
        }
    }
}

/// Decorator that injects `trace_id` and `span_id` from the caller's context.
///
/// Evaluated per record: each emission consults the span active in the context
/// passed to that log call. When the span context is invalid the record passes
/// through untouched. Severity and message are never altered.
pub struct TraceSink<S> {
    inner: S,
}

impl<S> TraceSink<S> {
    /// Wrap the next stage of the chain.
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: Sink> Sink for TraceSink<S> {
    fn enabled(&self, severity: Severity) -> bool {
        self.inner.enabled(severity)
    }

    fn emit(&self, cx: &Context, mut record: Record) {
        if let Some((trace_id, span_id)) = span_identifiers(cx) {
            record.push_field("trace_id", trace_id);
            record.push_field("span_id", span_id);
        }
        self.inner.emit(cx, record);
    }
}

/// Sink that retains records in memory instead of encoding them.
///
/// Cloning shares the underlying store, so a test can keep one handle and hand
/// another to a [`Logger`](crate::Logger).
#[derive(Clone)]
pub struct MemorySink {
    threshold: Severity,
    records: Arc<Mutex<Vec<Record>>>,
}

impl MemorySink {
    pub fn new(threshold: Severity) -> Self {
        Self {
            threshold,
            records: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Snapshot of everything emitted so far.
    pub fn records(&self) -> Vec<Record> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new(Severity::Debug)
    }
}

impl Sink for MemorySink {
    fn enabled(&self, severity: Severity) -> bool {
        severity >= self.threshold
    }

    fn emit(&self, _cx: &Context, record: Record) {
        if !self.enabled(record.severity) {
            return;
        }
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}
