// SPDX-License-Identifier: MIT
//! Context-scoped structured logging with trace enrichment for Rust services.
//!
//! This crate is configuration glue between a JSON-lines log pipeline and the
//! OpenTelemetry context machinery:
//! * A total level parser ([`parse_level`]) mapping free-form config strings
//!   to a [`Severity`], defaulting to info.
//! * A process-wide default logger installed by a variant's `setup`, reachable
//!   from any call site through [`logger_from_context`].
//! * Trace enrichment: records gain `trace_id` and `span_id` fields (canonical
//!   lowercase hex) whenever a valid span is available.
//! * Context binding: [`bind_logger`] attaches a logger to a request context;
//!   [`debug`], [`info`], [`warn`] and [`error`] resolve it back out and
//!   forward, falling back to the process-wide default.
//!
//! # Feature Flags
//! Two variants of the same contract differ only in *when* enrichment happens:
//! * `per-record` – a decorator sink reads the span active in the context of
//!   each individual log call (lazy).
//! * `per-context` – [`per_context::bind_span_logger`] captures the active
//!   span's identifiers once and pre-binds them on a sub-logger carried by the
//!   context (eager); later calls keep the captured identifiers.
//!
//! Both are enabled by default; pick one semantic deliberately and build with
//! only that feature once the service has settled.
//!
//! # Quick Start
//! ```no_run
//! use opentelemetry::Context;
//!
//! ctxlog::per_record::setup("debug");
//! ctxlog::info(&Context::current(), "service started", &[("port", 8080.into())]);
//! ```
//!
//! # Testing call sites
//! Bind a logger over a [`MemorySink`] into the context under test instead of
//! touching the process-wide default:
//! ```
//! use opentelemetry::Context;
//! use ctxlog::{bind_logger, info, Logger, MemorySink};
//!
//! let sink = MemorySink::default();
//! let cx = bind_logger(&Context::new(), Logger::new(sink.clone()));
//! info(&cx, "observed", &[]);
//! assert_eq!(sink.records().len(), 1);
//! ```
mod context;
mod level;
mod logger;
mod record;
mod sink;

#[cfg(feature = "per-context")]
pub mod per_context;
#[cfg(feature = "per-record")]
pub mod per_record;

pub use context::{bind_logger, debug, error, info, logger_from_context, warn};
pub use level::{parse_level, Severity};
pub use logger::{default_logger, set_default, Logger};
pub use record::{FieldMap, Record};
pub use sink::{span_identifiers, JsonSink, MemorySink, Sink, TraceSink};

/// Re-exported for attaching structured field values without a direct
/// `serde_json` dependency at call sites.
pub use serde_json::Value;
