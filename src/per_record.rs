// SPDX-License-Identifier: MIT
//! Lazy enrichment variant: trace identifiers are stamped at emission time.
//!
//! [`setup`] installs a stdout JSON pipeline whose final stage is wrapped in a
//! [`TraceSink`](crate::sink::TraceSink), so every record is enriched with the
//! span active in the context passed to that particular log call. Nothing is
//! captured ahead of time; two calls through the same context under different
//! spans carry different identifiers.

use crate::level::parse_level;
use crate::logger::{set_default, Logger};
use crate::sink::{JsonSink, TraceSink};
use std::io::{self, Write};

/// Configure the process-wide default logger from a textual level.
///
/// The level is parsed per [`parse_level`](crate::parse_level); unrecognized
/// values fall back to info. Records at or above the threshold are written to
/// standard output as JSON lines, each enriched with `trace_id` and `span_id`
/// when the log call's context carries a valid span.
///
/// Replaces any previously installed default (last call wins). Call once
/// during startup, before concurrent logging begins.
///
/// # Examples
/// ```no_run
/// use opentelemetry::Context;
///
/// ctxlog::per_record::setup("debug");
/// ctxlog::info(&Context::new(), "service started", &[]);
/// ```
pub fn setup(level: &str) {
    setup_with_writer(level, Box::new(io::stdout()));
}

// `setup` with the record destination swapped out, so tests can observe the
// installed pipeline.
pub(crate) fn setup_with_writer(level: &str, writer: Box<dyn Write + Send>) {
    let threshold = parse_level(level);
    set_default(Logger::new(TraceSink::new(JsonSink::with_writer(
        threshold, writer,
    ))));
}
