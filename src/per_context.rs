// SPDX-License-Identifier: MIT
//! Eager enrichment variant: trace identifiers are captured at bind time.
//!
//! [`setup`] installs a bare stdout JSON pipeline with no enriching decorator.
//! Instead, [`bind_span_logger`] derives a sub-logger carrying the identifiers
//! of whatever span is active in the context at that moment and binds it into
//! the context. Log calls through that context keep the captured identifiers
//! even if a different span is active later; rebind under the new span to
//! pick it up.

use crate::context::bind_logger;
use crate::level::parse_level;
use crate::logger::{default_logger, set_default, Logger};
use crate::sink::{span_identifiers, JsonSink};
use opentelemetry::Context;
use std::io::{self, Write};

/// Configure the process-wide default logger from a textual level.
///
/// The level is parsed per [`parse_level`](crate::parse_level); unrecognized
/// values fall back to info. Records at or above the threshold are written to
/// standard output as JSON lines. Trace enrichment is not wired here; it
/// happens when a context is bound via [`bind_span_logger`].
///
/// Replaces any previously installed default (last call wins). Call once
/// during startup, before concurrent logging begins.
pub fn setup(level: &str) {
    setup_with_writer(level, Box::new(io::stdout()));
}

// `setup` with the record destination swapped out, so tests can observe the
// installed pipeline.
pub(crate) fn setup_with_writer(level: &str, writer: Box<dyn Write + Send>) {
    let threshold = parse_level(level);
    set_default(Logger::new(JsonSink::with_writer(threshold, writer)));
}

/// Sub-logger of `base` carrying the identifiers of the span active in `cx`.
///
/// When the context's span is invalid or absent, returns a plain clone of
/// `base`; records through it carry no trace fields.
pub fn span_logger(cx: &Context, base: &Logger) -> Logger {
    match span_identifiers(cx) {
        Some((trace_id, span_id)) => {
            base.with_fields(&[("trace_id", trace_id.into()), ("span_id", span_id.into())])
        }
        None => base.clone(),
    }
}

/// Derived context carrying a sub-logger of the process-wide default,
/// enriched with the identifiers of the span active in `cx` right now.
///
/// # Examples
/// ```no_run
/// use opentelemetry::Context;
///
/// ctxlog::per_context::setup("info");
/// let cx = ctxlog::per_context::bind_span_logger(&Context::current());
/// ctxlog::info(&cx, "handling request", &[]);
/// ```
pub fn bind_span_logger(cx: &Context) -> Context {
    bind_logger(cx, span_logger(cx, &default_logger()))
}
