// SPDX-License-Identifier: MIT
//! Demo binary: both enrichment variants against a synthetic remote span.
//!
//! Run with `LOG_LEVEL=debug cargo run` and compare the emitted lines.

use ctxlog::{info, per_context, per_record, warn};
use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};
use opentelemetry::Context;

fn incoming_request_context() -> Context {
    // Stands in for a span extracted from incoming request headers.
    let span_context = SpanContext::new(
        TraceId::from_bytes([
            0x4b, 0xf9, 0x2f, 0x35, 0x77, 0xb3, 0x4d, 0xa6, //
            0xa3, 0xce, 0x92, 0x9d, 0x0e, 0x0e, 0x47, 0x36,
        ]),
        SpanId::from_bytes([0x00, 0xf0, 0x67, 0xaa, 0x0b, 0xa9, 0x02, 0xb7]),
        TraceFlags::SAMPLED,
        true,
        TraceState::default(),
    );
    Context::new().with_remote_span_context(span_context)
}

fn main() {
    let level = std::env::var("LOG_LEVEL").unwrap_or_default();

    // Lazy variant: the sink reads the span of each individual call.
    per_record::setup(&level);
    let cx = incoming_request_context();
    info(&cx, "handling request", &[("route", "/demo".into())]);
    info(&Context::new(), "background work, no span", &[]);

    // Eager variant: identifiers are captured once, at bind time.
    per_context::setup(&level);
    let cx = per_context::bind_span_logger(&incoming_request_context());
    info(&cx, "handling request", &[("route", "/demo".into())]);
    warn(&cx, "slow upstream", &[("elapsed_ms", 152.into())]);
}
