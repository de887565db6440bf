// SPDX-License-Identifier: MIT
//! End-to-end behavior against real SDK spans: enrichment, threshold
//! suppression, and the two variants' capture semantics.
#![cfg(all(feature = "per-record", feature = "per-context"))]

use ctxlog::{
    bind_logger, info, logger_from_context, parse_level, per_context, JsonSink, Logger,
    MemorySink, Severity, TraceSink,
};
use opentelemetry::trace::{TraceContextExt, Tracer, TracerProvider};
use opentelemetry::Context;
use opentelemetry_sdk::trace::{SdkTracer, SdkTracerProvider};
use serde_json::Value;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn lines(&self) -> Vec<Value> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn sdk_tracer() -> (SdkTracerProvider, SdkTracer) {
    let provider = SdkTracerProvider::builder().build();
    let tracer = provider.tracer("ctxlog-tests");
    (provider, tracer)
}

#[test]
fn per_record_pipeline_stamps_live_span_identifiers() {
    let sink = MemorySink::default();
    let logger = Logger::new(TraceSink::new(sink.clone()));
    let (_provider, tracer) = sdk_tracer();

    tracer.in_span("handle-request", |cx| {
        let bound = bind_logger(&cx, logger.clone());
        info(&bound, "inside span", &[]);

        let span_context = cx.span().span_context().clone();
        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].fields["trace_id"],
            span_context.trace_id().to_string()
        );
        assert_eq!(
            records[0].fields["span_id"],
            span_context.span_id().to_string()
        );
    });

    // Outside any span the same pipeline adds nothing.
    let bound = bind_logger(&Context::new(), logger);
    info(&bound, "outside span", &[]);
    assert!(sink.records()[1].fields.is_empty());
}

#[test]
fn per_context_capture_survives_a_newer_span() {
    let sink = MemorySink::default();
    let base = Logger::new(sink.clone());
    let (_provider, tracer) = sdk_tracer();

    tracer.in_span("outer", |outer_cx| {
        let captured = outer_cx.span().span_context().clone();
        let bound = bind_logger(&outer_cx, per_context::span_logger(&outer_cx, &base));

        tracer.in_span("inner", |_inner_cx| {
            // Log through the context bound under the outer span, while the
            // inner span is the active one.
            info(&bound, "pinned to outer", &[]);
        });

        let records = sink.records();
        assert_eq!(records[0].fields["trace_id"], captured.trace_id().to_string());
        assert_eq!(records[0].fields["span_id"], captured.span_id().to_string());
    });
}

#[test]
fn warn_threshold_suppresses_info_but_not_error() {
    // Pipeline shaped exactly like per_record::setup("warn"), with the
    // stdout writer swapped for a capture buffer.
    let buf = SharedBuf::default();
    let logger = Logger::new(TraceSink::new(JsonSink::with_writer(
        parse_level("warn"),
        Box::new(buf.clone()),
    )));
    let cx = bind_logger(&Context::new(), logger);

    info(&cx, "suppressed", &[]);
    ctxlog::error(&cx, "emitted", &[]);

    let lines = buf.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["level"], "ERROR");
    assert_eq!(lines[0]["msg"], "emitted");
}

#[test]
fn bogus_level_behaves_exactly_like_info() {
    let buf = SharedBuf::default();
    let logger = Logger::new(JsonSink::with_writer(
        parse_level("bogus-level"),
        Box::new(buf.clone()),
    ));
    let cx = bind_logger(&Context::new(), logger);

    ctxlog::debug(&cx, "below info", &[]);
    info(&cx, "at info", &[]);

    let lines = buf.lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0]["level"], "INFO");
    assert_eq!(parse_level("bogus-level"), parse_level("info"));
}

#[test]
fn installed_default_serves_unbound_contexts() {
    // The one test in this binary that touches the process-wide slot.
    let sink = MemorySink::new(Severity::Debug);
    ctxlog::set_default(Logger::new(TraceSink::new(sink.clone())));

    let (_provider, tracer) = sdk_tracer();
    tracer.in_span("fallback", |cx| {
        // No logger bound: resolution falls back to the installed default,
        // and the lazy decorator still sees this span.
        logger_from_context(&cx).warn(&cx, "via default", &[]);

        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].severity, Severity::Warn);
        assert_eq!(
            records[0].fields["trace_id"],
            cx.span().span_context().trace_id().to_string()
        );
    });
}
