// SPDX-License-Identifier: MIT
//! Binding loggers into request contexts and resolving them back out.
//!
//! Call sites throughout a service log through these helpers with whatever
//! [`Context`] they were handed; tests inject a logger over a capture sink via
//! [`bind_logger`] instead of mutating the process-wide default.

use crate::logger::{default_logger, Logger};
use opentelemetry::Context;
use serde_json::Value;

/// Derived context carrying `logger`; the original context is unchanged.
pub fn bind_logger(cx: &Context, logger: Logger) -> Context {
    cx.with_value(logger)
}

/// The logger bound to `cx`, falling back to the process-wide default when
/// none was ever bound. Never fails, never returns an absent handle.
pub fn logger_from_context(cx: &Context) -> Logger {
    match cx.get::<Logger>() {
        Some(logger) => logger.clone(),
        None => default_logger(),
    }
}

/// Log at debug severity through the logger resolved from `cx`.
///
/// The context is forwarded with the record, so a trace-enriching sink on the
/// resolved logger still sees the span active at this call.
pub fn debug(cx: &Context, message: &str, fields: &[(&str, Value)]) {
    logger_from_context(cx).debug(cx, message, fields);
}

/// Log at info severity through the logger resolved from `cx`.
pub fn info(cx: &Context, message: &str, fields: &[(&str, Value)]) {
    logger_from_context(cx).info(cx, message, fields);
}

/// Log at warn severity through the logger resolved from `cx`.
pub fn warn(cx: &Context, message: &str, fields: &[(&str, Value)]) {
    logger_from_context(cx).warn(cx, message, fields);
}

/// Log at error severity through the logger resolved from `cx`.
pub fn error(cx: &Context, message: &str, fields: &[(&str, Value)]) {
    logger_from_context(cx).error(cx, message, fields);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn bind_then_resolve_round_trips() {
        let sink = MemorySink::default();
        let bound = bind_logger(&Context::new(), Logger::new(sink.clone()));

        logger_from_context(&bound).info(&bound, "through bound logger", &[]);

        // The record landed in the bound logger's sink, not the default.
        let records = sink.records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "through bound logger");
    }

    #[test]
    fn binding_leaves_original_context_unbound() {
        let original = Context::new();
        let sink = MemorySink::default();
        let _bound = bind_logger(&original, Logger::new(sink.clone()));

        assert!(original.get::<Logger>().is_none());
    }

    #[test]
    fn rebinding_shadows_earlier_logger() {
        let first = MemorySink::default();
        let second = MemorySink::default();
        let cx = bind_logger(&Context::new(), Logger::new(first.clone()));
        let cx = bind_logger(&cx, Logger::new(second.clone()));

        info(&cx, "shadowed", &[]);

        assert!(first.records().is_empty());
        assert_eq!(second.records().len(), 1);
    }

    #[test]
    fn unbound_context_resolves_to_some_logger() {
        // Must not panic and must hand back a usable logger.
        let logger = logger_from_context(&Context::new());
        logger.debug(&Context::new(), "fallback", &[]);
    }

    #[test]
    fn convenience_calls_carry_severity_and_fields() {
        let sink = MemorySink::default();
        let cx = bind_logger(&Context::new(), Logger::new(sink.clone()));

        debug(&cx, "d", &[]);
        info(&cx, "i", &[("k", "v".into())]);
        warn(&cx, "w", &[]);
        error(&cx, "e", &[]);

        let records = sink.records();
        let severities: Vec<_> = records.iter().map(|r| r.severity).collect();
        assert_eq!(
            severities,
            [
                crate::Severity::Debug,
                crate::Severity::Info,
                crate::Severity::Warn,
                crate::Severity::Error
            ]
        );
        assert_eq!(records[1].fields["k"], "v");
    }
}
