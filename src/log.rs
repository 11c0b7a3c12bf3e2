//! Severity-leveled message sink consumed by the extension.
//!
//! The host environment owns the real log; the extension only ever emits
//! `(severity, code, text)` triples and never inspects a return value.

/// Message severity, most severe first. The numeric values follow the host
/// convention (1 = error, 2 = warning, 3 = info).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSeverity {
    Error = 1,
    Warning = 2,
    Info = 3,
}

/// Fire-and-forget log sink.
pub trait ServerLog: Send + Sync {
    fn add_message(&self, severity: LogSeverity, code: i32, message: &str);
}

/// [`ServerLog`] backed by the `tracing` ecosystem. The binary installs a
/// `tracing-subscriber` formatter; embedders can route these events however
/// their subscriber sees fit.
#[derive(Debug, Default)]
pub struct TracingLog;

impl ServerLog for TracingLog {
    fn add_message(&self, severity: LogSeverity, code: i32, message: &str) {
        match severity {
            LogSeverity::Error => tracing::error!(code, "{message}"),
            LogSeverity::Warning => tracing::warn!(code, "{message}"),
            LogSeverity::Info => tracing::info!(code, "{message}"),
        }
    }
}

/// Discards every message. Useful for embedders that have no log at all.
#[derive(Debug, Default)]
pub struct NullLog;

impl ServerLog for NullLog {
    fn add_message(&self, _severity: LogSeverity, _code: i32, _message: &str) {}
}
