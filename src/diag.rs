//! Injectable diagnostics sink.
//!
//! The decoder reports progress through a caller-supplied sink instead of a
//! process-wide logger, so library users choose their own logging backend
//! (or none). `NullSink` is the default; a `tracing`-backed sink is available
//! behind the `tracing` feature.

/// Severity of a diagnostic message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Fine-grained progress, useful when debugging a pipeline.
    Debug,
    /// Normal operational events.
    Info,
    /// Unexpected but recoverable conditions.
    Warn,
}

/// Sink for diagnostic messages emitted during decoding.
pub trait DiagSink: Send + Sync {
    /// Records one diagnostic message.
    fn log(&self, severity: Severity, message: &str);
}

/// Sink that discards every message.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl DiagSink for NullSink {
    fn log(&self, _severity: Severity, _message: &str) {}
}

/// Sink that forwards messages to the `tracing` ecosystem.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

#[cfg(feature = "tracing")]
impl DiagSink for TracingSink {
    fn log(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Debug => tracing::debug!(target: "regionbox", "{message}"),
            Severity::Info => tracing::info!(target: "regionbox", "{message}"),
            Severity::Warn => tracing::warn!(target: "regionbox", "{message}"),
        }
    }
}
