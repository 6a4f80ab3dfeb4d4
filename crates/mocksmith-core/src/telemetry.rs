//! Fire-and-forget telemetry hook.
//!
//! The engine notifies an optional sink after each successful batch. Sinks
//! must be cheap and infallible: the notification runs on the caller's thread
//! and a sink that blocks or panics would break the generation contract, so
//! implementations should hand anything slow to a channel or background task.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Observer for completed generation calls.
pub trait TelemetrySink: Send + Sync {
    /// Called once per successful `generate` call with the batch size.
    fn records_generated(&self, count: usize);
}

/// Sink that emits a `tracing` debug event per batch.
#[derive(Debug, Default)]
pub struct LogTelemetry;

impl TelemetrySink for LogTelemetry {
    fn records_generated(&self, count: usize) {
        tracing::debug!(count, "generated record batch");
    }
}

/// In-memory counter, mainly for tests and process-level stats.
#[derive(Debug, Default)]
pub struct CountingTelemetry {
    total: AtomicUsize,
}

impl CountingTelemetry {
    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }
}

impl TelemetrySink for CountingTelemetry {
    fn records_generated(&self, count: usize) {
        self.total.fetch_add(count, Ordering::Relaxed);
    }
}
