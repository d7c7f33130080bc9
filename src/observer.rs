//! Reporting hooks for a pipeline run.
//!
//! The pipeline never prints. Callers pass a [`RunObserver`] to see header
//! handling, per-row decisions and the final [`Metrics`].

use tracing::{debug, info, trace};

use crate::executor::Metrics;
use crate::header::HeaderVerb;

/// Callbacks invoked during a run. All methods default to no-ops.
pub trait RunObserver {
    /// A header line was consumed by an action with `verb`.
    fn on_header_line(&mut self, _line_no: usize, _verb: HeaderVerb) {}

    /// A data line was parsed and filtered.
    fn on_row(&mut self, _line_no: usize, _accepted: bool) {}

    /// The run completed without error.
    fn on_finish(&mut self, _metrics: &Metrics) {}
}

/// Observer that ignores every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

/// Observer that forwards events to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl RunObserver for TracingObserver {
    fn on_header_line(&mut self, line_no: usize, verb: HeaderVerb) {
        debug!(line = line_no, %verb, "header line");
    }

    fn on_row(&mut self, line_no: usize, accepted: bool) {
        trace!(line = line_no, accepted, "row");
    }

    fn on_finish(&mut self, metrics: &Metrics) {
        info!(
            total = metrics.total_lines,
            passed = metrics.passed_lines,
            "run finished"
        );
    }
}
