//! In-memory record of a pipeline run.
//!
//! [`RunTrace`] is a [`RunObserver`] that keeps every event, so a run can be
//! inspected line by line after it finishes.

use crate::executor::Metrics;
use crate::header::HeaderVerb;
use crate::observer::RunObserver;

/// One header line and the verb applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderTrace {
    pub line_no: usize,
    pub verb: HeaderVerb,
}

/// One data line and the filter decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowTrace {
    pub line_no: usize,
    pub accepted: bool,
}

/// Complete trace of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunTrace {
    pub header_lines: Vec<HeaderTrace>,
    pub rows: Vec<RowTrace>,
    /// Set only when the run finished without error.
    pub metrics: Option<Metrics>,
}

impl RunTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Line numbers of rows that passed the filters.
    pub fn accepted_lines(&self) -> Vec<usize> {
        self.rows
            .iter()
            .filter(|r| r.accepted)
            .map(|r| r.line_no)
            .collect()
    }
}

impl RunObserver for RunTrace {
    fn on_header_line(&mut self, line_no: usize, verb: HeaderVerb) {
        self.header_lines.push(HeaderTrace { line_no, verb });
    }

    fn on_row(&mut self, line_no: usize, accepted: bool) {
        self.rows.push(RowTrace { line_no, accepted });
    }

    fn on_finish(&mut self, metrics: &Metrics) {
        self.metrics = Some(*metrics);
    }
}
