//! Reporter implementations
//!
//! - [`ConsoleReporter`] renders `WARNING: ...` / `ERROR: ...` lines to a writer
//!   (stdout in the binary).
//! - [`RecordingReporter`] keeps every event in memory so callers can inspect
//!   diagnostics structurally.

use crate::core::traits::Reporter;
use crate::types::{Diagnostic, SalesError};
use std::io::{self, Stdout, Write};

/// Writes diagnostics as text lines
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<Stdout> {
    /// Reporter writing to standard output
    pub fn stdout() -> Self {
        ConsoleReporter::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        ConsoleReporter { out }
    }

    /// Consume the reporter and return the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, level: &str, message: &dyn std::fmt::Display) {
        if let Err(e) = writeln!(self.out, "{}: {}", level, message) {
            tracing::debug!(error = %e, "failed to write diagnostic");
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn warn(&mut self, diagnostic: Diagnostic) {
        self.line("WARNING", &diagnostic);
    }

    fn error(&mut self, error: &SalesError) {
        self.line("ERROR", error);
    }
}

/// A single reported event
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    Warning(Diagnostic),
    Error(SalesError),
}

/// Collects events in memory
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Vec<ReportEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events, in the order they were reported
    pub fn events(&self) -> &[ReportEvent] {
        &self.events
    }

    /// Only the warnings, in order
    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ReportEvent::Warning(d) => Some(d),
                ReportEvent::Error(_) => None,
            })
            .collect()
    }

    /// Only the errors, in order
    pub fn errors(&self) -> Vec<&SalesError> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ReportEvent::Error(e) => Some(e),
                ReportEvent::Warning(_) => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn warn(&mut self, diagnostic: Diagnostic) {
        self.events.push(ReportEvent::Warning(diagnostic));
    }

    fn error(&mut self, error: &SalesError) {
        self.events.push(ReportEvent::Error(error.clone()));
    }
}
