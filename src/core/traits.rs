//! Reporting capability shared by the pipeline stages
//!
//! The index builder, the aggregator and the pipeline never print directly.
//! They hand every diagnostic to a [`Reporter`], which decides where it goes.

use crate::types::{Diagnostic, SalesError};

/// Sink for diagnostics, in the order they are encountered
pub trait Reporter {
    /// Record a recoverable, entry-level problem (rendered as `WARNING:`)
    fn warn(&mut self, diagnostic: Diagnostic);

    /// Record a run-level failure (rendered as `ERROR:`)
    fn error(&mut self, error: &SalesError);
}
