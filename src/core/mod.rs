//! Core business logic module
//!
//! This module contains the core sales computation components:
//! - `traits` - The `Reporter` capability every stage reports through
//! - `reporter` - Console and in-memory reporters
//! - `price_index` - Catalogue → price lookup table
//! - `aggregator` - Sales pricing and totalling

pub mod aggregator;
pub mod price_index;
pub mod reporter;
pub mod traits;

pub use aggregator::{compute_total, SalesAggregator};
pub use price_index::PriceIndex;
pub use reporter::{ConsoleReporter, RecordingReporter, ReportEvent};
pub use traits::Reporter;
