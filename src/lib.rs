//! Sales Calculator Library
//! # Overview
//!
//! Computes the total value of a set of sales transactions by pricing every
//! line item against a product catalogue, then reports the total and the
//! elapsed computation time.
//!
//! # Architecture
//!
//! The system is a single linear pipeline:
//!
//! - [`types`] - Core data types (PriceEntry, SaleLineItem, RunResult, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`io`] - JSON document loading and summary output
//! - [`core`] - Business logic components:
//!   - [`core::price_index`] - Catalogue → unit price lookup table
//!   - [`core::aggregator`] - Line item pricing and totalling
//!   - [`core::reporter`] - Diagnostic sinks
//! - [`pipeline`] - Stage orchestration and timing
//! - [`logging`] - Tracing subscriber setup
//!
//! # Graceful Degradation
//!
//! Only unreadable input documents abort a run. Malformed catalogue entries,
//! malformed transactions, malformed line items and unknown products are each
//! skipped individually and reported as a [`Diagnostic`].

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod types;

pub use crate::core::{compute_total, PriceIndex, Reporter, SalesAggregator};
pub use pipeline::{run, RunConfig};
pub use types::{Diagnostic, PriceEntry, RunResult, SaleLineItem, SalesError};
