//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `catalogue`: Price catalogue entries
//! - `sale`: Sales transactions and line items
//! - `field`: Best-effort extraction and coercion of untyped fields
//! - `diagnostic`: Recoverable, entry-level diagnostics
//! - `summary`: Run results and tallies
//! - `error`: Error types for the sales calculator

pub mod catalogue;
pub mod diagnostic;
pub mod error;
pub mod field;
pub mod sale;
pub mod summary;

pub use catalogue::{product_label, PriceEntry, ProductKey};
pub use diagnostic::Diagnostic;
pub use error::{FieldError, SalesError};
pub use sale::{transaction_items, SaleLineItem};
pub use summary::{RunResult, SalesTally};
