//! Recoverable diagnostics emitted while building the index and aggregating

use serde_json::Value;
use std::fmt;

/// An entry-level problem that caused one unit of input to be skipped
///
/// Offending records are kept verbatim so reporters can show them, and tests
/// can assert on them structurally.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// Catalogue entry without a usable `product` or `price`
    InvalidPriceEntry(Value),

    /// Transaction whose `items` is missing or not a list; skipped wholesale
    InvalidItemsFormat(Value),

    /// Line item without a usable `product` or `quantity`
    InvalidSaleItem(Value),

    /// Line item referencing a product absent from the price index
    UnknownProduct(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InvalidPriceEntry(entry) => {
                write!(f, "Invalid price entry skipped: {}", entry)
            }
            Diagnostic::InvalidItemsFormat(sale) => {
                write!(f, "Invalid items format in sale: {}", sale)
            }
            Diagnostic::InvalidSaleItem(item) => write!(f, "Invalid sale item skipped: {}", item),
            Diagnostic::UnknownProduct(product) => {
                write!(f, "Product '{}' not in catalogue.", product)
            }
        }
    }
}
