//! Price index builder
//!
//! Turns the raw catalogue sequence into a product → unit price lookup table.
//!
//! # Duplicate Handling
//!
//! When a product appears more than once, the entry that comes last in the
//! catalogue wins. Earlier prices are overwritten, never merged or averaged.
//!
//! # Malformed Entries
//!
//! Entries without a scalar `product` or a numeric `price` are skipped with an
//! [`Diagnostic::InvalidPriceEntry`]; building never fails.

use crate::core::traits::Reporter;
use crate::types::{Diagnostic, PriceEntry, ProductKey};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Read-only product → unit price mapping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceIndex {
    prices: HashMap<ProductKey, f64>,
}

impl PriceIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from untyped catalogue records
    ///
    /// # Arguments
    ///
    /// * `entries` - Catalogue records, in document order
    /// * `reporter` - Receives one diagnostic per skipped entry
    pub fn build(entries: &[Value], reporter: &mut dyn Reporter) -> Self {
        let mut index = PriceIndex::new();
        let mut skipped = 0usize;

        for entry in entries {
            match PriceEntry::from_value(entry) {
                Ok(price_entry) => index.insert(price_entry),
                Err(e) => {
                    debug!(reason = %e, "skipping price entry");
                    skipped += 1;
                    reporter.warn(Diagnostic::InvalidPriceEntry(entry.clone()));
                }
            }
        }

        debug!(
            entries = entries.len(),
            skipped,
            products = index.len(),
            "price index built"
        );
        index
    }

    /// Insert an entry, overwriting any previous price for the same product
    pub fn insert(&mut self, entry: PriceEntry) {
        self.prices.insert(entry.product, entry.price);
    }

    /// Unit price of `product`, if catalogued
    pub fn get(&self, product: &ProductKey) -> Option<f64> {
        self.prices.get(product).copied()
    }

    /// Number of distinct products
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl FromIterator<PriceEntry> for PriceIndex {
    fn from_iter<I: IntoIterator<Item = PriceEntry>>(iter: I) -> Self {
        let mut index = PriceIndex::new();
        for entry in iter {
            index.insert(entry);
        }
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reporter::RecordingReporter;
    use rstest::rstest;
    use serde_json::json;

    fn build(entries: Value) -> (PriceIndex, RecordingReporter) {
        let mut reporter = RecordingReporter::new();
        let entries = entries.as_array().cloned().unwrap_or_default();
        let index = PriceIndex::build(&entries, &mut reporter);
        (index, reporter)
    }

    #[test]
    fn test_build_valid_entries() {
        let (index, reporter) = build(json!([
            {"product": "A", "price": 10},
            {"product": "B", "price": 2.5},
            {"product": "C", "price": "7"},
        ]));

        assert_eq!(index.len(), 3);
        assert_eq!(index.get(&"A".into()), Some(10.0));
        assert_eq!(index.get(&"B".into()), Some(2.5));
        assert_eq!(index.get(&"C".into()), Some(7.0));
        assert!(reporter.events().is_empty());
    }

    #[test]
    fn test_build_empty_catalogue() {
        let (index, reporter) = build(json!([]));
        assert!(index.is_empty());
        assert!(reporter.events().is_empty());
    }

    #[test]
    fn test_duplicate_product_last_write_wins() {
        let (index, _) = build(json!([
            {"product": "A", "price": 10},
            {"product": "B", "price": 1},
            {"product": "A", "price": 12.5},
        ]));

        assert_eq!(index.len(), 2);
        assert_eq!(index.get(&"A".into()), Some(12.5));
    }

    #[test]
    fn test_invalid_duplicate_does_not_overwrite() {
        let (index, reporter) = build(json!([
            {"product": "A", "price": 10},
            {"product": "A", "price": "n/a"},
        ]));

        assert_eq!(index.get(&"A".into()), Some(10.0));
        assert_eq!(reporter.warnings().len(), 1);
    }

    #[rstest]
    #[case::missing_price(json!({"product": "X"}))]
    #[case::missing_product(json!({"price": 3}))]
    #[case::non_numeric_price(json!({"product": "X", "price": "abc"}))]
    #[case::list_product(json!({"product": [12], "price": 3}))]
    #[case::object_product(json!({"product": {"id": 12}, "price": 3}))]
    #[case::scalar_entry(json!("X"))]
    #[case::null_entry(json!(null))]
    fn test_invalid_entry_skipped_with_warning(#[case] bad: Value) {
        let (index, reporter) = build(json!([{"product": "A", "price": 1}, bad.clone()]));

        assert_eq!(index.len(), 1);
        assert_eq!(
            reporter.warnings(),
            vec![&Diagnostic::InvalidPriceEntry(bad)]
        );
    }

    #[test]
    fn test_numeric_products_are_indexed() {
        let (index, reporter) = build(json!([
            {"product": 123, "price": 5},
            {"product": "123", "price": 7},
            {"product": 4.0, "price": 1},
            {"product": 4, "price": 2},
        ]));

        assert!(reporter.events().is_empty());
        assert_eq!(index.len(), 3);
        assert_eq!(index.get(&ProductKey::from_value(&json!(123)).unwrap()), Some(5.0));
        assert_eq!(index.get(&"123".into()), Some(7.0));
        assert_eq!(index.get(&ProductKey::from_value(&json!(4)).unwrap()), Some(2.0));
    }

    #[test]
    fn test_from_iterator() {
        let index: PriceIndex = vec![
            PriceEntry {
                product: "A".into(),
                price: 1.0,
            },
            PriceEntry {
                product: "A".into(),
                price: 2.0,
            },
        ]
        .into_iter()
        .collect();

        assert_eq!(index.len(), 1);
        assert_eq!(index.get(&"A".into()), Some(2.0));
        assert_eq!(index.get(&"B".into()), None);
    }
}
