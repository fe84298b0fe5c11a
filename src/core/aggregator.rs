//! Sales aggregator
//!
//! Walks every transaction's line items, prices each one against a
//! [`PriceIndex`] and accumulates the total.
//!
//! Skipping is independent per unit:
//! - a transaction whose `items` is missing or not a list is skipped wholesale
//! - a line item without a usable `product`/`quantity` is skipped alone
//! - a line item whose product is not catalogued is skipped alone
//!
//! Every skip emits exactly one diagnostic. Aggregation itself never fails.

use crate::core::price_index::PriceIndex;
use crate::core::traits::Reporter;
use crate::types::{transaction_items, Diagnostic, SaleLineItem, SalesTally};
use serde_json::Value;
use tracing::debug;

/// Prices sales against a borrowed index
#[derive(Debug, Clone, Copy)]
pub struct SalesAggregator<'a> {
    index: &'a PriceIndex,
}

impl<'a> SalesAggregator<'a> {
    pub fn new(index: &'a PriceIndex) -> Self {
        SalesAggregator { index }
    }

    /// Total value of all resolvable line items
    ///
    /// Returns `0.0` when nothing could be priced.
    pub fn compute_total(&self, transactions: &[Value], reporter: &mut dyn Reporter) -> f64 {
        self.aggregate(transactions, reporter).total
    }

    /// Aggregate sales, returning the total along with skip counters
    pub fn aggregate(&self, transactions: &[Value], reporter: &mut dyn Reporter) -> SalesTally {
        let mut tally = SalesTally::default();

        for transaction in transactions {
            let items = match transaction_items(transaction) {
                Ok(items) => items,
                Err(e) => {
                    debug!(reason = %e, "skipping transaction");
                    tally.skipped_transactions += 1;
                    reporter.warn(Diagnostic::InvalidItemsFormat(transaction.clone()));
                    continue;
                }
            };

            for item in items {
                self.price_item(item, &mut tally, reporter);
            }
        }

        debug!(
            transactions = transactions.len(),
            priced = tally.priced_items,
            invalid = tally.invalid_items,
            unknown = tally.unknown_products,
            skipped_transactions = tally.skipped_transactions,
            total = tally.total,
            "sales aggregated"
        );
        tally
    }

    fn price_item(&self, item: &Value, tally: &mut SalesTally, reporter: &mut dyn Reporter) {
        let line = match SaleLineItem::from_value(item) {
            Ok(line) => line,
            Err(e) => {
                debug!(reason = %e, "skipping sale item");
                tally.invalid_items += 1;
                reporter.warn(Diagnostic::InvalidSaleItem(item.clone()));
                return;
            }
        };

        match self.index.get(&line.product) {
            Some(price) => {
                tally.total += price * line.quantity;
                tally.priced_items += 1;
            }
            None => {
                tally.unknown_products += 1;
                reporter.warn(Diagnostic::UnknownProduct(line.label));
            }
        }
    }
}

/// Convenience wrapper around [`SalesAggregator::compute_total`]
pub fn compute_total(
    transactions: &[Value],
    index: &PriceIndex,
    reporter: &mut dyn Reporter,
) -> f64 {
    SalesAggregator::new(index).compute_total(transactions, reporter)
}
