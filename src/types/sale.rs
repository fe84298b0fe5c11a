//! Sales record types
//!
//! A sales record is a sequence of transactions, each an object whose `items`
//! key holds the line items to be priced.

use crate::types::catalogue::{product_label, require_product, ProductKey};
use crate::types::field::{as_object, require, require_f64};
use crate::types::FieldError;
use serde_json::Value;

/// A validated (product, quantity) pair within a transaction
#[derive(Debug, Clone, PartialEq)]
pub struct SaleLineItem {
    /// Product key, resolved against the price index
    pub product: ProductKey,

    /// Product as written in the record, for diagnostics
    pub label: String,

    /// Quantity sold; zero and negative values are accepted as-is
    pub quantity: f64,
}

impl SaleLineItem {
    /// Extract a line item from an untyped record
    pub fn from_value(record: &Value) -> Result<Self, FieldError> {
        let object = as_object(record)?;
        let product = require_product(object)?;
        let quantity = require_f64(object, "quantity")?;

        Ok(SaleLineItem {
            label: product_label(require(object, "product")?),
            product,
            quantity,
        })
    }
}

/// Borrow the line items of a transaction
///
/// Fails when the transaction is not an object, has no `items` key, or when
/// `items` is not an array. In all three cases the whole transaction is skipped.
pub fn transaction_items(transaction: &Value) -> Result<&[Value], FieldError> {
    let object = as_object(transaction)?;
    require(object, "items")?
        .as_array()
        .map(Vec::as_slice)
        .ok_or(FieldError::WrongType {
            key: "items",
            expected: "list",
        })
}
