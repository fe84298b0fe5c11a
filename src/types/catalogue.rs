//! Price catalogue types

use crate::types::field::{as_object, require, require_f64};
use crate::types::FieldError;
use serde_json::{Map, Value};

/// Lookup key identifying a product in both documents
///
/// Any JSON scalar can name a product. Numbers and booleans are compared by
/// numeric value, so `2`, `2.0` and `2e0` are the same key, and `true` equals
/// `1`. Strings only match strings: `"2"` and `2` are different products.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductKey {
    Name(String),
    /// Bit pattern of the value as `f64`, with `-0.0` folded into `0.0`
    Number(u64),
    Null,
}

impl ProductKey {
    /// Key for a scalar JSON value; `None` for arrays and objects
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => Some(ProductKey::Name(name.clone())),
            Value::Number(n) => n.as_f64().map(ProductKey::number),
            Value::Bool(b) => Some(ProductKey::number(if *b { 1.0 } else { 0.0 })),
            Value::Null => Some(ProductKey::Null),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn number(value: f64) -> Self {
        let value = if value == 0.0 { 0.0 } else { value };
        ProductKey::Number(value.to_bits())
    }
}

impl From<&str> for ProductKey {
    fn from(name: &str) -> Self {
        ProductKey::Name(name.to_string())
    }
}

/// Text used for a product in diagnostics: strings verbatim, other scalars as
/// their JSON text (`123`, `1.5`, `true`, `null`)
pub fn product_label(value: &Value) -> String {
    match value {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    }
}

/// A validated price catalogue entry
///
/// The price is not required to be non-negative.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceEntry {
    /// Product identifier
    pub product: ProductKey,

    /// Unit price
    pub price: f64,
}

impl PriceEntry {
    /// Extract an entry from an untyped catalogue record
    ///
    /// The record must be an object with a scalar `product` and a `price`
    /// coercible to a float. Extra keys are ignored.
    pub fn from_value(record: &Value) -> Result<Self, FieldError> {
        let object = as_object(record)?;
        let product = require_product(object)?;
        let price = require_f64(object, "price")?;

        Ok(PriceEntry { product, price })
    }
}

/// Look up the `product` key of a record and turn it into a [`ProductKey`]
pub(crate) fn require_product(object: &Map<String, Value>) -> Result<ProductKey, FieldError> {
    let value = require(object, "product")?;
    ProductKey::from_value(value).ok_or(FieldError::WrongType {
        key: "product",
        expected: "scalar",
    })
}
