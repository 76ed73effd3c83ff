//! Wire shape of a stored receipt.
//!
//! The record is the Commerce.js order object as it was cached after checkout
//! capture. Every field is optional here so that a structurally valid JSON
//! object always deserializes; missing data is reported by
//! [`ReceiptRecord::validate`] instead of a serde error. Fields the
//! confirmation page never uses are ignored.

use serde::{Deserialize, Serialize};

use super::id::LineItemId;

/// A stored receipt exactly as serialized by the checkout flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptRecord {
    /// Order identifier shown to the customer (e.g. `ORD-1`).
    pub customer_reference: Option<String>,
    pub customer: Option<CustomerRecord>,
    pub order: Option<OrderRecord>,
    /// Shipping destination.
    pub shipping: Option<AddressRecord>,
}

/// Customer block of a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerRecord {
    pub email: Option<String>,
}

/// Order block of a receipt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderRecord {
    /// Purchased items in display order.
    pub line_items: Option<Vec<LineItemRecord>>,
    pub shipping: Option<ShippingCostRecord>,
    pub total: Option<MoneyRecord>,
}

/// Shipping cost block of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingCostRecord {
    pub price: Option<MoneyRecord>,
}

/// A monetary amount as formatted by the commerce provider.
///
/// Only the symbol-formatted string is kept; the page never does arithmetic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoneyRecord {
    /// e.g. `$20.00`
    pub formatted_with_symbol: Option<String>,
}

/// One purchased item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItemRecord {
    pub id: Option<LineItemId>,
    pub product_name: Option<String>,
    /// Selected options; the first entry is the one shown.
    pub variants: Option<Vec<VariantRecord>>,
    pub quantity: Option<u32>,
    pub line_total: Option<MoneyRecord>,
}

/// A selected product option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantRecord {
    /// Option group label (e.g. `Size`).
    pub variant_name: Option<String>,
    /// Chosen option (e.g. `M`).
    pub option_name: Option<String>,
}

/// Shipping destination.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressRecord {
    pub name: Option<String>,
    pub street: Option<String>,
    pub street_2: Option<String>,
    pub town_city: Option<String>,
    pub county_state: Option<String>,
    pub postal_zip_code: Option<String>,
    pub country: Option<String>,
}

impl ReceiptRecord {
    /// Deserialize a record from its stored JSON text.
    ///
    /// # Errors
    ///
    /// Returns `serde_json::Error` if the text is not JSON, is not an object
    /// (including `null`), or carries a field of the wrong type.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// The order reference, if the record has one.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        self.customer_reference.as_deref()
    }
}

impl MoneyRecord {
    /// Returns the symbol-formatted amount, if present.
    #[must_use]
    pub fn with_symbol(&self) -> Option<&str> {
        self.formatted_with_symbol.as_deref()
    }
}
