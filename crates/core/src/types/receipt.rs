//! Validated receipts.

use std::collections::HashSet;

use serde::Serialize;

use super::address::ShippingAddress;
use super::line_item::LineItem;
use super::record::{MoneyRecord, ReceiptRecord};
use crate::error::IncompleteReceipt;

/// A receipt that has every field the confirmation page displays.
///
/// Line item keys are unique and items keep their stored order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    /// Order identifier shown in the page header.
    pub customer_reference: String,
    pub customer_email: String,
    pub line_items: Vec<LineItem>,
    /// Symbol-formatted shipping cost.
    pub shipping_cost: String,
    /// Symbol-formatted order total.
    pub total: String,
    pub shipping_address: ShippingAddress,
}

impl ReceiptRecord {
    /// Check the record against what the confirmation page needs.
    ///
    /// # Errors
    ///
    /// Returns the first [`IncompleteReceipt`] reason found, checking the
    /// order reference, customer email, line items, shipping cost, total and
    /// address in that order.
    ///
    /// # Example
    ///
    /// ```
    /// use seities_core::{IncompleteReceipt, ReceiptRecord};
    ///
    /// let record = ReceiptRecord::from_json(r#"{"customer_reference":"ORD-1"}"#).unwrap();
    /// assert_eq!(
    ///     record.validate().unwrap_err(),
    ///     IncompleteReceipt::MissingField("customer.email"),
    /// );
    /// ```
    pub fn validate(self) -> Result<Receipt, IncompleteReceipt> {
        let customer_reference = non_blank(self.customer_reference, "customer_reference")?;
        let customer_email = non_blank(
            self.customer.and_then(|customer| customer.email),
            "customer.email",
        )?;

        let order = self
            .order
            .ok_or(IncompleteReceipt::MissingField("order.line_items"))?;
        let records = order
            .line_items
            .ok_or(IncompleteReceipt::MissingField("order.line_items"))?;

        let mut seen = HashSet::with_capacity(records.len());
        let mut line_items = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let item = record.validate(index)?;
            if !seen.insert(item.id.key()) {
                return Err(IncompleteReceipt::DuplicateLineItem { id: item.id });
            }
            line_items.push(item);
        }

        let shipping_cost = formatted(
            order.shipping.and_then(|shipping| shipping.price),
            "order.shipping.price.formatted_with_symbol",
        )?;
        let total = formatted(order.total, "order.total.formatted_with_symbol")?;

        let shipping_address = self
            .shipping
            .ok_or(IncompleteReceipt::MissingField("shipping"))?
            .validate()?;

        Ok(Receipt {
            customer_reference,
            customer_email,
            line_items,
            shipping_cost,
            total,
            shipping_address,
        })
    }
}

impl TryFrom<ReceiptRecord> for Receipt {
    type Error = IncompleteReceipt;

    fn try_from(record: ReceiptRecord) -> Result<Self, Self::Error> {
        record.validate()
    }
}

pub(super) fn non_blank(value: Option<String>, field: &'static str) -> Result<String, IncompleteReceipt> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(IncompleteReceipt::MissingField(field))
}

fn formatted(money: Option<MoneyRecord>, field: &'static str) -> Result<String, IncompleteReceipt> {
    money
        .and_then(|m| m.formatted_with_symbol)
        .ok_or(IncompleteReceipt::MissingField(field))
}
