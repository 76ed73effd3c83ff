//! Receipt error taxonomy.
//!
//! An absent receipt is not an error: stores report it as `Ok(None)`.

use crate::types::LineItemId;

/// Errors raised while reading or deleting a stored receipt.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    /// The stored value is not a serialized receipt object.
    #[error("malformed receipt: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The storage backend failed.
    #[error("receipt storage unavailable: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ReceiptError {
    /// Wrap a backend failure.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Reasons a deserialized receipt cannot be rendered.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IncompleteReceipt {
    /// A required receipt-level field is missing or blank.
    #[error("receipt is missing `{0}`")]
    MissingField(&'static str),

    /// A required field of one line item is missing.
    #[error("line item #{index} is missing `{field}`")]
    MissingLineItemField {
        /// Position of the item in `order.line_items`.
        index: usize,
        /// Dotted path of the missing field within the item.
        field: &'static str,
    },

    /// A line item was ordered with quantity zero.
    #[error("line item {id} has zero quantity")]
    ZeroQuantity {
        /// Identifier of the offending item.
        id: LineItemId,
    },

    /// Two line items render under the same key.
    #[error("line item id {id} appears more than once")]
    DuplicateLineItem {
        /// The repeated identifier.
        id: LineItemId,
    },
}
