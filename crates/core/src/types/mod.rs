//! Receipt types.
//!
//! [`ReceiptRecord`] mirrors the stored JSON exactly and tolerates missing
//! fields. [`Receipt`] is what the confirmation page renders; the only way to
//! obtain one from stored data is [`ReceiptRecord::validate`].

pub mod address;
pub mod id;
pub mod line_item;
pub mod receipt;
pub mod record;

pub use address::ShippingAddress;
pub use id::LineItemId;
pub use line_item::{LineItem, Variant};
pub use receipt::Receipt;
pub use record::{
    AddressRecord, CustomerRecord, LineItemRecord, MoneyRecord, OrderRecord, ReceiptRecord,
    ShippingCostRecord, VariantRecord,
};
