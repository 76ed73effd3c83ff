//! Page components and their display types.
//!
//! Components turn validated domain data into plain structs the templates
//! render, and own the load/dismiss lifecycle of the pages they back.

pub mod chrome;
pub mod line_item;
pub mod receipt;

pub use chrome::PageChrome;
pub use line_item::LineItemView;
pub use receipt::{AddressView, FallbackReason, ReceiptPage, ReceiptView, shop_again};
