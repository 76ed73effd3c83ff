//! Session-backed services for the storefront.
//!
//! # Services
//!
//! - `receipts` - Receipt slot and checkout flag stored in the visitor session

pub mod receipts;

pub use receipts::{SessionCheckoutShell, SessionReceiptStore, stash_receipt};
