//! Seities Core - Receipt data contract shared by the storefront.
//!
//! This crate provides the types and traits behind the checkout confirmation
//! page:
//! - the wire shape of a cached order receipt and its validated form
//! - the error taxonomy for absent, malformed and incomplete receipts
//! - the `ReceiptStore` and `CheckoutShell` collaborator contracts
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no HTTP, no database
//! access. Storage backends that need I/O (e.g. the session-backed store)
//! live in the storefront crate and implement [`ReceiptStore`].
//!
//! # Modules
//!
//! - [`types`] - Receipt records, validated receipts, line items, addresses
//! - [`error`] - `ReceiptError` and `IncompleteReceipt`
//! - [`store`] - Storage and shell-state contracts plus an in-memory store

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod error;
pub mod store;
pub mod types;

pub use error::{IncompleteReceipt, ReceiptError};
pub use store::{CheckoutShell, MemoryReceiptStore, RECEIPT_SLOT, ReceiptStore};
pub use types::*;
