//! Receipt storage and shell-state contracts.
//!
//! The confirmation page talks to its collaborators only through these two
//! traits, so the storage backend (session, memory, a server-side order
//! lookup) can change without touching the page.

use std::future::Future;
use std::sync::{Mutex, PoisonError};

use crate::error::ReceiptError;
use crate::types::ReceiptRecord;

/// Name of the storage slot that holds the serialized receipt.
pub const RECEIPT_SLOT: &str = "receipt";

/// Read-and-delete access to the single stored receipt.
///
/// Receipts are written by the checkout flow, outside this contract.
pub trait ReceiptStore {
    /// Read and deserialize the stored receipt.
    ///
    /// Returns `Ok(None)` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::Malformed`] if the stored text is not a
    /// serialized receipt object, or [`ReceiptError::Storage`] if the backend
    /// fails.
    fn load(&self) -> impl Future<Output = Result<Option<ReceiptRecord>, ReceiptError>> + Send;

    /// Remove the stored receipt. Deleting an empty slot is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::Storage`] if the backend fails.
    fn delete(&self) -> impl Future<Output = Result<(), ReceiptError>> + Send;
}

/// Shell state the confirmation page reports to.
///
/// Implementations own their failure handling; the page does not consume a
/// result.
pub trait CheckoutShell {
    /// Record whether the visitor has just completed checkout.
    fn set_checkout(&self, completed: bool) -> impl Future<Output = ()> + Send;
}

/// In-process receipt slot.
///
/// Holds the serialized text, not the parsed record, so it reports malformed
/// data the same way a persistent backend would.
#[derive(Debug, Default)]
pub struct MemoryReceiptStore {
    slot: Mutex<Option<String>>,
}

impl MemoryReceiptStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store whose slot already holds `text`, as if the checkout
    /// flow had written it.
    #[must_use]
    pub fn seeded(text: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(text.into())),
        }
    }

    /// Whether the slot currently holds anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    fn read(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ReceiptStore for MemoryReceiptStore {
    async fn load(&self) -> Result<Option<ReceiptRecord>, ReceiptError> {
        self.read()
            .map(|text| ReceiptRecord::from_json(&text))
            .transpose()
            .map_err(ReceiptError::from)
    }

    async fn delete(&self) -> Result<(), ReceiptError> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{"customer_reference":"ORD-1","customer":{"email":"a@b.com"}}"#;

    #[tokio::test]
    async fn test_load_empty_is_absent() {
        let store = MemoryReceiptStore::new();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_then_delete_then_load() {
        let store = MemoryReceiptStore::seeded(SAMPLE);

        let record = store.load().await.unwrap().unwrap();
        assert_eq!(record.reference(), Some("ORD-1"));

        store.delete().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_load_does_not_consume() {
        let store = MemoryReceiptStore::seeded(SAMPLE);
        let first = store.load().await.unwrap();
        let second = store.load().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryReceiptStore::new();
        store.delete().await.unwrap();
        store.delete().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_malformed() {
        let store = MemoryReceiptStore::seeded("{not json");
        assert!(matches!(
            store.load().await,
            Err(ReceiptError::Malformed(_))
        ));

        let store = MemoryReceiptStore::seeded("null");
        assert!(matches!(
            store.load().await,
            Err(ReceiptError::Malformed(_))
        ));
    }
}
