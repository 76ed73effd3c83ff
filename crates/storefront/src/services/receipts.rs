//! Receipt storage backed by the visitor session.
//!
//! The receipt is kept as the JSON text the checkout flow produced, under
//! [`session_keys::RECEIPT`]. Parsing happens on every load so a corrupt
//! slot is reported as malformed rather than as a session failure.

use seities_core::{CheckoutShell, ReceiptError, ReceiptRecord, ReceiptStore};
use serde_json::Value;
use tower_sessions::Session;

use crate::models::session_keys;

/// [`ReceiptStore`] over the receipt slot of one visitor session.
#[derive(Debug, Clone)]
pub struct SessionReceiptStore {
    session: Session,
}

impl SessionReceiptStore {
    /// Wrap the session of the current request.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

impl ReceiptStore for SessionReceiptStore {
    async fn load(&self) -> Result<Option<ReceiptRecord>, ReceiptError> {
        let stored = self
            .session
            .get_value(session_keys::RECEIPT)
            .await
            .map_err(ReceiptError::storage)?;

        let record = match stored {
            None => return Ok(None),
            Some(Value::String(text)) => ReceiptRecord::from_json(&text)?,
            // Written as a JSON value instead of text
            Some(value) => serde_json::from_value(value)?,
        };
        Ok(Some(record))
    }

    async fn delete(&self) -> Result<(), ReceiptError> {
        self.session
            .remove_value(session_keys::RECEIPT)
            .await
            .map_err(ReceiptError::storage)?;
        Ok(())
    }
}

/// [`CheckoutShell`] that records the checkout flag in the session.
#[derive(Debug, Clone)]
pub struct SessionCheckoutShell {
    session: Session,
}

impl SessionCheckoutShell {
    /// Wrap the session of the current request.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self { session }
    }
}

impl CheckoutShell for SessionCheckoutShell {
    async fn set_checkout(&self, completed: bool) {
        if let Err(e) = self
            .session
            .insert(session_keys::CHECKOUT_COMPLETE, completed)
            .await
        {
            tracing::warn!(completed, "Failed to record checkout flag: {e}");
        }
    }
}

/// Put a receipt into the session slot, replacing any previous one.
///
/// This is the checkout handoff; it is not part of [`ReceiptStore`].
///
/// # Errors
///
/// Returns the session error if the record cannot be stored.
pub async fn stash_receipt(
    session: &Session,
    receipt_json: String,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::RECEIPT, receipt_json).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::MemoryStore;

    use super::*;

    const SAMPLE: &str = r#"{"customer_reference":"ORD-1","customer":{"email":"a@b.com"}}"#;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_load_absent() {
        let store = SessionReceiptStore::new(session());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_stash_load_delete() {
        let session = session();
        stash_receipt(&session, SAMPLE.to_string()).await.unwrap();

        let store = SessionReceiptStore::new(session.clone());
        let record = store.load().await.unwrap().unwrap();
        assert_eq!(record.reference(), Some("ORD-1"));

        store.delete().await.unwrap();
        assert!(store.load().await.unwrap().is_none());

        let raw: Option<Value> = session.get_value(session_keys::RECEIPT).await.unwrap();
        assert!(raw.is_none());
    }

    #[tokio::test]
    async fn test_delete_empty_slot() {
        let store = SessionReceiptStore::new(session());
        store.delete().await.unwrap();
        store.delete().await.unwrap();
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_load_malformed_text() {
        let session = session();
        stash_receipt(&session, "{\"customer_reference\":".to_string())
            .await
            .unwrap();

        let store = SessionReceiptStore::new(session);
        assert!(matches!(
            store.load().await,
            Err(ReceiptError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_load_value_written_as_object() {
        let session = session();
        let value: Value = serde_json::from_str(SAMPLE).unwrap();
        session.insert(session_keys::RECEIPT, value).await.unwrap();

        let store = SessionReceiptStore::new(session);
        let record = store.load().await.unwrap().unwrap();
        assert_eq!(record.reference(), Some("ORD-1"));
    }

    #[tokio::test]
    async fn test_load_value_of_wrong_shape() {
        let session = session();
        session.insert(session_keys::RECEIPT, 42).await.unwrap();

        let store = SessionReceiptStore::new(session);
        assert!(matches!(
            store.load().await,
            Err(ReceiptError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_set_checkout_flag() {
        let session = session();
        let shell = SessionCheckoutShell::new(session.clone());

        shell.set_checkout(true).await;
        let flag: Option<bool> = session.get(session_keys::CHECKOUT_COMPLETE).await.unwrap();
        assert_eq!(flag, Some(true));

        shell.set_checkout(false).await;
        let flag: Option<bool> = session.get(session_keys::CHECKOUT_COMPLETE).await.unwrap();
        assert_eq!(flag, Some(false));
    }
}
