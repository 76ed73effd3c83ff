//! Session slots used by the checkout confirmation flow.
//!
//! The session stands in for per-visitor browser storage: it is keyed by the
//! session cookie and outlives a single page view.

/// Session keys.
pub mod keys {
    /// Serialized receipt written at checkout handoff, read by the
    /// confirmation page, removed on "Shop Again".
    pub const RECEIPT: &str = seities_core::RECEIPT_SLOT;

    /// Whether the visitor has just completed checkout.
    pub const CHECKOUT_COMPLETE: &str = "checkout_complete";
}
