//! Confirmation page component.
//!
//! # Lifecycle
//!
//! 1. [`ReceiptPage::mount`] loads the stored receipt once and signals the
//!    shell that checkout completed, whatever the load returned.
//! 2. The record is validated; only a complete receipt is projected into a
//!    [`ReceiptView`]. Anything else becomes a [`FallbackReason`] and nothing
//!    is rendered.
//! 3. [`shop_again`] deletes the receipt; the caller navigates afterwards.

use core::fmt;

use seities_core::{
    CheckoutShell, IncompleteReceipt, Receipt, ReceiptError, ReceiptStore, ShippingAddress,
};

use super::line_item::LineItemView;

/// Display data for the whole confirmation page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptView {
    /// Order identifier for the page header.
    pub order_reference: String,
    pub customer_email: String,
    /// One row per purchased item, in order.
    pub line_items: Vec<LineItemView>,
    pub shipping_cost: String,
    pub total: String,
    pub address: AddressView,
}

/// Display data for the shipping block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressView {
    pub name: String,
    pub street: String,
    /// Present only when the receipt has a non-blank second street line.
    pub street_2: Option<String>,
    pub town_city: String,
    pub county_state: String,
    pub postal_zip_code: String,
    pub country: String,
}

impl From<&Receipt> for ReceiptView {
    fn from(receipt: &Receipt) -> Self {
        Self {
            order_reference: receipt.customer_reference.clone(),
            customer_email: receipt.customer_email.clone(),
            line_items: receipt.line_items.iter().map(LineItemView::from).collect(),
            shipping_cost: receipt.shipping_cost.clone(),
            total: receipt.total.clone(),
            address: AddressView::from(&receipt.shipping_address),
        }
    }
}

impl From<&ShippingAddress> for AddressView {
    fn from(address: &ShippingAddress) -> Self {
        Self {
            name: address.name.clone(),
            street: address.street.clone(),
            street_2: address.street_2.clone(),
            town_city: address.town_city.clone(),
            county_state: address.county_state.clone(),
            postal_zip_code: address.postal_zip_code.clone(),
            country: address.country.clone(),
        }
    }
}

/// Why the confirmation page cannot be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// Nothing stored, e.g. direct navigation without checking out.
    Absent,
    /// The stored value is not a serialized receipt.
    Malformed,
    /// The receipt lacks something the page displays.
    Incomplete(IncompleteReceipt),
}

impl FallbackReason {
    /// Short label for logs and breadcrumbs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Malformed => "malformed",
            Self::Incomplete(_) => "incomplete",
        }
    }
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete(reason) => write!(f, "incomplete: {reason}"),
            _ => f.write_str(self.as_str()),
        }
    }
}

/// Outcome of mounting the confirmation page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiptPage {
    /// A complete receipt, ready to render.
    Ready(ReceiptView),
    /// Redirect to the fallback route; nothing is rendered.
    Fallback(FallbackReason),
}

impl ReceiptPage {
    /// Load, validate and project the stored receipt.
    ///
    /// The shell is told `true` exactly once, before validation. Malformed
    /// and incomplete records are purged from the store so a later visit
    /// does not hit them again.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::Storage`] if the backend fails. Receipt
    /// problems are reported as [`ReceiptPage::Fallback`], never as errors.
    pub async fn mount<S, C>(store: &S, shell: &C) -> Result<Self, ReceiptError>
    where
        S: ReceiptStore + Sync,
        C: CheckoutShell + Sync,
    {
        let loaded = store.load().await;
        shell.set_checkout(true).await;

        let record = match loaded {
            Ok(Some(record)) => record,
            Ok(None) => return Ok(Self::Fallback(FallbackReason::Absent)),
            Err(ReceiptError::Malformed(e)) => {
                tracing::warn!("Stored receipt is malformed: {e}");
                store.delete().await?;
                return Ok(Self::Fallback(FallbackReason::Malformed));
            }
            Err(e) => return Err(e),
        };

        let reference = record.reference().map(str::to_owned);
        match record.validate() {
            Ok(receipt) => {
                let extra_variants = receipt
                    .line_items
                    .iter()
                    .filter(|item| !item.additional_variants().is_empty())
                    .count();
                if extra_variants > 0 {
                    tracing::debug!(
                        order_reference = %receipt.customer_reference,
                        extra_variants,
                        "Line items carry variants beyond the first; only the first is shown"
                    );
                }
                Ok(Self::Ready(ReceiptView::from(&receipt)))
            }
            Err(reason) => {
                tracing::warn!(
                    order_reference = reference.as_deref().unwrap_or("<none>"),
                    %reason,
                    "Stored receipt is incomplete"
                );
                store.delete().await?;
                Ok(Self::Fallback(FallbackReason::Incomplete(reason)))
            }
        }
    }
}

/// The "Shop Again" action: delete the receipt, then reset the shell flag.
///
/// Deletion has completed when this returns, so the caller can navigate.
///
/// # Errors
///
/// Returns [`ReceiptError::Storage`] if the receipt cannot be deleted.
pub async fn shop_again<S, C>(store: &S, shell: &C) -> Result<(), ReceiptError>
where
    S: ReceiptStore + Sync,
    C: CheckoutShell + Sync,
{
    store.delete().await?;
    shell.set_checkout(false).await;
    Ok(())
}
