//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Liveness check
//! GET  /health/ready              - Readiness check (database, when configured)
//!
//! # Checkout
//! POST /checkout/receipt          - Store a receipt and go to the confirmation page
//! GET  /checkout/complete         - Order confirmation (redirects to the shop without a receipt)
//! POST /checkout/complete/dismiss - "Shop Again": delete the receipt and return to the shop
//! ```

pub mod checkout;
pub mod health;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/receipt", post(checkout::capture))
        .route("/complete", get(checkout::show))
        .route("/complete/dismiss", post(checkout::dismiss))
}

/// Build the complete routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/checkout", checkout_routes())
}
