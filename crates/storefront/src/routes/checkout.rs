//! Checkout confirmation route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use seities_core::CheckoutShell;
use serde_json::Value;
use tower_sessions::Session;
use tracing::instrument;

use crate::components::{PageChrome, ReceiptPage, ReceiptView, shop_again};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::services::{SessionCheckoutShell, SessionReceiptStore, stash_receipt};
use crate::state::AppState;

/// Path of the confirmation page.
pub const CONFIRMATION_PATH: &str = "/checkout/complete";

/// Form target of the "Shop Again" action.
pub const DISMISS_PATH: &str = "/checkout/complete/dismiss";

/// Order confirmation page template.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/complete.html")]
pub struct ConfirmationTemplate {
    pub chrome: PageChrome,
    pub receipt: ReceiptView,
    pub dismiss_action: &'static str,
}

/// Store the receipt posted by the checkout flow and show the confirmation.
///
/// The body is kept verbatim; validation happens when the page mounts.
///
/// # Errors
///
/// Returns 400 if the body is not a JSON object, 500 if the session cannot
/// be written.
#[instrument(skip(session, body))]
pub async fn capture(session: Session, Json(body): Json<Value>) -> Result<Redirect> {
    if !body.is_object() {
        return Err(AppError::BadRequest(
            "receipt must be a JSON object".to_string(),
        ));
    }

    let reference = body
        .get("customer_reference")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    stash_receipt(&session, body.to_string()).await?;
    SessionCheckoutShell::new(session).set_checkout(false).await;

    tracing::info!(order_reference = %reference, "Receipt stored");
    add_breadcrumb(
        "checkout",
        "Receipt stored",
        Some(&[("order_reference", &reference)]),
    );

    Ok(Redirect::to(CONFIRMATION_PATH))
}

/// Display the order confirmation page.
///
/// Without a usable receipt nothing is rendered and the visitor is sent to
/// the shop.
///
/// # Errors
///
/// Returns 500 if the session store fails.
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<Response> {
    let store = SessionReceiptStore::new(session.clone());
    let shell = SessionCheckoutShell::new(session);

    match ReceiptPage::mount(&store, &shell).await? {
        ReceiptPage::Ready(receipt) => {
            tracing::info!(
                order_reference = %receipt.order_reference,
                line_items = receipt.line_items.len(),
                "Rendering order confirmation"
            );
            add_breadcrumb(
                "checkout",
                "Viewed confirmation",
                Some(&[("order_reference", &receipt.order_reference)]),
            );

            Ok(ConfirmationTemplate {
                chrome: PageChrome::new(state.shop()),
                receipt,
                dismiss_action: DISMISS_PATH,
            }
            .into_response())
        }
        ReceiptPage::Fallback(reason) => {
            tracing::info!(%reason, "No receipt to confirm, redirecting to shop");
            Ok(Redirect::to(&state.shop().path).into_response())
        }
    }
}

/// The "Shop Again" action.
///
/// The receipt is gone before the redirect is sent.
///
/// # Errors
///
/// Returns 500 if the receipt cannot be deleted.
#[instrument(skip(state, session))]
pub async fn dismiss(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let store = SessionReceiptStore::new(session.clone());
    let shell = SessionCheckoutShell::new(session);

    shop_again(&store, &shell).await?;
    add_breadcrumb("checkout", "Shop again", None);

    Ok(Redirect::to(&state.shop().path))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use seities_core::ReceiptRecord;

    use super::*;
    use crate::config::ShopConfig;

    const SAMPLE: &str = r#"{"customer_reference":"ORD-1","customer":{"email":"a@b.com"},"order":{"line_items":[{"id":1,"product_name":"Tee","variants":[{"option_name":"M"}],"quantity":2,"line_total":{"formatted_with_symbol":"$20.00"}}],"shipping":{"price":{"formatted_with_symbol":"$5.00"}},"total":{"formatted_with_symbol":"$25.00"}},"shipping":{"name":"A","street":"1 Rd","town_city":"X","county_state":"Y","postal_zip_code":"000","country":"Z"}}"#;

    fn view(json: &str) -> ReceiptView {
        let receipt = ReceiptRecord::from_json(json).unwrap().validate().unwrap();
        ReceiptView::from(&receipt)
    }

    fn render(receipt: ReceiptView) -> String {
        ConfirmationTemplate {
            chrome: PageChrome::new(&ShopConfig::default()),
            receipt,
            dismiss_action: DISMISS_PATH,
        }
        .render()
        .unwrap()
    }

    #[test]
    fn test_renders_sample_in_order() {
        let html = render(view(SAMPLE));

        let positions: Vec<usize> = [
            "Your order <span class=\"order-reference\">ORD-1</span> is complete!",
            "Thanks for shopping at Seities Apparel",
            "<span class=\"customer-email\">a@b.com</span>",
            "Tee",
            "M x2",
            "$20.00",
            "$5.00",
            "$25.00",
            "Shipping to",
            "1 Rd",
            "Shop Again",
        ]
        .iter()
        .map(|needle| html.find(needle).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_one_row_per_line_item() {
        let json = SAMPLE.replace(
            r#""line_items":[{"id":1,"#,
            r#""line_items":[{"id":"item_9","product_name":"Cap","variants":[{"option_name":"Red"}],"quantity":1,"line_total":{"formatted_with_symbol":"$5.00"}},{"id":1,"#,
        );
        let html = render(view(&json));

        assert_eq!(html.matches("data-key=").count(), 2);
        assert!(html.find("data-key=\"item_9\"").unwrap() < html.find("data-key=\"1\"").unwrap());
        assert!(html.contains("Red x1"));
    }

    #[test]
    fn test_empty_order_renders_no_rows() {
        let json = SAMPLE.replace(
            r#""line_items":[{"id":1,"product_name":"Tee","variants":[{"option_name":"M"}],"quantity":2,"line_total":{"formatted_with_symbol":"$20.00"}}]"#,
            r#""line_items":[]"#,
        );
        let html = render(view(&json));

        assert_eq!(html.matches("data-key=").count(), 0);
        assert!(html.contains("$25.00"));
    }

    #[test]
    fn test_street_2_only_when_present() {
        let html = render(view(SAMPLE));
        assert_eq!(html.matches("class=\"address-line\"").count(), 4);

        let json = SAMPLE.replace(r#""street":"1 Rd","#, r#""street":"1 Rd","street_2":"Apt 4","#);
        let html = render(view(&json));
        assert_eq!(html.matches("class=\"address-line\"").count(), 5);
        assert!(html.find("1 Rd").unwrap() < html.find("Apt 4").unwrap());
    }

    #[test]
    fn test_render_is_repeatable() {
        let receipt = view(SAMPLE);
        assert_eq!(render(receipt.clone()), render(receipt));
    }

    #[test]
    fn test_markup_is_escaped() {
        let json = SAMPLE.replace(r#""product_name":"Tee""#, r#""product_name":"<b>Tee</b>""#);
        let html = render(view(&json));
        assert!(!html.contains("<b>Tee</b>"));
        assert!(html.contains("&lt;b&gt;Tee"));
    }
}
