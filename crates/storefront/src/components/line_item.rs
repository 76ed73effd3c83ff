//! Line item row of the confirmation page.

use seities_core::LineItem;

/// Display data for one purchased item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItemView {
    /// Stable row key (the line item id).
    pub key: String,
    pub product_name: String,
    /// First variant's option joined to the quantity, e.g. `M x2`.
    pub selection: String,
    /// Symbol-formatted line total.
    pub line_total: String,
}

impl From<&LineItem> for LineItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            key: item.id.key(),
            product_name: item.product_name.clone(),
            selection: format!("{} x{}", item.variant().option_name, item.quantity),
            line_total: item.line_total.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use seities_core::ReceiptRecord;

    use super::*;

    fn item(json: &str) -> LineItem {
        let text = format!(
            r#"{{"customer_reference":"ORD-1","customer":{{"email":"a@b.com"}},"order":{{"line_items":[{json}],"shipping":{{"price":{{"formatted_with_symbol":"$5.00"}}}},"total":{{"formatted_with_symbol":"$25.00"}}}},"shipping":{{"name":"A","street":"1 Rd","town_city":"X","county_state":"Y","postal_zip_code":"000","country":"Z"}}}}"#
        );
        let receipt = ReceiptRecord::from_json(&text).unwrap().validate().unwrap();
        receipt.line_items.into_iter().next().unwrap()
    }

    #[test]
    fn test_projection() {
        let view = LineItemView::from(&item(
            r#"{"id":1,"product_name":"Tee","variants":[{"option_name":"M"}],"quantity":2,"line_total":{"formatted_with_symbol":"$20.00"}}"#,
        ));
        assert_eq!(
            view,
            LineItemView {
                key: "1".to_string(),
                product_name: "Tee".to_string(),
                selection: "M x2".to_string(),
                line_total: "$20.00".to_string(),
            }
        );
    }

    #[test]
    fn test_only_first_variant_is_shown() {
        let view = LineItemView::from(&item(
            r#"{"id":"item_9","product_name":"Cap","variants":[{"variant_name":"Color","option_name":"Red"},{"variant_name":"Size","option_name":"L"}],"quantity":1,"line_total":{"formatted_with_symbol":"$15.00"}}"#,
        ));
        assert_eq!(view.key, "item_9");
        assert_eq!(view.selection, "Red x1");
    }
}
