//! Validated line items.

use std::num::NonZeroU32;

use serde::Serialize;

use super::id::LineItemId;
use super::record::{LineItemRecord, VariantRecord};
use crate::error::IncompleteReceipt;

/// A purchased product entry ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// Stable display key, unique within the receipt.
    pub id: LineItemId,
    pub product_name: String,
    pub quantity: NonZeroU32,
    /// Symbol-formatted line total (e.g. `$20.00`).
    pub line_total: String,
    variant: Variant,
    additional_variants: Vec<Variant>,
}

/// A selected product option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    /// Option group label (e.g. `Size`), when the provider sends one.
    pub variant_name: Option<String>,
    /// Chosen option (e.g. `M`).
    pub option_name: String,
}

impl LineItem {
    /// The first selected variant, which is the one the page shows.
    #[must_use]
    pub const fn variant(&self) -> &Variant {
        &self.variant
    }

    /// Variants after the first. Carried but not displayed.
    #[must_use]
    pub fn additional_variants(&self) -> &[Variant] {
        &self.additional_variants
    }
}

impl LineItemRecord {
    /// Validate one item at `index` within `order.line_items`.
    pub(crate) fn validate(self, index: usize) -> Result<LineItem, IncompleteReceipt> {
        let missing = |field| IncompleteReceipt::MissingLineItemField { index, field };

        let id = self.id.ok_or_else(|| missing("id"))?;
        let product_name = self.product_name.ok_or_else(|| missing("product_name"))?;
        let quantity = self.quantity.ok_or_else(|| missing("quantity"))?;
        let Some(quantity) = NonZeroU32::new(quantity) else {
            return Err(IncompleteReceipt::ZeroQuantity { id });
        };
        let line_total = self
            .line_total
            .and_then(|money| money.formatted_with_symbol)
            .ok_or_else(|| missing("line_total.formatted_with_symbol"))?;

        let mut variants = self.variants.unwrap_or_default().into_iter();
        let variant = variants
            .next()
            .ok_or_else(|| missing("variants"))?
            .into_variant()
            .ok_or_else(|| missing("variants[0].option_name"))?;
        let additional_variants = variants.filter_map(VariantRecord::into_variant).collect();

        Ok(LineItem {
            id,
            product_name,
            quantity,
            line_total,
            variant,
            additional_variants,
        })
    }
}

impl VariantRecord {
    fn into_variant(self) -> Option<Variant> {
        Some(Variant {
            variant_name: self.variant_name,
            option_name: self.option_name?,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::MoneyRecord;

    fn record() -> LineItemRecord {
        LineItemRecord {
            id: Some(LineItemId::from("item_1")),
            product_name: Some("Tee".to_string()),
            variants: Some(vec![VariantRecord {
                variant_name: Some("Size".to_string()),
                option_name: Some("M".to_string()),
            }]),
            quantity: Some(2),
            line_total: Some(MoneyRecord {
                formatted_with_symbol: Some("$20.00".to_string()),
            }),
        }
    }

    #[test]
    fn test_validate_complete_item() {
        let item = record().validate(0).unwrap();
        assert_eq!(item.product_name, "Tee");
        assert_eq!(item.quantity.get(), 2);
        assert_eq!(item.line_total, "$20.00");
        assert_eq!(item.variant().option_name, "M");
        assert!(item.additional_variants().is_empty());
    }

    #[test]
    fn test_validate_no_variants() {
        let mut rec = record();
        rec.variants = Some(Vec::new());
        assert_eq!(
            rec.validate(3).unwrap_err(),
            IncompleteReceipt::MissingLineItemField {
                index: 3,
                field: "variants",
            }
        );

        let mut rec = record();
        rec.variants = None;
        assert!(matches!(
            rec.validate(0),
            Err(IncompleteReceipt::MissingLineItemField {
                field: "variants",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_first_variant_without_option() {
        let mut rec = record();
        rec.variants = Some(vec![VariantRecord::default()]);
        assert!(matches!(
            rec.validate(0),
            Err(IncompleteReceipt::MissingLineItemField {
                field: "variants[0].option_name",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_keeps_additional_variants() {
        let mut rec = record();
        rec.variants = Some(vec![
            VariantRecord {
                variant_name: Some("Size".to_string()),
                option_name: Some("M".to_string()),
            },
            VariantRecord {
                variant_name: Some("Color".to_string()),
                option_name: Some("Black".to_string()),
            },
        ]);
        let item = rec.validate(0).unwrap();
        assert_eq!(item.variant().option_name, "M");
        assert_eq!(item.additional_variants().len(), 1);
        assert_eq!(item.additional_variants()[0].option_name, "Black");
    }

    #[test]
    fn test_validate_zero_quantity() {
        let mut rec = record();
        rec.quantity = Some(0);
        assert_eq!(
            rec.validate(0).unwrap_err(),
            IncompleteReceipt::ZeroQuantity {
                id: LineItemId::from("item_1"),
            }
        );
    }

    #[test]
    fn test_validate_missing_line_total_symbol() {
        let mut rec = record();
        rec.line_total = Some(MoneyRecord::default());
        assert!(matches!(
            rec.validate(0),
            Err(IncompleteReceipt::MissingLineItemField {
                field: "line_total.formatted_with_symbol",
                ..
            })
        ));
    }
}
