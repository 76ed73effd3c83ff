//! Shipping destination.

use serde::Serialize;

use super::receipt::non_blank;
use super::record::AddressRecord;
use crate::error::IncompleteReceipt;

/// Validated shipping address.
///
/// Required lines are never blank. `street_2` is `None` when the stored
/// value is absent or blank, so callers never have to check for an empty
/// second line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingAddress {
    pub name: String,
    pub street: String,
    pub street_2: Option<String>,
    pub town_city: String,
    pub county_state: String,
    pub postal_zip_code: String,
    pub country: String,
}

impl AddressRecord {
    pub(crate) fn validate(self) -> Result<ShippingAddress, IncompleteReceipt> {
        Ok(ShippingAddress {
            name: non_blank(self.name, "shipping.name")?,
            street: non_blank(self.street, "shipping.street")?,
            street_2: self.street_2.filter(|line| !line.trim().is_empty()),
            town_city: non_blank(self.town_city, "shipping.town_city")?,
            county_state: non_blank(self.county_state, "shipping.county_state")?,
            postal_zip_code: non_blank(self.postal_zip_code, "shipping.postal_zip_code")?,
            country: non_blank(self.country, "shipping.country")?,
        })
    }
}
