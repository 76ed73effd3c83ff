//! Layout data shared by every page.

use chrono::{Datelike, Utc};

use crate::config::ShopConfig;

/// Header and footer values for `base.html`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageChrome {
    pub shop_name: String,
    /// Link target of the shop name in the header.
    pub shop_path: String,
    pub year: i32,
}

impl PageChrome {
    #[must_use]
    pub fn new(shop: &ShopConfig) -> Self {
        Self {
            shop_name: shop.name.clone(),
            shop_path: shop.path.clone(),
            year: Utc::now().year(),
        }
    }
}
