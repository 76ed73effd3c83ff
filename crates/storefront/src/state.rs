//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::{ShopConfig, StorefrontConfig};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    pool: Option<PgPool>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `pool` - `PostgreSQL` pool backing the session store, if any
    #[must_use]
    pub fn new(config: StorefrontConfig, pool: Option<PgPool>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, pool }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Shortcut for the shop configuration.
    #[must_use]
    pub fn shop(&self) -> &ShopConfig {
        &self.inner.config.shop
    }

    /// Get the database pool, when sessions are database-backed.
    #[must_use]
    pub fn pool(&self) -> Option<&PgPool> {
        self.inner.pool.as_ref()
    }
}
