//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: `http://localhost:3000`)
//! - `STOREFRONT_DATABASE_URL` - `PostgreSQL` connection string for sessions
//!   (falls back to `DATABASE_URL`; in-memory sessions when neither is set)
//! - `STOREFRONT_SHOP_NAME` - Shop name shown on pages (default: Seities Apparel)
//! - `STOREFRONT_SHOP_PATH` - Product listing route (default: /)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error sample rate, 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate, 0.0-1.0 (default: 0.1)

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_SHOP_NAME: &str = "Seities Apparel";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// `PostgreSQL` database connection URL for the session store
    pub database_url: Option<SecretString>,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Shop identity and navigation
    pub shop: ShopConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g. production, staging)
    pub sentry_environment: Option<String>,
    /// Fraction of errors sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

/// Shop identity and the routes this crate hands navigation back to.
#[derive(Debug, Clone)]
pub struct ShopConfig {
    /// Display name used in the thank-you message and page chrome
    pub name: String,
    /// Product listing route; target of "Shop Again" and of fallbacks
    pub path: String,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SHOP_NAME.to_string(),
            path: "/".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string())
            })?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string())
            })?;
        let base_url = get_env_or_default("STOREFRONT_BASE_URL", "http://localhost:3000");

        let shop = ShopConfig::from_env()?;

        Ok(Self {
            database_url: get_database_url("STOREFRONT_DATABASE_URL"),
            host,
            port,
            base_url,
            shop,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: get_sample_rate("SENTRY_SAMPLE_RATE", 1.0)?,
            sentry_traces_sample_rate: get_sample_rate("SENTRY_TRACES_SAMPLE_RATE", 0.1)?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether cookies should carry the `Secure` attribute.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }

    /// Configuration for tests and local tooling: in-memory sessions,
    /// default shop, no Sentry.
    #[must_use]
    pub fn local() -> Self {
        Self {
            database_url: None,
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            base_url: "http://localhost:3000".to_string(),
            shop: ShopConfig::default(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl ShopConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let path = get_env_or_default("STOREFRONT_SHOP_PATH", "/");
        validate_route_path(&path, "STOREFRONT_SHOP_PATH")?;

        Ok(Self {
            name: get_env_or_default("STOREFRONT_SHOP_NAME", DEFAULT_SHOP_NAME),
            path,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL` (used by Fly.io postgres attach).
fn get_database_url(primary_key: &str) -> Option<SecretString> {
    std::env::var(primary_key)
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
        .filter(|url| !url.is_empty())
        .map(SecretString::from)
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a sample rate in `0.0..=1.0`.
fn get_sample_rate(key: &str, default: f32) -> Result<f32, ConfigError> {
    get_optional_env(key).map_or(Ok(default), |raw| parse_sample_rate(&raw, key))
}

fn parse_sample_rate(raw: &str, var_name: &str) -> Result<f32, ConfigError> {
    let rate = raw
        .parse::<f32>()
        .map_err(|e| ConfigError::InvalidEnvVar(var_name.to_string(), e.to_string()))?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ));
    }
    Ok(rate)
}

/// Navigation targets must be local absolute paths so redirects never leave the site.
fn validate_route_path(path: &str, var_name: &str) -> Result<(), ConfigError> {
    if !path.starts_with('/') || path.starts_with("//") {
        return Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("must be a local path starting with a single '/' (got '{path}')"),
        ));
    }
    Ok(())
}
