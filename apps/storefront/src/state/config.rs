//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::path::PathBuf;

use serde::Serialize;
use storefront_core::{CartPolicy, DeliveryPolicy, Money};
use thiserror::Error;

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name shown in the header
    pub store_name: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Free-delivery threshold and flat fee
    pub delivery: DeliveryPolicy,

    /// Cart rules (stock enforcement)
    pub cart_policy: CartPolicy,

    /// Catalog JSON file; the bundled catalog is used when unset
    pub catalog_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    ///
    /// ## Default Values
    /// - Store: "Storefront Dev Store"
    /// - Currency: INR (₹)
    /// - Delivery: free from ₹999.00, otherwise ₹9.99
    /// - Stock limits: not enforced
    /// - Catalog: bundled
    fn default() -> Self {
        ConfigState {
            store_name: "Storefront Dev Store".to_string(),
            currency_code: "INR".to_string(),
            currency_symbol: "₹".to_string(),
            delivery: DeliveryPolicy::default(),
            cart_policy: CartPolicy::default(),
            catalog_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_STORE_NAME`: Override store name
    /// - `STOREFRONT_CURRENCY_CODE`: Override currency code
    /// - `STOREFRONT_FREE_DELIVERY_THRESHOLD`: Threshold in paise (e.g., "99900")
    /// - `STOREFRONT_DELIVERY_FEE`: Fee in paise (e.g., "999")
    /// - `STOREFRONT_ENFORCE_STOCK_LIMIT`: "true" or "false"
    /// - `STOREFRONT_CATALOG_PATH`: Catalog JSON file
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(store_name) = lookup("STOREFRONT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Some(currency_code) = lookup("STOREFRONT_CURRENCY_CODE") {
            config.currency_code = currency_code;
        }

        if let Some(threshold) = lookup("STOREFRONT_FREE_DELIVERY_THRESHOLD") {
            config.delivery.free_delivery_threshold =
                parse_paise("STOREFRONT_FREE_DELIVERY_THRESHOLD", &threshold)?;
        }

        if let Some(fee) = lookup("STOREFRONT_DELIVERY_FEE") {
            config.delivery.delivery_fee = parse_paise("STOREFRONT_DELIVERY_FEE", &fee)?;
        }

        if let Some(enforce) = lookup("STOREFRONT_ENFORCE_STOCK_LIMIT") {
            config.cart_policy.enforce_stock_limit = enforce
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("STOREFRONT_ENFORCE_STOCK_LIMIT".to_string()))?;
        }

        if let Some(path) = lookup("STOREFRONT_CATALOG_PATH") {
            config.catalog_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }
}

fn parse_paise(key: &str, value: &str) -> Result<Money, ConfigError> {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|paise| *paise >= 0)
        .map(Money::from_paise)
        .ok_or_else(|| ConfigError::InvalidValue(key.to_string()))
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
