//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `VITRINE_CURRENCY` - ISO 4217 display currency (default: BRL)
//! - `VITRINE_FIXTURE` - Path to the mock catalog fixture (default: bundled `fixtures/catalog.yaml`)
//! - `VITRINE_LOG` - `tracing` filter directive used when `RUST_LOG` is unset (default: info)
//! - `VITRINE_SHOW_GALLERY_HELPER` - Show the zoom/navigation hint under the gallery (default: true)
//! - `VITRINE_EMPTY_CART_MESSAGE` - Message shown in an empty cart
//! - `VITRINE_CHECKOUT_LABEL` - Cart drawer checkout button label
//! - `VITRINE_KEEP_BUYING_LABEL` - Cart drawer "keep buying" button label
//! - `VITRINE_SUMMARY_TITLE` - Order summary card title
//! - `VITRINE_SUMMARY_HELPER` - Order summary helper text (empty string hides it)
//! - `VITRINE_SUMMARY_CHECKOUT_LABEL` - Order summary checkout button label

use std::path::PathBuf;

use thiserror::Error;
use vitrine_core::CurrencyCode;

/// Fixture bundled with the crate.
pub const DEFAULT_FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/catalog.yaml");

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Currency every amount is displayed in
    pub currency: CurrencyCode,
    /// Mock catalog used in place of a backend
    pub fixture_path: PathBuf,
    /// Default `tracing` filter directive
    pub log_filter: String,
    /// Whether the product gallery shows its helper hint
    pub show_gallery_helper: bool,
    /// Texts shown by the surfaces
    pub labels: SurfaceLabels,
}

/// User-facing texts for the cart and summary surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceLabels {
    pub empty_cart_message: String,
    pub checkout: String,
    pub keep_buying: String,
    pub summary_title: String,
    /// `None` hides the helper line.
    pub summary_helper: Option<String>,
    pub summary_checkout: String,
}

impl Default for SurfaceLabels {
    fn default() -> Self {
        Self {
            empty_cart_message: "Seu carrinho está vazio.".to_string(),
            checkout: "Finalizar compra".to_string(),
            keep_buying: "Continuar comprando".to_string(),
            summary_title: "Resumo do pedido".to_string(),
            summary_helper: Some("Frete e impostos serão calculados na finalização.".to_string()),
            summary_checkout: "Prosseguir para o checkout".to_string(),
        }
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyCode::default(),
            fixture_path: PathBuf::from(DEFAULT_FIXTURE),
            log_filter: "info".to_string(),
            show_gallery_helper: true,
            labels: SurfaceLabels::default(),
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
    /// Returns `ConfigError` if a variable is set to an unparseable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let currency = match lookup("VITRINE_CURRENCY") {
            Some(raw) => raw.parse::<CurrencyCode>().map_err(|e| {
                ConfigError::InvalidEnvVar("VITRINE_CURRENCY".to_string(), e.to_string())
            })?,
            None => defaults.currency,
        };
        let show_gallery_helper = match lookup("VITRINE_SHOW_GALLERY_HELPER") {
            Some(raw) => parse_bool("VITRINE_SHOW_GALLERY_HELPER", &raw)?,
            None => defaults.show_gallery_helper,
        };

        let label_defaults = defaults.labels;
        let labels = SurfaceLabels {
            empty_cart_message: lookup("VITRINE_EMPTY_CART_MESSAGE")
                .unwrap_or(label_defaults.empty_cart_message),
            checkout: lookup("VITRINE_CHECKOUT_LABEL").unwrap_or(label_defaults.checkout),
            keep_buying: lookup("VITRINE_KEEP_BUYING_LABEL").unwrap_or(label_defaults.keep_buying),
            summary_title: lookup("VITRINE_SUMMARY_TITLE").unwrap_or(label_defaults.summary_title),
            summary_helper: match lookup("VITRINE_SUMMARY_HELPER") {
                Some(text) if text.trim().is_empty() => None,
                Some(text) => Some(text),
                None => label_defaults.summary_helper,
            },
            summary_checkout: lookup("VITRINE_SUMMARY_CHECKOUT_LABEL")
                .unwrap_or(label_defaults.summary_checkout),
        };

        Ok(Self {
            currency,
            fixture_path: lookup("VITRINE_FIXTURE").map_or(defaults.fixture_path, PathBuf::from),
            log_filter: lookup("VITRINE_LOG").unwrap_or(defaults.log_filter),
            show_gallery_helper,
            labels,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a boolean flag, accepting the usual spellings.
fn parse_bool(key: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("expected a boolean, got '{other}'"),
        )),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<StorefrontConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        StorefrontConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = load(&[]).unwrap();
        assert_eq!(config.currency, CurrencyCode::BRL);
        assert_eq!(config.log_filter, "info");
        assert!(config.show_gallery_helper);
        assert_eq!(config.labels, SurfaceLabels::default());
        assert!(config.fixture_path.ends_with("fixtures/catalog.yaml"));
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("VITRINE_CURRENCY", "usd"),
            ("VITRINE_SHOW_GALLERY_HELPER", "off"),
            ("VITRINE_CHECKOUT_LABEL", "Checkout"),
            ("VITRINE_SUMMARY_HELPER", ""),
            ("VITRINE_FIXTURE", "/tmp/catalog.json"),
        ])
        .unwrap();
        assert_eq!(config.currency, CurrencyCode::USD);
        assert!(!config.show_gallery_helper);
        assert_eq!(config.labels.checkout, "Checkout");
        assert_eq!(config.labels.summary_helper, None);
        assert_eq!(config.fixture_path, PathBuf::from("/tmp/catalog.json"));
    }

    #[test]
    fn test_invalid_currency() {
        let err = load(&[("VITRINE_CURRENCY", "XYZ")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "VITRINE_CURRENCY"));
    }

    #[test]
    fn test_invalid_bool() {
        assert!(load(&[("VITRINE_SHOW_GALLERY_HELPER", "maybe")]).is_err());
    }
}
