//! Unified error handling.
//!
//! Engine operations themselves never fail: actions on unknown IDs are no-ops.
//! Errors only arise at the edges, when configuration or mock data is loaded
//! or a working set is seeded from inconsistent input.

use thiserror::Error;
use vitrine_core::CurrencyCode;

use crate::config::ConfigError;
use crate::fixtures::FixtureError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Fixture data could not be loaded.
    #[error("Fixture error: {0}")]
    Fixture(#[from] FixtureError),

    /// A cart was seeded with items priced in another currency.
    #[error("Cart item {id} is priced in {found}, expected {expected}")]
    MixedCurrency {
        /// Offending product.
        id: String,
        /// Currency of the cart.
        expected: CurrencyCode,
        /// Currency of the item.
        found: CurrencyCode,
    },
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_error_display() {
        let err = StorefrontError::MixedCurrency {
            id: "p-1".to_string(),
            expected: CurrencyCode::BRL,
            found: CurrencyCode::USD,
        };
        assert_eq!(err.to_string(), "Cart item p-1 is priced in USD, expected BRL");

        let err = StorefrontError::from(ConfigError::InvalidEnvVar(
            "VITRINE_CURRENCY".to_string(),
            "unknown".to_string(),
        ));
        assert_eq!(
            err.to_string(),
            "Config error: Invalid environment variable VITRINE_CURRENCY: unknown"
        );
    }
}
