//! Product detail and favorites types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use url::Url;

use super::{Money, ProductId};

/// A product photo shown in the detail gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Image URL. Blank sources are dropped by the gallery.
    pub src: String,
    /// Alternative text for accessibility.
    #[serde(default)]
    pub alt: Option<String>,
}

impl Photo {
    /// Create a photo without alt text.
    #[must_use]
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
        }
    }
}

/// A product as shown on its detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current selling price.
    pub price: Money,
    /// Price before the markdown, if any.
    #[serde(default)]
    pub old_price: Option<Money>,
    /// Explicit discount, either a fraction in `(0, 1]` or a percentage in
    /// `(1, 100]`.
    #[serde(default)]
    pub discount: Option<Decimal>,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Gallery photos in display order.
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// A product saved to the shopper's favorites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteItem {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current price.
    pub price: Money,
    /// Reference to a display asset.
    #[serde(default)]
    pub image_ref: Option<String>,
    /// Public link for sharing. Absent when the product cannot be shared.
    #[serde(default)]
    pub share_url: Option<Url>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_favorite_share_url_is_optional() {
        let fav: FavoriteItem = serde_json::from_str(
            r#"{"id":"p-3","name":"Mouse","price":{"amount":"129.90"}}"#,
        )
        .unwrap();
        assert!(fav.share_url.is_none());

        let fav: FavoriteItem = serde_json::from_str(
            r#"{"id":"p-1","name":"Fone","price":{"amount":"599.90"},"share_url":"https://example.com/product/p-1"}"#,
        )
        .unwrap();
        assert_eq!(
            fav.share_url.unwrap().as_str(),
            "https://example.com/product/p-1"
        );
    }

    #[test]
    fn test_favorite_rejects_malformed_share_url() {
        assert!(
            serde_json::from_str::<FavoriteItem>(
                r#"{"id":"p-1","name":"Fone","price":{"amount":"1"},"share_url":"not a url"}"#,
            )
            .is_err()
        );
    }
}
