//! Favorites and product detail commands.

use vitrine_storefront::StorefrontConfig;
use vitrine_storefront::surfaces::{FavoriteItemCard, FavoriteView, ProductDetails};

use super::{load_fixture, print_json};

/// Render every favorite card in the fixture.
///
/// # Errors
///
/// Returns an error if the fixture cannot be loaded.
pub fn favorites(config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let fixture = load_fixture(config)?;
    let views: Vec<FavoriteView> = fixture
        .favorites
        .into_iter()
        .map(|item| FavoriteItemCard::new(item).view())
        .collect();
    print_json(&views)
}

/// Render the fixture product page.
///
/// # Errors
///
/// Returns an error if the fixture cannot be loaded, has no product, or the
/// product has no photos to show.
pub fn product(config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let fixture = load_fixture(config)?;
    let product = fixture.product.ok_or("fixture has no product")?;
    let details = ProductDetails::new(product, config.show_gallery_helper);
    let view = details.view().ok_or("product has no photos")?;
    print_json(&view)
}
