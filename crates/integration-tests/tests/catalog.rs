//! Integration tests for favorites, the product page and discount badges.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use rust_decimal::Decimal;
use url::Url;
use vitrine_core::{CurrencyCode, Money};
use vitrine_integration_tests::bundled_fixture;
use vitrine_storefront::events::{RecordingSink, SurfaceEvent};
use vitrine_storefront::pricing::{DiscountPercent, discount_for, normalize_explicit};
use vitrine_storefront::surfaces::{FavoriteItemCard, ProductDetails};

// =============================================================================
// Favorites
// =============================================================================

#[test]
fn test_only_linked_favorites_can_be_shared() {
    let mut sink = RecordingSink::new();
    let shared: Vec<bool> = bundled_fixture()
        .favorites
        .into_iter()
        .map(|item| FavoriteItemCard::new(item).share(&mut sink))
        .collect();

    assert_eq!(shared, [true, true, false]);
    assert_eq!(
        sink.events(),
        [
            SurfaceEvent::ShareRequested(Url::parse("https://example.com/product/p-1").unwrap()),
            SurfaceEvent::ShareRequested(Url::parse("https://example.com/product/p-2").unwrap()),
        ]
    );
}

#[test]
fn test_favorite_views_serialize_for_hosts() {
    let card = FavoriteItemCard::new(bundled_fixture().favorites.remove(2));
    let json = serde_json::to_value(card.view()).unwrap();

    assert_eq!(json["price"], "R$\u{a0}129,90");
    assert_eq!(json["can_share"], false);
}

// =============================================================================
// Product Details
// =============================================================================

fn details() -> ProductDetails {
    ProductDetails::new(bundled_fixture().product.unwrap(), true)
}

#[test]
fn test_product_page_from_fixture() {
    let view = details().view().unwrap();

    assert_eq!(view.price, "R$\u{a0}799,90");
    assert_eq!(view.old_price.as_deref(), Some("R$\u{a0}999,90"));
    assert_eq!(view.discount_badge.as_deref(), Some("-20% OFF"));
    // The blank photo in the fixture is dropped.
    assert_eq!(view.thumbnails.len(), 3);
    assert_eq!(view.photo_alt, "Notebook aberto sobre a mesa");
    assert_eq!(view.thumbnails[1].alt, "Miniatura 2");
    assert_eq!(view.position, "1/3");
}

#[test]
fn test_keyboard_navigation_and_zoom() {
    let mut details = details();
    let gallery = details.gallery_mut();

    assert!(gallery.handle_key("ArrowLeft"));
    assert_eq!(gallery.position_label().as_deref(), Some("3/3"));
    gallery.zoom_at(
        60.0,
        30.0,
        vitrine_storefront::surfaces::ZoomRect {
            left: 0.0,
            top: 0.0,
            width: 120.0,
            height: 120.0,
        },
    );

    let view = details.view().unwrap();
    assert!(view.thumbnails[2].active);
    assert_eq!(view.zoom_origin, "50.00% 25.00%");
}

#[test]
fn test_switching_to_product_with_fewer_photos_resets_gallery() {
    let mut details = details();
    details.gallery_mut().select(2);

    let mut smaller = details.product().clone();
    smaller.photos.truncate(1);
    details.set_product(smaller);

    assert_eq!(details.gallery().index(), 0);
    assert_eq!(details.view().unwrap().position, "1/1");
}

#[test]
fn test_product_actions() {
    let details = details();
    let mut sink = RecordingSink::new();
    details.add_to_cart(&mut sink);
    details.share(&mut sink);

    assert_eq!(
        sink.events(),
        [
            SurfaceEvent::AddToCartRequested("notebook-ultra-14".into()),
            SurfaceEvent::ShareProductRequested("notebook-ultra-14".into()),
        ]
    );
}

// =============================================================================
// Discounts
// =============================================================================

#[test]
fn test_explicit_discount_overrides_fixture_old_price() {
    let mut product = bundled_fixture().product.unwrap();
    product.price = Money::new("749.90".parse().unwrap(), CurrencyCode::BRL).unwrap();
    product.discount = Some(Decimal::from(15));

    assert_eq!(discount_for(&product).map(DiscountPercent::get), Some(15));
    assert_eq!(
        ProductDetails::new(product, false)
            .view()
            .unwrap()
            .discount_badge
            .as_deref(),
        Some("-15% OFF")
    );
}

#[test]
fn test_explicit_zero_discount_hides_badge_despite_old_price() {
    let mut product = bundled_fixture().product.unwrap();
    product.discount = Some(Decimal::ZERO);

    let view = ProductDetails::new(product, false).view().unwrap();
    assert_eq!(view.discount_badge, None);
    assert_eq!(view.old_price.as_deref(), Some("R$\u{a0}999,90"));
}

#[test]
fn test_fraction_and_percentage_display_alike() {
    let fraction = normalize_explicit("0.15".parse().unwrap()).unwrap();
    let percent = normalize_explicit(Decimal::from(15)).unwrap();
    assert_eq!(fraction, percent);
    assert_eq!(fraction.to_string(), "15%");
}
