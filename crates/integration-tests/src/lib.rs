//! Integration tests for Vitrine.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vitrine-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_surfaces` - Cart drawer, cart card and order summary over the bundled fixture
//! - `address_book` - Address selection, form and removal flows
//! - `catalog` - Favorites, product gallery and discount badge
//!
//! Every test mounts surfaces from the fixture that ships with
//! `vitrine-storefront`, so no services are needed.

use vitrine_storefront::config::DEFAULT_FIXTURE;
use vitrine_storefront::fixtures::CatalogFixture;

/// Load the fixture bundled with the storefront crate.
///
/// # Panics
///
/// Panics if the bundled fixture is missing or invalid.
#[must_use]
pub fn bundled_fixture() -> CatalogFixture {
    CatalogFixture::load(DEFAULT_FIXTURE).expect("bundled fixture should load")
}
