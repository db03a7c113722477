//! Subcommand implementations.

pub mod address;
pub mod cart;
pub mod catalog;
pub mod discount;

use serde::Serialize;
use tracing::debug;
use vitrine_storefront::StorefrontConfig;
use vitrine_storefront::fixtures::CatalogFixture;

/// Load the configured fixture.
fn load_fixture(config: &StorefrontConfig) -> Result<CatalogFixture, Box<dyn std::error::Error>> {
    debug!(path = %config.fixture_path.display(), "loading fixture");
    Ok(CatalogFixture::load(&config.fixture_path)?)
}

/// Write a value to stdout as pretty JSON.
#[allow(clippy::print_stdout)]
fn print_json(value: &impl Serialize) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
