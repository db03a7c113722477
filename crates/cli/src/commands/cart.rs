//! Cart and order summary commands.

use tracing::info;
use vitrine_storefront::StorefrontConfig;
use vitrine_storefront::cart::CartAction;
use vitrine_storefront::surfaces::{CartCard, CartDrawer, OrderSummaryCard};

use super::{load_fixture, print_json};

/// Render the fixture cart as mounted.
///
/// # Errors
///
/// Returns an error if the fixture cannot be loaded or mixes currencies.
pub fn show(config: &StorefrontConfig, card: bool) -> Result<(), Box<dyn std::error::Error>> {
    let fixture = load_fixture(config)?;
    if card {
        let card = CartCard::new(
            fixture.cart,
            config.currency,
            config.labels.empty_cart_message.clone(),
        )?;
        print_json(&card.view())
    } else {
        let drawer = CartDrawer::new(fixture.cart, config.currency, config.labels.clone())?;
        print_json(&drawer.view())
    }
}

/// Apply actions to the fixture cart in order and render the result.
///
/// # Errors
///
/// Returns an error if an action does not parse or the fixture cannot be
/// loaded. Actions on IDs not in the cart are ignored.
pub fn apply(config: &StorefrontConfig, actions: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let actions = actions
        .iter()
        .map(|raw| raw.parse::<CartAction>())
        .collect::<Result<Vec<_>, _>>()?;

    let fixture = load_fixture(config)?;
    let mut drawer = CartDrawer::new(fixture.cart, config.currency, config.labels.clone())?;
    for action in &actions {
        let snapshot = drawer.store_mut().dispatch(action);
        info!(%action, revision = snapshot.revision, "applied");
    }

    print_json(&drawer.view())
}

/// Render the fixture order summary.
///
/// # Errors
///
/// Returns an error if the fixture cannot be loaded or mixes currencies.
pub fn summary(config: &StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    let fixture = load_fixture(config)?;
    let card = OrderSummaryCard::new(fixture.order_summary, config.currency, config.labels.clone())?;
    print_json(&card.view())
}
