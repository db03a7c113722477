//! Discount normalization command.

use rust_decimal::Decimal;
use serde::Serialize;
use vitrine_core::Money;
use vitrine_storefront::StorefrontConfig;
use vitrine_storefront::filters::format_price;
use vitrine_storefront::pricing::{DiscountPercent, derive_from_prices, normalize_explicit, resolve};

#[derive(Debug, Serialize)]
struct DiscountReport {
    price: String,
    old_price: Option<String>,
    /// Percentage from the explicit value, if usable.
    explicit: Option<DiscountPercent>,
    /// Percentage derived from the old price, if any.
    derived: Option<DiscountPercent>,
    /// What the badge shows. A set discount hides the old-price markdown.
    badge: Option<String>,
}

/// Print how a price, old price and explicit discount resolve to a badge.
///
/// # Errors
///
/// Returns an error if a price is negative.
pub fn run(
    config: &StorefrontConfig,
    price: Decimal,
    old_price: Option<Decimal>,
    discount: Option<Decimal>,
) -> Result<(), Box<dyn std::error::Error>> {
    let price = Money::new(price, config.currency)?;
    let old_price = old_price
        .map(|amount| Money::new(amount, config.currency))
        .transpose()?;

    let explicit = discount.and_then(normalize_explicit);
    let derived = old_price
        .as_ref()
        .and_then(|old| derive_from_prices(&price, old));

    super::print_json(&DiscountReport {
        price: format_price(&price),
        old_price: old_price.as_ref().map(format_price),
        explicit,
        derived,
        badge: resolve(discount, &price, old_price.as_ref()).map(DiscountPercent::badge),
    })
}
