//! Discount normalization for the product detail page.
//!
//! A product can carry an explicit discount, written either as a fraction
//! (`0.15`) or as a percentage (`15`), and/or an old price. Both collapse into
//! one whole-number percentage for the badge.
//!
//! The value `1` is ambiguous: it could mean "1%" or "a fraction of 1.0". It
//! is read as a fraction, so `discount = 1` shows as 100%.

use core::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use vitrine_core::{Money, Product};

/// A whole-number discount between 1 and 100 percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    /// Wrap a rounded percentage, rejecting 0 and anything above 100.
    #[must_use]
    pub const fn new(percent: u8) -> Option<Self> {
        if percent == 0 || percent > 100 {
            None
        } else {
            Some(Self(percent))
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Badge text, e.g. `-15% OFF`.
    #[must_use]
    pub fn badge(self) -> String {
        format!("-{self} OFF")
    }

    fn from_decimal(percent: Decimal) -> Option<Self> {
        percent
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u8()
            .and_then(Self::new)
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Normalize an explicit discount value.
///
/// Values in `(0, 1]` are fractions and are scaled by 100; values in
/// `(1, 100]` are already percentages. Anything else is ignored.
#[must_use]
pub fn normalize_explicit(discount: Decimal) -> Option<DiscountPercent> {
    let hundred = Decimal::ONE_HUNDRED;
    if discount > Decimal::ZERO && discount <= Decimal::ONE {
        DiscountPercent::from_decimal(discount * hundred)
    } else if discount > Decimal::ONE && discount <= hundred {
        DiscountPercent::from_decimal(discount)
    } else {
        None
    }
}

/// Derive a discount from the markdown between `old_price` and `price`.
#[must_use]
pub fn derive_from_prices(price: &Money, old_price: &Money) -> Option<DiscountPercent> {
    let (now, before) = (price.amount(), old_price.amount());
    if before <= now || before.is_zero() {
        return None;
    }
    let ratio = (before - now).checked_div(before)?;
    DiscountPercent::from_decimal(ratio * Decimal::ONE_HUNDRED)
}

/// The single discount to display for a product, if any.
///
/// An explicit discount always decides, even when it is out of range and
/// shows nothing. The old price is only used when no discount is set.
#[must_use]
pub fn discount_for(product: &Product) -> Option<DiscountPercent> {
    resolve(product.discount, &product.price, product.old_price.as_ref())
}

/// Same as [`discount_for`], over loose values.
#[must_use]
pub fn resolve(
    discount: Option<Decimal>,
    price: &Money,
    old_price: Option<&Money>,
) -> Option<DiscountPercent> {
    match discount {
        Some(explicit) => normalize_explicit(explicit),
        None => old_price.and_then(|old| derive_from_prices(price, old)),
    }
}
