//! Derived subtotals and grand total.
//!
//! Arithmetic stays on exact decimals. Each line's displayed subtotal is
//! rounded once to the currency's minor unit, and the grand total is the
//! exact sum of unrounded subtotals, rounded once at the end. The grand total
//! can therefore differ by a centavo from the sum of the displayed line
//! subtotals when several lines end in half-centavos.

use serde::Serialize;
use tracing::warn;
use vitrine_core::{CurrencyCode, LineItem, Money, ProductId, Quantity};

/// Totals for one line of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineTotal {
    pub id: ProductId,
    pub unit_price: Money,
    pub quantity: Quantity,
    /// `unit_price × quantity`, rounded for display.
    pub subtotal: Money,
}

/// Totals for a whole working set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    /// One entry per line, in cart order.
    pub lines: Vec<LineTotal>,
    /// Sum of exact subtotals, rounded once.
    pub grand_total: Money,
    /// Total number of units across lines.
    pub item_count: u64,
}

impl CartTotals {
    /// Totals of an empty cart.
    #[must_use]
    pub const fn empty(currency: CurrencyCode) -> Self {
        Self {
            lines: Vec::new(),
            grand_total: Money::zero(currency),
            item_count: 0,
        }
    }

    /// Whether there is nothing to check out.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Totals for a specific line.
    #[must_use]
    pub fn line(&self, id: &ProductId) -> Option<&LineTotal> {
        self.lines.iter().find(|line| &line.id == id)
    }
}

/// Compute line subtotals and the grand total in `currency`.
///
/// Lines priced in a different currency cannot be summed; they are logged and
/// left out. [`LineItemStore`](super::LineItemStore) rejects such items when it
/// is seeded, so this only matters for callers using the function directly.
#[must_use]
pub fn calculate(items: &[LineItem], currency: CurrencyCode) -> CartTotals {
    let mut totals = CartTotals::empty(currency);
    let mut exact_sum = Money::zero(currency);

    for item in items {
        let subtotal = item.subtotal();
        let Ok(sum) = exact_sum.checked_add(&subtotal) else {
            warn!(
                id = %item.id,
                found = %subtotal.currency_code(),
                expected = %currency,
                "skipping line priced in another currency"
            );
            continue;
        };
        exact_sum = sum;
        totals.item_count += u64::from(item.quantity().get());
        totals.lines.push(LineTotal {
            id: item.id.clone(),
            unit_price: item.unit_price(),
            quantity: item.quantity(),
            subtotal: subtotal.rounded(),
        });
    }

    totals.grand_total = exact_sum.rounded();
    totals
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn item(id: &str, price: &str, qty: u32) -> LineItem {
        LineItem::new(
            id,
            id,
            Money::new(price.parse().unwrap(), CurrencyCode::BRL).unwrap(),
            Quantity::new(qty).unwrap(),
        )
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_order_summary_scenario() {
        let items = [item("1", "79.90", 1), item("2", "259.00", 2)];
        let totals = calculate(&items, CurrencyCode::BRL);

        assert_eq!(totals.grand_total.amount(), dec("597.90"));
        assert_eq!(totals.item_count, 3);
        assert_eq!(
            totals.line(&"2".into()).unwrap().subtotal.amount(),
            dec("518.00")
        );
    }

    #[test]
    fn test_empty_cart_is_zero() {
        let totals = calculate(&[], CurrencyCode::BRL);
        assert!(totals.is_empty());
        assert!(totals.grand_total.is_zero());
        assert_eq!(totals, CartTotals::empty(CurrencyCode::BRL));
    }

    #[test]
    fn test_grand_total_rounds_once() {
        // Each line is 0.005 → displays 0.01, but the exact sum is 0.015 → 0.02.
        let items = [item("a", "0.005", 1), item("b", "0.005", 1), item("c", "0.005", 1)];
        let totals = calculate(&items, CurrencyCode::BRL);

        assert!(totals.lines.iter().all(|l| l.subtotal.amount() == dec("0.01")));
        assert_eq!(totals.grand_total.amount(), dec("0.02"));
    }

    #[test]
    fn test_float_unfriendly_prices_are_exact() {
        let items = [item("a", "0.10", 3), item("b", "0.20", 1)];
        let totals = calculate(&items, CurrencyCode::BRL);
        assert_eq!(totals.grand_total.amount(), dec("0.50"));
    }

    #[test]
    fn test_foreign_currency_lines_are_skipped() {
        let usd = LineItem::new(
            "x",
            "x",
            Money::from_minor_units(100, CurrencyCode::USD),
            Quantity::MIN,
        );
        let totals = calculate(&[item("a", "1.00", 1), usd], CurrencyCode::BRL);
        assert_eq!(totals.lines.len(), 1);
        assert_eq!(totals.grand_total.amount(), dec("1.00"));
    }
}
