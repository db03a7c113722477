//! Display filters shared by the surfaces.

use vitrine_core::Money;

/// Non-breaking space placed between the currency symbol and the amount.
const NBSP: char = '\u{a0}';

/// Format an amount the way the storefront displays prices: `R$ 1.234,56`.
///
/// Uses `.` for thousands, `,` for decimals, and exactly two decimal places,
/// rounding half away from zero. The symbol comes from the amount's currency.
#[must_use]
pub fn format_price(money: &Money) -> String {
    let plain = format!("{:.2}", money.rounded().amount());
    let (whole, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    format!(
        "{}{NBSP}{},{cents}",
        money.currency_code().symbol(),
        group_thousands(whole)
    )
}

/// Insert `.` between groups of three digits.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
