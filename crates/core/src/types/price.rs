//! Type-safe money representation using decimal arithmetic.
//!
//! Amounts are kept as exact [`Decimal`] values. Rounding to the currency's
//! minor unit happens only when a caller asks for it (for display), so sums of
//! many line items never accumulate per-line rounding error.

use core::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::Quantity;

/// Errors that can occur when constructing [`Money`] or a [`CurrencyCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Amounts are never negative.
    #[error("amount cannot be negative: {0}")]
    Negative(Decimal),
    /// Two amounts in different currencies were combined.
    #[error("currency mismatch: {left} vs {right}")]
    CurrencyMismatch {
        /// Currency of the left-hand amount.
        left: CurrencyCode,
        /// Currency of the right-hand amount.
        right: CurrencyCode,
    },
    /// The currency code is not one we know.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}

/// A non-negative amount of money in a specific currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRecord")]
pub struct Money {
    /// Amount in the currency's standard unit (e.g., reais, not centavos).
    amount: Decimal,
    /// ISO 4217 currency code.
    #[serde(default)]
    currency_code: CurrencyCode,
}

#[derive(Deserialize)]
struct MoneyRecord {
    amount: Decimal,
    #[serde(default)]
    currency_code: CurrencyCode,
}

impl TryFrom<MoneyRecord> for Money {
    type Error = MoneyError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        Self::new(record.amount, record.currency_code)
    }
}

impl Money {
    /// Create a new amount.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal, currency_code: CurrencyCode) -> Result<Self, MoneyError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(MoneyError::Negative(amount));
        }
        Ok(Self {
            amount,
            currency_code,
        })
    }

    /// Create an amount from minor units (e.g., centavos).
    #[must_use]
    pub fn from_minor_units(units: u32, currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::new(i64::from(units), currency_code.minor_units()),
            currency_code,
        }
    }

    /// Zero in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency_code,
        }
    }

    /// The exact, unrounded amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency of this amount.
    #[must_use]
    pub const fn currency_code(&self) -> CurrencyCode {
        self.currency_code
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Round to the currency's minor unit, half away from zero.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self {
            amount: self.amount.round_dp_with_strategy(
                self.currency_code.minor_units(),
                RoundingStrategy::MidpointAwayFromZero,
            ),
            currency_code: self.currency_code,
        }
    }

    /// Multiply by a quantity without rounding.
    ///
    /// Saturates at [`Decimal::MAX`], far beyond any realistic cart.
    #[must_use]
    pub fn times(&self, quantity: Quantity) -> Self {
        Self {
            amount: self
                .amount
                .saturating_mul(Decimal::from(quantity.get())),
            currency_code: self.currency_code,
        }
    }

    /// Add two amounts of the same currency without rounding.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if the currencies differ.
    pub fn checked_add(&self, other: &Self) -> Result<Self, MoneyError> {
        if self.currency_code != other.currency_code {
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency_code,
                right: other.currency_code,
            });
        }
        Ok(Self {
            amount: self.amount.saturating_add(other.amount),
            currency_code: self.currency_code,
        })
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    BRL,
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Display symbol.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::BRL => "R$",
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// Three-letter code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::BRL => "BRL",
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }

    /// Number of decimal places in the minor unit.
    #[must_use]
    pub const fn minor_units(&self) -> u32 {
        2
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CurrencyCode {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BRL" => Ok(Self::BRL),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            _ => Err(MoneyError::UnknownCurrency(s.to_owned())),
        }
    }
}
