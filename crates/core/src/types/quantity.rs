//! Line-item quantity with a floor of one.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityError {
    /// Quantities start at one; removal is a separate operation.
    #[error("quantity must be at least 1")]
    BelowMinimum,
}

/// How many units of a product a line item holds.
///
/// ## Constraints
///
/// - Always `>= 1`. Dropping an item from a cart is an explicit removal,
///   never a decrement to zero.
///
/// ## Examples
///
/// ```
/// use vitrine_core::Quantity;
///
/// let one = Quantity::MIN;
/// assert_eq!(one.decremented(), None);
/// assert_eq!(one.incremented().get(), 2);
/// assert!(Quantity::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// The floor every line item respects.
    pub const MIN: Self = Self(1);

    /// Create a quantity.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::BelowMinimum`] for zero.
    pub const fn new(value: u32) -> Result<Self, QuantityError> {
        if value < Self::MIN.0 {
            return Err(QuantityError::BelowMinimum);
        }
        Ok(Self(value))
    }

    /// The underlying count.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// One more unit, saturating at `u32::MAX`.
    #[must_use]
    pub const fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// One fewer unit, or `None` when already at the floor.
    #[must_use]
    pub const fn decremented(self) -> Option<Self> {
        if self.0 > Self::MIN.0 {
            Some(Self(self.0 - 1))
        } else {
            None
        }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u32> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
