//! Cart and order-summary line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CurrencyCode, Money, MoneyError, ProductId, Quantity};

/// One product entry in a cart or order summary.
///
/// `unit_price` is fixed once the item exists; only the quantity can change,
/// and only through [`LineItem::with_quantity`], which returns a new item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LineItemRecord", into = "LineItemRecord")]
pub struct LineItem {
    /// Product identifier, unique within a cart's working set.
    pub id: ProductId,
    /// Display label.
    pub name: String,
    unit_price: Money,
    quantity: Quantity,
    /// Reference to a display asset (usually an image URL).
    pub image_ref: Option<String>,
}

/// Flat on-disk shape used by fixtures and story data.
#[derive(Serialize, Deserialize)]
struct LineItemRecord {
    id: ProductId,
    name: String,
    #[serde(alias = "price")]
    unit_price: Decimal,
    #[serde(default)]
    currency_code: CurrencyCode,
    quantity: Quantity,
    #[serde(default, alias = "image_url")]
    image_ref: Option<String>,
}

impl TryFrom<LineItemRecord> for LineItem {
    type Error = MoneyError;

    fn try_from(record: LineItemRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: record.id,
            name: record.name,
            unit_price: Money::new(record.unit_price, record.currency_code)?,
            quantity: record.quantity,
            image_ref: record.image_ref,
        })
    }
}

impl From<LineItem> for LineItemRecord {
    fn from(item: LineItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            unit_price: item.unit_price.amount(),
            currency_code: item.unit_price.currency_code(),
            quantity: item.quantity,
            image_ref: item.image_ref,
        }
    }
}

impl LineItem {
    /// Create a line item.
    #[must_use]
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: Money,
        quantity: Quantity,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity,
            image_ref: None,
        }
    }

    /// Attach a display asset reference.
    #[must_use]
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    /// The same item with a different quantity.
    #[must_use]
    pub fn with_quantity(&self, quantity: Quantity) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }

    /// Price of a single unit.
    #[must_use]
    pub const fn unit_price(&self) -> Money {
        self.unit_price
    }

    /// Units in the cart.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Exact `unit_price × quantity`, not yet rounded.
    #[must_use]
    pub fn subtotal(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}
