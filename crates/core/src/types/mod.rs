//! Core types for Vitrine.
//!
//! This module provides type-safe wrappers for common storefront concepts.

pub mod address;
pub mod id;
pub mod line_item;
pub mod price;
pub mod product;
pub mod quantity;

pub use address::{
    Address, AddressField, AddressFieldError, AddressForm, DEFAULT_COUNTRY, mask_zip_code,
};
pub use id::*;
pub use line_item::LineItem;
pub use price::{CurrencyCode, Money, MoneyError};
pub use product::{FavoriteItem, Photo, Product};
pub use quantity::{Quantity, QuantityError};
