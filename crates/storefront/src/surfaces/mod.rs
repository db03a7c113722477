//! Presentation surfaces.
//!
//! Each surface keeps only UI-local state (open/closed, selected index, form
//! values) and renders a plain view model. Cart arithmetic lives in
//! [`crate::cart`]; surfaces dispatch into it and read back snapshots.

pub mod addresses;
pub mod cart;
pub mod favorites;
pub mod order_summary;
pub mod product_details;
pub mod regions;

pub use addresses::{AddressModal, AddressRow, AddressesView, ManageAddressesCard, ModalMode, RemovalPrompt};
pub use cart::{CartCard, CartDrawer, CartItemView, CartView};
pub use favorites::{FavoriteItemCard, FavoriteView};
pub use order_summary::{OrderSummaryCard, OrderSummaryView, SummaryRow};
pub use product_details::{Gallery, ProductDetails, ProductDetailsView, ThumbnailView, ZoomRect};
pub use regions::{BrazilianState, SelectOption};
