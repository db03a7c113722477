//! Vitrine storefront library.
//!
//! Cart line-item reconciliation (deduplication, quantity changes, exact
//! totals), discount normalization, and the state behind the storefront's
//! cart, order summary, favorites, product and address surfaces.
//!
//! Each surface mounts its own [`cart::LineItemStore`] from an externally
//! supplied list and emits [`events::SurfaceEvent`]s for its host to handle.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod events;
pub mod filters;
pub mod fixtures;
pub mod pricing;
pub mod surfaces;

pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
