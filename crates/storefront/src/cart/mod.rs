//! Line-item reconciliation engine.
//!
//! One canonical engine shared by every cart-like surface:
//!
//! - [`dedup`] collapses repeated product IDs (last write wins, first position kept)
//! - [`reducer`] applies increase/decrease/remove actions with a quantity floor of one
//! - [`totals`] derives line subtotals and the grand total
//! - [`store`] owns the seed snapshot and the working copy, and notifies subscribers
//!
//! Data flows one way: seed list → dedup → reducer actions → totals → surfaces.

pub mod dedup;
pub mod reducer;
pub mod store;
pub mod totals;

pub use dedup::deduplicate;
pub use reducer::{CartAction, ParseActionError, apply};
pub use store::{CartSnapshot, CartSubscriber, LineItemStore, SubscriptionId};
pub use totals::{CartTotals, LineTotal, calculate};
