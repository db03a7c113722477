//! Vitrine Core - Shared types library.
//!
//! This crate provides the types used across all Vitrine components:
//! - `storefront` - Cart reconciliation, pricing, and surface state engines
//! - `cli` - Terminal preview of fixture data through those engines
//!
//! # Architecture
//!
//! The core crate contains only types and their invariants - no I/O, no
//! logging, no view state. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, quantities, line
//!   items, products, and addresses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
