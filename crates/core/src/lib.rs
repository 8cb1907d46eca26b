//! HISTA STORE Core - Shared domain types.
//!
//! This crate provides the types used across all HISTA STORE components:
//! - `storefront` - Catalog filtering, cart store and checkout handoff
//! - `cli` - Command-line driver for browsing the catalog and checking out
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no environment access,
//! no link opening. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, categories and products

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
