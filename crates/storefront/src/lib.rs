//! HISTA STORE Storefront library.
//!
//! The cart and catalog engine behind the storefront: everything a view
//! layer needs to list products, keep a cart and hand an order off to
//! WhatsApp. State lives in memory only.
//!
//! # Modules
//!
//! - [`catalog`] - Product catalog and the category/search filter
//! - [`cart`] - Cart store keyed by product id
//! - [`checkout`] - Bilingual order message and the WhatsApp link
//! - [`state`] - Per-session application state
//! - [`config`] - Store configuration from the environment
//! - [`error`] - Aggregate error type

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod state;

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, CatalogError};
pub use checkout::{CheckoutError, CheckoutLink, CheckoutSink, Language, OrderMessage};
pub use config::{ConfigError, StoreConfig};
pub use error::{Result, StorefrontError};
pub use state::{AppState, Page};
