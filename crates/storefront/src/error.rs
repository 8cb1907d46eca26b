//! Unified error handling.
//!
//! The cart, filter and formatter never fail. Errors only come from the
//! edges: loading a catalog, reading configuration and the empty-cart guard
//! on checkout. `StorefrontError` gathers them for callers that drive the
//! whole engine.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::checkout::CheckoutError;
use crate::config::ConfigError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Catalog input was malformed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration value was invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Checkout could not proceed.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
