//! Integration tests for HISTA STORE.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p hista-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `catalog_browsing` - Category and search filtering through session state
//! - `checkout_flow` - Cart building through to the WhatsApp link
//!
//! This library holds the fixtures shared by the test files.

#![cfg_attr(not(test), forbid(unsafe_code))]

use hista_core::{Product, ProductId};
use hista_storefront::{Cart, Catalog};

/// FIFA 24, 144 LYD, games.
pub const FIFA_24: ProductId = ProductId::new(1);
/// Call of Duty, 168 LYD, games.
pub const CALL_OF_DUTY: ProductId = ProductId::new(2);
/// Adobe Photoshop, 72 LYD, apps.
pub const PHOTOSHOP: ProductId = ProductId::new(3);
/// Microsoft Office, 360 LYD, apps.
pub const OFFICE: ProductId = ProductId::new(4);

/// A product from the built-in catalog.
///
/// # Panics
///
/// Panics if `id` is not one of the built-in products.
#[must_use]
pub fn builtin_product(id: ProductId) -> Product {
    Catalog::builtin()
        .get(id)
        .cloned()
        .unwrap_or_else(|| panic!("product {id} is not in the built-in catalog"))
}

/// A cart built by adding each id once, in order.
#[must_use]
pub fn cart_with(ids: &[ProductId]) -> Cart {
    let mut cart = Cart::new();
    for &id in ids {
        cart.add(&builtin_product(id));
    }
    cart
}
