//! Cart simulation and WhatsApp checkout.
//!
//! # Usage
//!
//! ```bash
//! # Two FIFA 24, one Adobe Photoshop
//! hista checkout --add 1 --add 1 --add 3
//!
//! # Add two Call of Duty then take one back out
//! hista checkout --add 2 --add 2 --remove 2
//! ```
//!
//! # Environment Variables
//!
//! - `STORE_NAME` - Store name in the order header
//! - `STORE_WHATSAPP_NUMBER` - Recipient of the order
//! - `STORE_WHATSAPP_URL` - Click-to-chat base URL

use hista_core::ProductId;
use hista_storefront::checkout::{self, order_lines};
use hista_storefront::{
    AppState, Cart, Catalog, CheckoutError, CheckoutLink, CheckoutSink, Page, StoreConfig,
};
use tracing::info;

/// Prints the link instead of opening a browser.
struct StdoutSink;

impl CheckoutSink for StdoutSink {
    #[allow(clippy::print_stdout)]
    fn open(&self, link: &CheckoutLink) {
        println!("\nOpen this link to send your order:\n{link}");
    }
}

/// Fill a session cart: every `add` first, then every `remove` (one unit each).
///
/// # Errors
///
/// Returns `CheckoutError::UnknownProduct` for an id missing from the catalog.
pub fn fill_cart(
    catalog: &Catalog,
    add: &[ProductId],
    remove: &[ProductId],
) -> Result<AppState, CheckoutError> {
    let mut state = AppState::new();

    for &id in add {
        let product = catalog.get(id).ok_or(CheckoutError::UnknownProduct(id))?;
        state.cart_mut().add(product);
    }
    for &id in remove {
        if catalog.get(id).is_none() {
            return Err(CheckoutError::UnknownProduct(id));
        }
        state.cart_mut().adjust_quantity(id, -1);
    }

    state.navigate(Page::Cart);
    Ok(state)
}

/// Cart page text: one line per cart line and the total, or the empty state.
#[must_use]
pub fn render_cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Your cart is empty\n".to_string();
    }
    format!(
        "{}\n\nTotal: {}\n",
        order_lines(cart),
        cart.total_price()
    )
}

/// Run the checkout command.
///
/// # Errors
///
/// Returns an error for unknown product ids, invalid configuration, or an
/// empty cart after removals.
#[allow(clippy::print_stdout)]
pub fn run(
    catalog: &Catalog,
    add: &[ProductId],
    remove: &[ProductId],
) -> hista_storefront::Result<()> {
    let config = StoreConfig::from_env()?;
    let state = fill_cart(catalog, add, remove)?;

    print!("{}\n{}", state.page_title(), render_cart(state.cart()));
    if let Some(badge) = state.cart_badge() {
        info!(lines = badge, units = state.cart().unit_count(), "Cart ready");
    }

    checkout::checkout(state.cart(), &config, &StdoutSink)?;
    Ok(())
}
