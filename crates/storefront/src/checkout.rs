//! WhatsApp checkout handoff.
//!
//! There is no in-app payment. Checkout renders the cart into a bilingual
//! (English, then Arabic) order message and builds a click-to-chat link
//! with the message prefilled. Opening the link belongs to a
//! [`CheckoutSink`]; whether it succeeds is not observed.

use core::fmt;
use std::borrow::Cow;

use hista_core::{Price, ProductId};
use thiserror::Error;
use tracing::{info, instrument};

use crate::cart::{Cart, CartLine};
use crate::config::StoreConfig;

/// Width of the rule separating the two language blocks.
pub const RULE_WIDTH: usize = 30;
const RULE_CHAR: char = '─';

/// Errors raised when checking out.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Nothing to order.
    #[error("cart is empty")]
    EmptyCart,

    /// A requested product id is not in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),
}

/// Language of one summary block in the order message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Arabic,
}

impl Language {
    /// Header line announcing a new order for `store_name`.
    #[must_use]
    pub fn header(self, store_name: &str) -> String {
        match self {
            Self::English => format!("New Order from {store_name}:"),
            Self::Arabic => format!("طلب جديد من {store_name}:"),
        }
    }

    /// Label in front of the order total.
    #[must_use]
    pub const fn total_label(self) -> &'static str {
        match self {
            Self::English => "Total",
            Self::Arabic => "المجموع",
        }
    }
}

/// The human-readable order sent to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderMessage {
    text: String,
}

impl OrderMessage {
    /// Render `cart` with a precomputed `total`.
    ///
    /// Layout: English block, blank line, rule, blank line, Arabic block.
    /// Each block is the header, a blank line, one line per cart line, a
    /// blank line and the total.
    #[must_use]
    pub fn new(cart: &Cart, total: Price, store_name: &str) -> Self {
        let lines = order_lines(cart);
        let english = summary_block(Language::English, store_name, &lines, total);
        let arabic = summary_block(Language::Arabic, store_name, &lines, total);
        let rule = RULE_CHAR.to_string().repeat(RULE_WIDTH);

        Self {
            text: format!("{english}\n\n{rule}\n\n{arabic}"),
        }
    }

    /// Render `cart` using its own total.
    #[must_use]
    pub fn for_cart(cart: &Cart, store_name: &str) -> Self {
        Self::new(cart, cart.total_price(), store_name)
    }

    /// The message text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The message percent-encoded for use as a query value.
    #[must_use]
    pub fn encoded(&self) -> Cow<'_, str> {
        urlencoding::encode(&self.text)
    }
}

impl fmt::Display for OrderMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// `<name> x<quantity> - <CODE> <line total>`
fn order_line(line: &CartLine) -> String {
    format!(
        "{} x{} - {}",
        line.product.name,
        line.quantity,
        line.line_total()
    )
}

/// One formatted line per cart line, in cart order, joined by newlines.
#[must_use]
pub fn order_lines(cart: &Cart) -> String {
    cart.lines().map(order_line).collect::<Vec<_>>().join("\n")
}

fn summary_block(language: Language, store_name: &str, lines: &str, total: Price) -> String {
    format!(
        "{}\n\n{lines}\n\n{}: {total}",
        language.header(store_name),
        language.total_label()
    )
}

/// A click-to-chat link with the order message prefilled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutLink {
    url: String,
    message: OrderMessage,
}

impl CheckoutLink {
    /// Build the checkout link for `cart`.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` if the cart has no lines.
    #[instrument(skip_all, fields(lines = cart.line_count()))]
    pub fn build(cart: &Cart, config: &StoreConfig) -> Result<Self, CheckoutError> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let message = OrderMessage::for_cart(cart, &config.store_name);
        Ok(Self::for_message(message, config))
    }

    /// Wrap an already rendered message.
    ///
    /// The URL is `<service>/<recipient>?text=<encoded message>`.
    #[must_use]
    pub fn for_message(message: OrderMessage, config: &StoreConfig) -> Self {
        let base = config.whatsapp_url.trim_end_matches('/');
        let url = format!(
            "{base}/{}?text={}",
            config.whatsapp_number,
            message.encoded()
        );
        Self { url, message }
    }

    /// The full URL.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// The message carried in the link.
    #[must_use]
    pub const fn message(&self) -> &OrderMessage {
        &self.message
    }
}

impl fmt::Display for CheckoutLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Something that can open an external link, e.g. a browser tab.
pub trait CheckoutSink {
    /// Open `link`. Fire and forget.
    fn open(&self, link: &CheckoutLink);
}

/// Build the checkout link for `cart` and hand it to `sink`.
///
/// # Errors
///
/// Returns `CheckoutError::EmptyCart` if the cart has no lines; the sink is
/// not called in that case.
pub fn checkout(
    cart: &Cart,
    config: &StoreConfig,
    sink: &impl CheckoutSink,
) -> Result<CheckoutLink, CheckoutError> {
    let link = CheckoutLink::build(cart, config)?;
    info!(
        lines = cart.line_count(),
        total = %cart.total_price(),
        "Handing order off to WhatsApp"
    );
    sink.open(&link);
    Ok(link)
}
