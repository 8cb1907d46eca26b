//! Integration tests for the cart-to-WhatsApp checkout flow.
//!
//! These tests drive the cart store and order formatter together the way
//! the storefront does when a visitor presses "Checkout via WhatsApp".

use std::cell::Cell;

use hista_integration_tests::{CALL_OF_DUTY, FIFA_24, OFFICE, PHOTOSHOP, builtin_product, cart_with};
use hista_storefront::checkout::{self, RULE_WIDTH};
use hista_storefront::{
    Cart, Catalog, CheckoutError, CheckoutLink, CheckoutSink, OrderMessage, StoreConfig,
};

// =============================================================================
// Cart Tests
// =============================================================================

#[test]
fn test_repeated_add_yields_single_line() {
    for count in 1..=6_u32 {
        let cart = cart_with(&vec![CALL_OF_DUTY; count as usize]);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.get(CALL_OF_DUTY).map(|line| line.quantity), Some(count));
    }
}

#[test]
fn test_add_twice_then_remove_two() {
    let mut cart = cart_with(&[FIFA_24, FIFA_24]);
    cart.adjust_quantity(FIFA_24, -2);
    assert!(cart.get(FIFA_24).is_none());
}

#[test]
fn test_adjust_by_negative_quantity_always_removes() {
    for count in 1..=4_usize {
        let mut cart = cart_with(&vec![OFFICE; count]);
        cart.add(&builtin_product(PHOTOSHOP));
        let quantity = i64::from(cart.get(OFFICE).map_or(0, |line| line.quantity));
        cart.adjust_quantity(OFFICE, -quantity);
        assert!(cart.get(OFFICE).is_none());
        assert_eq!(cart.line_count(), 1);
    }
}

#[test]
fn test_total_matches_sum_of_lines() {
    let cart = cart_with(&[FIFA_24, OFFICE, FIFA_24, CALL_OF_DUTY, PHOTOSHOP, OFFICE]);
    let expected = 144 * 2 + 360 * 2 + 168 + 72;
    assert_eq!(
        cart.total_price().amount,
        rust_decimal::Decimal::from(expected)
    );
}

#[test]
fn test_total_scenario() {
    let cart = cart_with(&[FIFA_24, FIFA_24, PHOTOSHOP]);
    assert_eq!(cart.total_price().amount_string(), "360.00");
}

// =============================================================================
// Order Message Tests
// =============================================================================

#[test]
fn test_order_message_scenario() {
    let cart = cart_with(&[FIFA_24, FIFA_24, PHOTOSHOP]);
    let message = OrderMessage::for_cart(&cart, "HISTA STORE");
    let text = message.as_str();

    let line_at = text.find("FIFA 24 x2 - LYD 288.00").expect("line present");
    let total_at = text.find("Total: LYD 360.00").expect("total present");
    let rule = "─".repeat(RULE_WIDTH);
    let rule_at = text.find(&rule).expect("rule present");
    let arabic_at = text.find("المجموع: LYD 360.00").expect("arabic total present");

    assert!(line_at < total_at);
    assert!(total_at < rule_at);
    assert!(rule_at < arabic_at);
}

#[test]
fn test_order_message_keeps_cart_order() {
    let cart = cart_with(&[OFFICE, CALL_OF_DUTY]);
    let message = OrderMessage::for_cart(&cart, "HISTA STORE");
    let office_at = message.as_str().find("Microsoft Office x1").expect("office line");
    let cod_at = message.as_str().find("Call of Duty x1").expect("cod line");
    assert!(office_at < cod_at);
}

// =============================================================================
// Link Tests
// =============================================================================

struct CountingSink {
    calls: Cell<usize>,
}

impl CheckoutSink for CountingSink {
    fn open(&self, _link: &CheckoutLink) {
        self.calls.set(self.calls.get() + 1);
    }
}

#[test]
fn test_link_round_trips_message() {
    let cart = cart_with(&[FIFA_24, FIFA_24, PHOTOSHOP]);
    let link = CheckoutLink::build(&cart, &StoreConfig::default()).expect("non-empty cart");
    let (base, encoded) = link.as_str().split_once("?text=").expect("text parameter");
    assert_eq!(base, "https://wa.me/2180915430176");
    let decoded = urlencoding::decode(encoded).expect("valid UTF-8");
    assert_eq!(decoded, link.message().as_str());
}

#[test]
fn test_checkout_opens_sink_once() {
    let sink = CountingSink { calls: Cell::new(0) };
    let cart = cart_with(&[OFFICE]);
    checkout::checkout(&cart, &StoreConfig::default(), &sink).expect("checkout succeeds");
    assert_eq!(sink.calls.get(), 1);
}

#[test]
fn test_checkout_empty_cart() {
    let sink = CountingSink { calls: Cell::new(0) };
    let result = checkout::checkout(&Cart::new(), &StoreConfig::default(), &sink);
    assert_eq!(result, Err(CheckoutError::EmptyCart));
    assert_eq!(sink.calls.get(), 0);
}

#[test]
fn test_checkout_with_oversized_price_does_not_overflow() {
    let catalog = Catalog::from_json(
        r#"[{"id": 1, "name": "Collector Edition", "price": "79228162514264337593543950335",
             "image": "", "category": "games", "description": ""}]"#,
    )
    .expect("largest decimal is a valid price");
    let product = catalog.products().first().expect("one product");

    let mut cart = Cart::new();
    cart.add(product);
    cart.add(product);

    let link = CheckoutLink::build(&cart, &StoreConfig::default()).expect("non-empty cart");
    assert!(link.message().as_str().contains("Collector Edition x2 - LYD 79228162514264337593543950335"));
}
