use leptos::prelude::*;

use super::*;

fn item(id: i64, price: f64, quantity: i64) -> CartItem {
    CartItem {
        cart_item_id: id,
        product_id: Some(id * 10),
        product_name: format!("item-{id}"),
        price,
        quantity,
        subtotal: price * quantity as f64,
        image_url: None,
    }
}

fn cart() -> Cart {
    let items = vec![item(1, 20.0, 2), item(2, 5.5, 1)];
    Cart { cart_id: Some(7), total_amount: cart_total(&items), items }
}

#[test]
fn total_sums_price_times_quantity() {
    assert_eq!(cart_total(&cart().items), 45.5);
    assert_eq!(cart_total(&[]), 0.0);
}

#[test]
fn item_count_sums_units() {
    assert_eq!(item_count(&cart().items), 3);
}

#[test]
fn next_quantity_rejects_below_one() {
    assert_eq!(next_quantity(2, 1), Some(3));
    assert_eq!(next_quantity(2, -1), Some(1));
    assert_eq!(next_quantity(1, -1), None);
    assert_eq!(next_quantity(i64::MAX, 1), None);
}

#[test]
fn apply_quantity_recomputes_subtotal_and_total() {
    let mut cart = cart();
    assert!(apply_quantity(&mut cart, 1, 3));
    assert_eq!(cart.items[0].quantity, 3);
    assert_eq!(cart.items[0].subtotal, 60.0);
    assert_eq!(cart.total_amount, 65.5);
}

#[test]
fn apply_quantity_ignores_unknown_row() {
    let mut cart = cart();
    assert!(!apply_quantity(&mut cart, 99, 3));
    assert_eq!(cart.total_amount, 45.5);
}

#[test]
fn remove_item_drops_row_and_updates_total() {
    let mut cart = cart();
    remove_item(&mut cart, 1);
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.total_amount, 5.5);
}

#[test]
fn patch_live_cart_returns_patched_cart_while_dialog_is_open() {
    let signal = RwSignal::new(cart());
    let patched = patch_live_cart(signal, 2, 3).unwrap();
    assert_eq!(patched.items[1].quantity, 3);
    assert_eq!(patched.total_amount, 56.5);
    assert_eq!(signal.get_untracked(), patched);
}

#[test]
fn patch_live_cart_is_none_after_dialog_is_disposed() {
    let signal = RwSignal::new(cart());
    signal.dispose();
    assert_eq!(patch_live_cart(signal, 2, 3), None);
}
