//! Cart arithmetic for the cart modal.
//!
//! The backend owns the authoritative cart; these helpers only keep the
//! visible table consistent between a quantity change and the next refetch.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use leptos::prelude::*;

use crate::net::types::{Cart, CartItem};

/// Sum of price × quantity over every row.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(|item| item.price * item.quantity as f64).sum()
}

/// Total number of units in the cart, shown as the sidebar badge.
#[must_use]
pub fn item_count(items: &[CartItem]) -> i64 {
    items.iter().map(|item| item.quantity.max(0)).sum()
}

/// Quantity after applying `delta`, or `None` when it would drop below one.
#[must_use]
pub fn next_quantity(current: i64, delta: i64) -> Option<i64> {
    current.checked_add(delta).filter(|q| *q >= 1)
}

/// Patch one row after the backend accepted a new quantity.
///
/// Returns `false` when the row is not in the cart.
#[allow(clippy::cast_precision_loss)]
pub fn apply_quantity(cart: &mut Cart, cart_item_id: i64, quantity: i64) -> bool {
    let Some(item) = cart.items.iter_mut().find(|i| i.cart_item_id == cart_item_id) else {
        return false;
    };
    item.quantity = quantity;
    item.subtotal = item.price * quantity as f64;
    cart.total_amount = cart_total(&cart.items);
    true
}

/// Patch a row held in the dialog's signal and return the updated cart.
///
/// `None` once the dialog that owns `cart` has been disposed, e.g. when it
/// was closed while the update request was in flight.
pub fn patch_live_cart(cart: RwSignal<Cart>, cart_item_id: i64, quantity: i64) -> Option<Cart> {
    cart.try_update(|c| {
        apply_quantity(c, cart_item_id, quantity);
        c.clone()
    })
}

/// Drop one row locally after the backend removed it.
pub fn remove_item(cart: &mut Cart, cart_item_id: i64) {
    cart.items.retain(|i| i.cart_item_id != cart_item_id);
    cart.total_amount = cart_total(&cart.items);
}
