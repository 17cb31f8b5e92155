//! Shopping cart dialog: quantities, removal and checkout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard opens this with the signed-in user's id. Every fetched cart
//! is reported through `on_change` so the sidebar badge stays current, and a
//! successful checkout calls `on_checkout` so the wallet balance is refreshed.

use leptos::prelude::*;

use crate::net::types::{Cart, CartItem};
use crate::state::cart::{cart_total, next_quantity};
use crate::util::format::format_currency;

#[component]
pub fn CartModal(
    user_id: i64,
    on_close: Callback<()>,
    on_change: Callback<Cart>,
    on_checkout: Callback<()>,
) -> impl IntoView {
    let cart = RwSignal::new(Cart::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        load_cart(user_id, cart, loading, error, on_change).await;
    });
    #[cfg(not(feature = "hydrate"))]
    loading.set(false);

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let change_quantity = Callback::new(move |(item_id, current, delta): (i64, i64, i64)| {
        let Some(quantity) = next_quantity(current, delta) else {
            return;
        };
        error.set(None);
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_cart_item(item_id, quantity).await {
                Ok(()) => {
                    if let Some(patched) = crate::state::cart::patch_live_cart(cart, item_id, quantity) {
                        on_change.run(patched);
                    }
                }
                Err(e) => {
                    let _ = error.try_set(Some(e.user_message("Failed to update quantity.")));
                }
            }
            let _ = loading.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (item_id, quantity);
            loading.set(false);
        }
    });

    let remove_item = Callback::new(move |item_id: i64| {
        error.set(None);
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::remove_cart_item(item_id).await {
                Ok(()) => load_cart(user_id, cart, loading, error, on_change).await,
                Err(e) => {
                    let _ = error.try_set(Some(e.user_message("Failed to remove item.")));
                    let _ = loading.try_set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = item_id;
            loading.set(false);
        }
    });

    let on_checkout_click = move |_| {
        if loading.get_untracked() {
            return;
        }
        error.set(None);
        success.set(None);
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::checkout_cart(user_id).await {
                Ok(()) => {
                    log::info!("checkout complete for user {user_id}");
                    let _ = success.try_set(Some("Checkout successful!".to_owned()));
                    on_checkout.run(());
                    load_cart(user_id, cart, loading, error, on_change).await;
                }
                Err(e) => {
                    let _ = error.try_set(Some(e.user_message("Checkout failed.")));
                    let _ = loading.try_set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user_id, on_change, on_checkout);
            loading.set(false);
        }
    };

    let total = move || format_currency(cart_total(&cart.get().items));
    let is_empty = move || cart.get().items.is_empty();

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--wide"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"Your Shopping Cart"</h2>
                <Show when=move || loading.get()>
                    <div class="spinner" aria-label="Loading"></div>
                </Show>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || success.get().is_some()>
                    <p class="dialog__success">{move || success.get().unwrap_or_default()}</p>
                </Show>

                <Show
                    when=move || !is_empty()
                    fallback=move || {
                        view! {
                            <Show when=move || !loading.get()>
                                <p class="dialog__empty">"Your cart is empty"</p>
                            </Show>
                        }
                    }
                >
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Product"</th>
                                <th class="table__num">"Price"</th>
                                <th class="table__num">"Quantity"</th>
                                <th class="table__num">"Subtotal"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || cart.get().items
                                key=|item| (item.cart_item_id, item.quantity)
                                children=move |item: CartItem| {
                                    view! {
                                        <CartRow
                                            item=item
                                            busy=loading
                                            on_quantity=change_quantity
                                            on_remove=remove_item
                                        />
                                    }
                                }
                            />
                        </tbody>
                    </table>
                    <p class="cart__total">"Total: " <strong>{total}</strong></p>
                </Show>

                <div class="dialog__actions">
                    <button class="btn" on:click=on_close_click>
                        "Close"
                    </button>
                    <button
                        class="btn btn--primary"
                        on:click=on_checkout_click
                        disabled=move || loading.get() || is_empty()
                    >
                        "Checkout"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn CartRow(
    item: CartItem,
    #[prop(into)] busy: Signal<bool>,
    on_quantity: Callback<(i64, i64, i64)>,
    on_remove: Callback<i64>,
) -> impl IntoView {
    let id = item.cart_item_id;
    let quantity = item.quantity;
    #[allow(clippy::cast_precision_loss)]
    let subtotal = item.price * quantity as f64;
    let image = item.image_url.clone().filter(|url| !url.trim().is_empty());

    view! {
        <tr>
            <td class="cart__product">
                {image.map(|src| view! { <img class="cart__thumb" src=src alt=""/> })}
                <span>{item.product_name.clone()}</span>
            </td>
            <td class="table__num">{format_currency(item.price)}</td>
            <td class="table__num">
                <div class="stepper">
                    <button
                        class="btn btn--icon"
                        title="Decrease"
                        disabled=move || busy.get() || quantity <= 1
                        on:click=move |_| on_quantity.run((id, quantity, -1))
                    >
                        "−"
                    </button>
                    <span class="stepper__value">{quantity}</span>
                    <button
                        class="btn btn--icon"
                        title="Increase"
                        disabled=move || busy.get()
                        on:click=move |_| on_quantity.run((id, quantity, 1))
                    >
                        "+"
                    </button>
                </div>
            </td>
            <td class="table__num">{format_currency(subtotal)}</td>
            <td>
                <button
                    class="btn btn--icon btn--danger"
                    title="Remove"
                    disabled=move || busy.get()
                    on:click=move |_| on_remove.run(id)
                >
                    "✕"
                </button>
            </td>
        </tr>
    }
}

#[cfg(feature = "hydrate")]
async fn load_cart(
    user_id: i64,
    cart: RwSignal<Cart>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    on_change: Callback<Cart>,
) {
    match crate::net::api::fetch_cart(user_id).await {
        Ok(fetched) => {
            on_change.run(fetched.clone());
            let _ = cart.try_set(fetched);
        }
        // A user without a cart yet gets a 404.
        Err(e) => {
            log::warn!("cart load failed for user {user_id}: {e}");
            let _ = cart.try_set(Cart::default());
            if !matches!(e, crate::net::error::ApiError::Status { status: 404, .. }) {
                let _ = error.try_set(Some(e.user_message("Failed to load cart.")));
            }
        }
    }
    let _ = loading.try_set(false);
}
