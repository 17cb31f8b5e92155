//! Collapsible navigation rail on the dashboard.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::format::format_currency;

/// Left rail with cart badge, wallet balance, and the dialog launchers.
#[component]
pub fn Sidebar(
    cart_count: Signal<i64>,
    wallet_balance: Signal<Option<f64>>,
    on_cart: Callback<()>,
    on_wallet: Callback<()>,
    on_transactions: Callback<()>,
    on_profile: Callback<()>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let expanded = RwSignal::new(false);

    let rail_class = move || {
        if expanded.get() {
            "sidebar sidebar--expanded"
        } else {
            "sidebar"
        }
    };
    let balance_text = move || format_currency(wallet_balance.get().unwrap_or(0.0));

    view! {
        <nav class=rail_class>
            <button
                class="sidebar__toggle"
                title=move || if expanded.get() { "Collapse" } else { "Expand" }
                on:click=move |_| expanded.update(|e| *e = !*e)
            >
                "☰"
            </button>
            <div class="sidebar__user">
                <span class="sidebar__avatar">
                    {move || auth.get().display_name().chars().next().unwrap_or('?').to_string()}
                </span>
                <Show when=move || expanded.get()>
                    <span class="sidebar__user-name">{move || auth.get().display_name()}</span>
                </Show>
            </div>
            <div class="sidebar__divider"></div>

            <button class="sidebar__item" title="Cart" on:click=move |_| on_cart.run(())>
                <span class="sidebar__icon">
                    "🛒"
                    <Show when=move || { cart_count.get() > 0 }>
                        <span class="sidebar__badge">{move || cart_count.get()}</span>
                    </Show>
                </span>
                <Show when=move || expanded.get()>
                    <span class="sidebar__label">"Cart"</span>
                </Show>
            </button>
            <button class="sidebar__item" title="Wallet" on:click=move |_| on_wallet.run(())>
                <span class="sidebar__icon">"👛"</span>
                <Show when=move || expanded.get()>
                    <span class="sidebar__label">
                        "Wallet"
                        <small class="sidebar__caption">{balance_text}</small>
                    </span>
                </Show>
            </button>
            <button class="sidebar__item" title="Transactions" on:click=move |_| on_transactions.run(())>
                <span class="sidebar__icon">"🧾"</span>
                <Show when=move || expanded.get()>
                    <span class="sidebar__label">"Transactions"</span>
                </Show>
            </button>
            <button class="sidebar__item" title="Profile" on:click=move |_| on_profile.run(())>
                <span class="sidebar__icon">"👤"</span>
                <Show when=move || expanded.get()>
                    <span class="sidebar__label">"Profile"</span>
                </Show>
            </button>

            <div class="sidebar__spacer"></div>
            <button class="sidebar__item sidebar__item--danger" title="Logout" on:click=move |_| on_logout.run(())>
                <span class="sidebar__icon">"⎋"</span>
                <Show when=move || expanded.get()>
                    <span class="sidebar__label">"Logout"</span>
                </Show>
            </button>
        </nav>
    }
}
