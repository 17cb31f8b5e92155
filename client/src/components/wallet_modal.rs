//! Wallet balance and top-up dialog.

use leptos::prelude::*;

use crate::state::wallet::parse_amount;
#[cfg(feature = "hydrate")]
use crate::state::wallet::success_still_shown;
use crate::util::format::format_currency;

#[cfg(feature = "hydrate")]
const CLOSE_AFTER_SUCCESS: std::time::Duration = std::time::Duration::from_millis(1500);

/// Shows the current balance and adds funds. Closes itself 1.5 s after a
/// successful top-up; `on_balance` receives every balance it learns.
#[component]
pub fn WalletModal(user_id: i64, on_close: Callback<()>, on_balance: Callback<f64>) -> impl IntoView {
    let balance = RwSignal::new(None::<f64>);
    let amount = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_wallet_balance(user_id).await {
            Ok(value) => {
                let _ = balance.try_set(Some(value));
                on_balance.run(value);
            }
            Err(e) => {
                let _ = balance.try_set(Some(0.0));
                let _ = error.try_set(Some(e.user_message("Failed to fetch wallet balance")));
            }
        }
    });

    let on_backdrop = move |_| on_close.run(());
    let on_cancel = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() || success.get_untracked().is_some() {
            return;
        }
        let value = match parse_amount(&amount.get_untracked()) {
            Ok(value) => value,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::add_funds(user_id, value).await {
                Ok(new_balance) => {
                    log::info!("added {value:.2} to wallet of user {user_id}");
                    on_balance.run(new_balance);
                    let _ = balance.try_set(Some(new_balance));
                    let _ = amount.try_set(String::new());
                    let message = format!("Successfully added {} to your wallet!", format_currency(value));
                    let _ = success.try_set(Some(message));
                    let _ = busy.try_set(false);
                    gloo_timers::future::sleep(CLOSE_AFTER_SUCCESS).await;
                    if success_still_shown(success) {
                        on_close.run(());
                    }
                }
                Err(e) => {
                    let _ = error.try_set(Some(e.user_message("Failed to add funds")));
                    let _ = busy.try_set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (value, user_id, on_balance);
            busy.set(false);
        }
    };

    let balance_text = move || balance.get().map_or_else(|| "Loading...".to_owned(), format_currency);

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"Wallet"</h2>
                <p class="wallet__balance">"Balance: " <strong>{balance_text}</strong></p>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || success.get().is_some()>
                    <p class="dialog__success">{move || success.get().unwrap_or_default()}</p>
                </Show>
                <form class="dialog__form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Amount to add"
                        <input
                            class="dialog__input"
                            type="number"
                            min="0.01"
                            step="0.01"
                            placeholder="0.00"
                            prop:value=move || amount.get()
                            on:input=move |ev| amount.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=on_cancel>
                            "Close"
                        </button>
                        <button
                            class="btn btn--primary"
                            type="submit"
                            disabled=move || {
                                busy.get() || success.get().is_some() || amount.get().trim().is_empty()
                            }
                        >
                            {move || if busy.get() { "Adding..." } else { "Add Funds" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
