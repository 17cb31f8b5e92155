//! Transaction history dialog with period filtering.

use leptos::prelude::*;

use crate::net::types::Transaction;
use crate::state::transactions::{TransactionFilter, TransactionPeriod, filter_transactions, parse_date_input};
use crate::util::format::{format_currency, format_timestamp, local_offset, now_local};

#[component]
pub fn TransactionModal(user_id: i64, on_close: Callback<()>) -> impl IntoView {
    let transactions = RwSignal::new(Vec::<Transaction>::new());
    let filter = RwSignal::new(TransactionFilter::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_user_transactions(user_id).await {
            Ok(list) => {
                let _ = transactions.try_set(list);
            }
            Err(e) => {
                let _ = error.try_set(Some(e.user_message("Failed to load transactions.")));
            }
        }
        let _ = loading.try_set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        loading.set(false);
    }

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let visible = Memo::new(move |_| filter_transactions(&transactions.get(), &filter.get(), now_local()));
    let is_custom = move || filter.get().period == TransactionPeriod::Custom;
    let date_value = |date: Option<time::Date>| date.map(|d| d.to_string()).unwrap_or_default();
    let empty_text = move || {
        if filter.get().period == TransactionPeriod::All {
            "No transactions found."
        } else {
            "No transactions found for the selected period."
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--wide dialog--scroll"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>"Transaction History"</h2>
                <div class="filters">
                    <label class="dialog__label">
                        "Filter by period"
                        <select
                            class="dialog__input"
                            on:change=move |ev| {
                                let period = TransactionPeriod::parse(&event_target_value(&ev));
                                filter.update(|f| f.set_period(period));
                            }
                        >
                            {TransactionPeriod::ALL
                                .into_iter()
                                .map(|p| {
                                    view! {
                                        <option value=p.as_str() selected=move || filter.get().period == p>
                                            {p.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </label>
                    <Show when=is_custom>
                        <label class="dialog__label">
                            "Start Date"
                            <input
                                class="dialog__input"
                                type="date"
                                prop:value=move || date_value(filter.get().start_date)
                                on:change=move |ev| {
                                    let date = parse_date_input(&event_target_value(&ev));
                                    filter.update(|f| f.start_date = date);
                                }
                            />
                        </label>
                        <label class="dialog__label">
                            "End Date"
                            <input
                                class="dialog__input"
                                type="date"
                                prop:min=move || date_value(filter.get().start_date)
                                prop:value=move || date_value(filter.get().end_date)
                                on:change=move |ev| {
                                    let date = parse_date_input(&event_target_value(&ev));
                                    filter.update(|f| f.end_date = date);
                                }
                            />
                        </label>
                    </Show>
                </div>

                {move || {
                    if loading.get() {
                        view! { <div class="spinner" aria-label="Loading"></div> }.into_any()
                    } else if let Some(message) = error.get() {
                        view! { <p class="dialog__error">{message}</p> }.into_any()
                    } else if visible.get().is_empty() {
                        view! { <p class="dialog__info">{empty_text}</p> }.into_any()
                    } else {
                        view! {
                            <div class="receipts">
                                <For
                                    each=move || visible.get()
                                    key=|tx| tx.transaction_id
                                    children=|tx: Transaction| view! { <Receipt tx=tx/> }
                                />
                            </div>
                        }
                            .into_any()
                    }
                }}

                <div class="dialog__actions">
                    <button class="btn" on:click=on_close_click>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Receipt(tx: Transaction) -> impl IntoView {
    let when = format_timestamp(&tx.transaction_date, local_offset());
    let label = tx
        .description
        .clone()
        .or_else(|| tx.transaction_type.clone())
        .filter(|l| !l.trim().is_empty())
        .unwrap_or_else(|| "Transaction".to_owned());

    view! {
        <section class="receipt">
            <header class="receipt__header">
                <h3>"Receipt #" {tx.transaction_id}</h3>
                <span class="chip">{label}</span>
            </header>
            <p class="receipt__date">{when}</p>
            {(!tx.items.is_empty())
                .then(|| {
                    view! {
                        <table class="table table--compact">
                            <tbody>
                                {tx
                                    .items
                                    .iter()
                                    .map(|item| {
                                        view! {
                                            <tr>
                                                <td>{item.product_name.clone()}</td>
                                                <td class="table__num">"× " {item.quantity}</td>
                                                <td class="table__num">{format_currency(item.price)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                })}
            <footer class="receipt__footer">
                <strong>"Total: " {format_currency(tx.amount)}</strong>
                {tx
                    .resulting_balance
                    .map(|b| view! { <span class="receipt__balance">"New Balance: " {format_currency(b)}</span> })}
            </footer>
        </section>
    }
}
