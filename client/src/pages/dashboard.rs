//! Dashboard page: product catalogue, cart, wallet and account dialogs.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route, wrapped in `ProtectedRoute`. It
//! loads products and categories on mount, keeps the sidebar's cart badge and
//! wallet balance current, and hosts every dashboard dialog. Superusers also
//! get product create, edit, delete and availability controls.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::cart_modal::CartModal;
use crate::components::product_card::ProductCard;
use crate::components::product_form_dialog::ProductFormDialog;
use crate::components::profile_modal::ProfileModal;
use crate::components::sidebar::Sidebar;
use crate::components::transaction_modal::TransactionModal;
use crate::components::wallet_modal::WalletModal;
use crate::net::types::{AddToCartRequest, Cart, Category, Product};
use crate::state::auth::AuthState;
use crate::state::cart::item_count;
use crate::state::products::{ProductFilter, category_name, filter_products};
use crate::state::toast::ToastState;
use crate::util::browser::confirm;

/// Which dashboard dialog is open. Only one at a time.
#[derive(Clone, Debug, PartialEq)]
enum DashboardDialog {
    Cart,
    Wallet,
    Transactions,
    Profile,
    NewProduct,
    EditProduct(Product),
}

/// Cards add a single unit; quantities are adjusted in the cart.
#[must_use]
pub fn add_to_cart_request(user_id: i64, product: &Product) -> AddToCartRequest {
    AddToCartRequest { user_id, product_id: product.product_id, quantity: 1 }
}

/// Category dropdown entries: every category name once, in backend order.
#[must_use]
pub fn category_options(categories: &[Category]) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(categories.len());
    for c in categories {
        let name = c.name.trim();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_owned());
        }
    }
    names
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toast = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    let products = RwSignal::new(Vec::<Product>::new());
    let categories = RwSignal::new(Vec::<Category>::new());
    let filter = RwSignal::new(ProductFilter::default());
    let loading = RwSignal::new(true);
    let cart_count = RwSignal::new(0_i64);
    let wallet_balance = RwSignal::new(None::<f64>);
    let dialog = RwSignal::new(None::<DashboardDialog>);

    let user_id = move || auth.get_untracked().user_id();
    let is_superuser = move || auth.get().is_superuser();

    let reload_products = move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_products().await {
                Ok(list) => {
                    let _ = products.try_set(list);
                }
                Err(e) => {
                    log::warn!("product load failed: {e}");
                    toast.update(|t| t.show_error(e.user_message("Failed to load products.")));
                }
            }
            let _ = loading.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (products, toast);
            loading.set(false);
        }
    };

    let refresh_wallet = move || {
        let Some(id) = user_id() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_wallet_balance(id).await {
                Ok(balance) => {
                    let _ = wallet_balance.try_set(Some(balance));
                }
                Err(e) => log::warn!("wallet balance load failed for user {id}: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, wallet_balance);
        }
    };

    let refresh_cart_count = move || {
        let Some(id) = user_id() else {
            return;
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_cart(id).await {
                Ok(cart) => {
                    let _ = cart_count.try_set(item_count(&cart.items));
                }
                Err(e) => log::debug!("cart count unavailable for user {id}: {e}"),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, cart_count);
        }
    };

    reload_products();
    refresh_wallet();
    refresh_cart_count();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_categories().await {
            Ok(list) => {
                let _ = categories.try_set(list);
            }
            Err(e) => log::warn!("category load failed: {e}"),
        }
    });

    let close_dialog = Callback::new(move |()| dialog.set(None));
    let open = move |d: DashboardDialog| Callback::new(move |()| dialog.set(Some(d.clone())));

    let logout_requested = RwSignal::new(false);
    let on_logout = Callback::new(move |()| {
        dialog.set(None);
        logout_requested.set(true);
    });
    Effect::new(move || {
        if logout_requested.get() {
            navigate("/logout", NavigateOptions::default());
        }
    });

    let on_add_to_cart = Callback::new(move |product: Product| {
        let Some(id) = user_id() else {
            return;
        };
        let request = add_to_cart_request(id, &product);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::add_to_cart(&request).await {
                Ok(()) => {
                    toast.update(|t| t.show_success(format!("{} added to cart", product.name)));
                    refresh_cart_count();
                }
                Err(e) => toast.update(|t| t.show_error(e.user_message("Failed to add to cart."))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, product);
        }
    });

    let on_edit = Callback::new(move |product: Product| dialog.set(Some(DashboardDialog::EditProduct(product))));

    let on_delete = Callback::new(move |product: Product| {
        if !confirm(&format!("Delete \"{}\"? This cannot be undone.", product.name)) {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_product(product.product_id).await {
                Ok(()) => {
                    log::info!("deleted product {}", product.product_id);
                    toast.update(|t| t.show_success("Product deleted successfully"));
                    reload_products();
                }
                Err(e) => toast.update(|t| t.show_error(e.user_message("Failed to delete product."))),
            }
        });
    });

    let on_toggle_availability = Callback::new(move |product: Product| {
        let next = !product.is_available;
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::set_product_availability(product.product_id, next).await {
                Ok(()) => {
                    let msg = if next { "Product marked available" } else { "Product marked unavailable" };
                    toast.update(|t| t.show_success(msg));
                    reload_products();
                }
                Err(e) => toast.update(|t| t.show_error(e.user_message("Failed to update availability."))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (product, next);
        }
    });

    let on_product_saved = Callback::new(move |()| {
        dialog.set(None);
        reload_products();
    });
    let on_cart_change = Callback::new(move |cart: Cart| cart_count.set(item_count(&cart.items)));
    let on_checkout = Callback::new(move |()| refresh_wallet());
    let on_balance = Callback::new(move |balance: f64| wallet_balance.set(Some(balance)));

    let visible = move || filter_products(&products.get(), &categories.get(), &filter.get());

    view! {
        <div class="dashboard">
            <Sidebar
                cart_count=Signal::derive(move || cart_count.get())
                wallet_balance=Signal::derive(move || wallet_balance.get())
                on_cart=open(DashboardDialog::Cart)
                on_wallet=open(DashboardDialog::Wallet)
                on_transactions=open(DashboardDialog::Transactions)
                on_profile=open(DashboardDialog::Profile)
                on_logout=on_logout
            />
            <main class="dashboard__main">
                <header class="dashboard__header">
                    <div>
                        <h1>{move || format!("Welcome, {}!", auth.get().display_name())}</h1>
                        <p class="dashboard__subtitle">"Browse the products available in the kiosk."</p>
                    </div>
                    <Show when=is_superuser>
                        <button class="btn btn--primary" on:click=move |_| dialog.set(Some(DashboardDialog::NewProduct))>
                            "Add New Product"
                        </button>
                    </Show>
                </header>

                <div class="dashboard__filters">
                    <input
                        class="dashboard__search"
                        type="search"
                        placeholder="Search products"
                        prop:value=move || filter.get().query
                        on:input=move |ev| filter.update(|f| f.query = event_target_value(&ev))
                    />
                    <select
                        class="dashboard__category"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            filter.update(|f| f.category = (!value.is_empty()).then_some(value));
                        }
                    >
                        <option value="">"All Categories"</option>
                        <For
                            each=move || category_options(&categories.get())
                            key=|name| name.clone()
                            children=move |name: String| {
                                let selected_name = name.clone();
                                let option_value = name.clone();
                                view! {
                                    <option
                                        value=option_value
                                        selected=move || filter.get().category.as_deref() == Some(selected_name.as_str())
                                    >
                                        {name}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>

                {move || {
                    if loading.get() {
                        view! { <div class="spinner" aria-label="Loading"></div> }.into_any()
                    } else {
                        let list = visible();
                        if list.is_empty() {
                            view! { <p class="dashboard__empty">"No products found."</p> }.into_any()
                        } else {
                            let cats = categories.get();
                            let superuser = is_superuser();
                            view! {
                                <div class="product-grid">
                                    {list
                                        .into_iter()
                                        .map(|product| {
                                            let category = category_name(&product, &cats).map(str::to_owned);
                                            view! {
                                                <ProductCard
                                                    product=product
                                                    category=category
                                                    is_superuser=superuser
                                                    on_add_to_cart=on_add_to_cart
                                                    on_edit=on_edit
                                                    on_delete=on_delete
                                                    on_toggle_availability=on_toggle_availability
                                                />
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }
                    }
                }}
            </main>

            {move || {
                let uid = user_id()?;
                let rendered = match dialog.get()? {
                    DashboardDialog::Cart => {
                        view! {
                            <CartModal
                                user_id=uid
                                on_close=close_dialog
                                on_change=on_cart_change
                                on_checkout=on_checkout
                            />
                        }
                            .into_any()
                    }
                    DashboardDialog::Wallet => {
                        view! { <WalletModal user_id=uid on_close=close_dialog on_balance=on_balance/> }.into_any()
                    }
                    DashboardDialog::Transactions => {
                        view! { <TransactionModal user_id=uid on_close=close_dialog/> }.into_any()
                    }
                    DashboardDialog::Profile => {
                        view! { <ProfileModal on_close=close_dialog on_logout=on_logout/> }.into_any()
                    }
                    DashboardDialog::NewProduct => {
                        view! {
                            <ProductFormDialog editing=None on_close=close_dialog on_saved=on_product_saved/>
                        }
                            .into_any()
                    }
                    DashboardDialog::EditProduct(product) => {
                        view! {
                            <ProductFormDialog
                                editing=Some(product)
                                on_close=close_dialog
                                on_saved=on_product_saved
                            />
                        }
                            .into_any()
                    }
                };
                Some(rendered)
            }}
        </div>
    }
}
