//! Product tile in the dashboard grid.

use leptos::prelude::*;

use crate::net::types::Product;
use crate::util::format::format_currency;

/// Card for one product. Shoppers can add available products to the cart;
/// superusers also get edit, delete and an availability toggle.
#[component]
pub fn ProductCard(
    product: Product,
    category: Option<String>,
    is_superuser: bool,
    on_add_to_cart: Callback<Product>,
    on_edit: Callback<Product>,
    on_delete: Callback<Product>,
    on_toggle_availability: Callback<Product>,
) -> impl IntoView {
    let available = product.is_available;
    let image = product.image_url.clone().filter(|url| !url.trim().is_empty());
    let name = product.name.clone();
    let card_class = if available { "product-card" } else { "product-card product-card--unavailable" };
    let chip_class = if available { "chip chip--ok" } else { "chip chip--muted" };

    let add_product = product.clone();
    let edit_product = product.clone();
    let delete_product = product.clone();
    let toggle_product = product.clone();

    view! {
        <article class=card_class>
            {image.map(|src| view! { <img class="product-card__image" src=src alt=name.clone()/> })}
            <div class="product-card__body">
                <h3 class="product-card__name">{product.name.clone()}</h3>
                <p class="product-card__description">{product.description.clone()}</p>
                <p class="product-card__price">{format_currency(product.price)}</p>
                <p class="product-card__meta">
                    <span>"Category: " {category.unwrap_or_else(|| "N/A".to_owned())}</span>
                    <span>"In stock: " {product.quantity}</span>
                </p>
                <span class=chip_class>
                    {if available { "Available" } else { "Unavailable" }}
                </span>
            </div>
            <div class="product-card__actions">
                {available.then(|| view! {
                    <button class="btn btn--primary" on:click=move |_| on_add_to_cart.run(add_product.clone())>
                        "Add to cart"
                    </button>
                })}
                {is_superuser.then(|| view! {
                    <button class="btn" title="Edit" on:click=move |_| on_edit.run(edit_product.clone())>
                        "Edit"
                    </button>
                    <button
                        class="btn"
                        title="Toggle availability"
                        on:click=move |_| on_toggle_availability.run(toggle_product.clone())
                    >
                        {if available { "Mark unavailable" } else { "Mark available" }}
                    </button>
                    <button class="btn btn--danger" title="Delete" on:click=move |_| on_delete.run(delete_product.clone())>
                        "Delete"
                    </button>
                })}
            </div>
        </article>
    }
}
