//! Create/edit product dialog with optional image upload.
//!
//! DESIGN
//! ======
//! The dialog owns a `ProductDraft` of raw input strings and validates it on
//! submit. The picked image stays in the file input and is read back only when
//! the form is sent; the preview uses a blob URL that is revoked on close.

use leptos::prelude::*;

use crate::net::types::{Category, Product};
use crate::state::product_form::ProductDraft;
use crate::state::toast::ToastState;

#[cfg(feature = "hydrate")]
use crate::state::product_form::{NOT_AN_IMAGE, is_image_mime};

/// `editing` is `None` for a new product.
#[component]
pub fn ProductFormDialog(editing: Option<Product>, on_close: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();
    let product_id = editing.as_ref().map(|p| p.product_id);
    let draft = RwSignal::new(editing.as_ref().map(ProductDraft::from_product).unwrap_or_default());
    let categories = RwSignal::new(Vec::<Category>::new());
    let preview = RwSignal::new(editing.as_ref().and_then(|p| p.image_url.clone()));
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_categories().await {
                Ok(list) => {
                    let _ = categories.try_set(list);
                }
                Err(e) => {
                    let _ = error.try_set(Some(e.user_message("Failed to load categories.")));
                }
            }
        });
        on_cleanup(move || {
            if let Some(url) = preview.get_untracked() {
                revoke_blob_url(&url);
            }
        });
    }

    let on_backdrop = move |_| on_close.run(());
    let on_cancel = move |_| on_close.run(());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let on_file_change = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let Some(file) = picked_file(file_input) else {
                return;
            };
            if !is_image_mime(&file.type_()) {
                error.set(Some(NOT_AN_IMAGE.to_owned()));
                if let Some(input) = file_input.get_untracked() {
                    input.set_value("");
                }
                return;
            }
            error.set(None);
            if let Ok(url) = web_sys::Url::create_object_url_with_blob(&file) {
                if let Some(old) = preview.get_untracked() {
                    revoke_blob_url(&old);
                }
                preview.set(Some(url));
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let submission = match draft.get_untracked().validate() {
            Ok(submission) => submission,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let image = picked_file(file_input);
            leptos::task::spawn_local(async move {
                let result = match product_id {
                    Some(id) => crate::net::api::update_product(id, &submission, image).await,
                    None => crate::net::api::create_product(&submission, image).await,
                };
                busy.set(false);
                match result {
                    Ok(()) => {
                        let msg = if product_id.is_some() { "Product updated successfully" } else { "Product created successfully" };
                        toast.update(|t| t.show_success(msg));
                        on_saved.run(());
                    }
                    Err(e) => error.set(Some(e.user_message("Failed to save product. Please try again."))),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (submission, toast, on_saved);
            busy.set(false);
        }
    };

    let title = if product_id.is_some() { "Edit Product" } else { "Add New Product" };
    let submit_label = if product_id.is_some() { "Update" } else { "Create" };

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--product"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
                tabindex="0"
            >
                <h2>{title}</h2>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="dialog__form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Product Name"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            prop:value=move || draft.get().name
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input"
                            rows="3"
                            prop:value=move || draft.get().description
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <div class="dialog__row">
                        <label class="dialog__label">
                            "Price"
                            <input
                                class="dialog__input"
                                type="number"
                                min="0"
                                step="0.01"
                                required
                                prop:value=move || draft.get().price
                                on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Quantity"
                            <input
                                class="dialog__input"
                                type="number"
                                min="0"
                                step="1"
                                required
                                prop:value=move || draft.get().quantity
                                on:input=move |ev| draft.update(|d| d.quantity = event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <label class="dialog__label">
                        "Category"
                        <select
                            class="dialog__input"
                            required
                            on:change=move |ev| draft.update(|d| d.category_id = event_target_value(&ev))
                        >
                            <option value="" selected=move || draft.get().category_id.is_empty()>
                                "Select a category"
                            </option>
                            <For
                                each=move || categories.get()
                                key=|c| c.category_id
                                children=move |c: Category| {
                                    let value = c.category_id.to_string();
                                    let selected_value = value.clone();
                                    view! {
                                        <option
                                            value=value
                                            selected=move || draft.get().category_id == selected_value
                                        >
                                            {c.name}
                                        </option>
                                    }
                                }
                            />
                        </select>
                    </label>
                    <label class="dialog__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.get().is_available
                            on:change=move |ev| draft.update(|d| d.is_available = event_target_checked(&ev))
                        />
                        "Available for sale"
                    </label>
                    <label class="dialog__label">
                        "Image"
                        <input
                            class="dialog__input"
                            type="file"
                            accept="image/*"
                            node_ref=file_input
                            on:change=on_file_change
                        />
                    </label>
                    <Show when=move || preview.get().is_some()>
                        <img class="dialog__preview" src=move || preview.get().unwrap_or_default() alt="Preview"/>
                    </Show>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Saving..." } else { submit_label }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(feature = "hydrate")]
fn picked_file(input: NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    input.get_untracked()?.files()?.get(0)
}

#[cfg(feature = "hydrate")]
fn revoke_blob_url(url: &str) {
    if url.starts_with("blob:") {
        let _ = web_sys::Url::revoke_object_url(url);
    }
}
