//! Route wrapper that renders its children only for an authorised session.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_route_guard;

/// Gate `children` behind the stored token. With `require_superuser`, ordinary
/// users are sent back to `/dashboard`.
#[component]
pub fn ProtectedRoute(#[prop(optional)] require_superuser: bool, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let allowed = install_route_guard(auth, require_superuser, use_navigate());

    view! {
        <Show
            when=move || allowed.get()
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            {children()}
        </Show>
    }
}
