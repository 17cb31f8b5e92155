//! Logout route: clears the stored session and returns to `/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::session::clear_session;

#[component]
pub fn LogoutPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Runs after hydration only, so storage is reachable.
    Effect::new(move || {
        clear_session();
        auth.set(AuthState::signed_out());
        #[cfg(feature = "hydrate")]
        log::info!("signed out");
        navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    view! { <div class="page-loading">"Signing out..."</div> }
}
