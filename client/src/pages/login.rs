//! Email + password login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::LoginRequest;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::AuthResponse;
#[cfg(any(test, feature = "hydrate"))]
use crate::util::session::Session;

pub const MISSING_FIELDS: &str = "Please fill in all fields";
pub const INVALID_RESPONSE: &str = "Invalid response from server";

/// Trim the inputs and require both. The password is sent as typed.
///
/// # Errors
///
/// Returns `MISSING_FIELDS` when either field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// A usable login response carries both a token and a user.
///
/// # Errors
///
/// Returns `INVALID_RESPONSE` when either is missing.
#[cfg(any(test, feature = "hydrate"))]
fn session_from_login(resp: &AuthResponse) -> Result<Session, &'static str> {
    Session::from_response(resp).ok_or(INVALID_RESPONSE)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::login(&request)
                    .await
                    .map_err(|e| e.user_message("Login failed"))
                    .and_then(|resp| session_from_login(&resp).map_err(str::to_owned));
                match outcome {
                    Ok(session) => {
                        auth.set(crate::state::auth::AuthState::signed_in(session));
                        navigate("/dashboard", leptos_router::NavigateOptions::default());
                    }
                    Err(msg) => {
                        error.set(Some(msg));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Kiosk"</h1>
                <p class="auth-card__subtitle">"Sign in to continue"</p>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a href="/register">"Register here"</a>
                </p>
            </div>
        </div>
    }
}
