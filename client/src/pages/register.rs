//! Account registration page, also served at `/`.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::types::RegisterRequest;

pub const MISSING_FIELDS: &str = "Please fill in all fields";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";

/// Trim every field except the password and require all of them.
///
/// # Errors
///
/// Returns `MISSING_FIELDS` for any blank field and `INVALID_EMAIL` when the
/// email has no `@`.
pub fn validate_register_input(form: &RegisterRequest) -> Result<RegisterRequest, &'static str> {
    let cleaned = RegisterRequest {
        name: form.name.trim().to_owned(),
        surname: form.surname.trim().to_owned(),
        email: form.email.trim().to_owned(),
        contact_number: form.contact_number.trim().to_owned(),
        password: form.password.clone(),
    };
    if [&cleaned.name, &cleaned.surname, &cleaned.email, &cleaned.contact_number]
        .iter()
        .any(|v| v.is_empty())
        || cleaned.password.trim().is_empty()
    {
        return Err(MISSING_FIELDS);
    }
    if !cleaned.email.contains('@') {
        return Err(INVALID_EMAIL);
    }
    Ok(cleaned)
}

/// Where to go after a successful registration: straight in when the backend
/// returned a session, otherwise to the login form.
#[must_use]
pub fn after_register_path(signed_in: bool) -> &'static str {
    if signed_in { "/dashboard" } else { "/login" }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let form = RwSignal::new(RegisterRequest::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
    #[cfg(feature = "hydrate")]
    let toast = expect_context::<RwSignal<crate::state::toast::ToastState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let request = match validate_register_input(&form.get_untracked()) {
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
                match crate::net::api::register(&request).await {
                    Ok(resp) => {
                        let session = crate::util::session::Session::from_response(&resp);
                        let signed_in = session.is_some();
                        if let Some(session) = session {
                            auth.set(crate::state::auth::AuthState::signed_in(session));
                        } else {
                            toast.update(|t| t.show_success("Registration successful. Please log in."));
                        }
                        navigate(after_register_path(signed_in), leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        error.set(Some(e.user_message("Registration failed")));
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
                <p class="auth-card__subtitle">"Create your account"</p>
                <Show when=move || error.get().is_some()>
                    <p class="auth-message auth-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        placeholder="Name"
                        autocomplete="given-name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        placeholder="Surname"
                        autocomplete="family-name"
                        prop:value=move || form.get().surname
                        on:input=move |ev| form.update(|f| f.surname = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email"
                        autocomplete="email"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="tel"
                        placeholder="Contact Number"
                        autocomplete="tel"
                        prop:value=move || form.get().contact_number
                        on:input=move |ev| form.update(|f| f.contact_number = event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="new-password"
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a href="/login">"Login here"</a>
                </p>
            </div>
        </div>
    }
}
