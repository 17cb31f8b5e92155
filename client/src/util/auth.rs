//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected routes apply identical redirect behavior: no token goes to
//! `/login`, a broken or expired token is cleared first, and superuser-only
//! screens bounce ordinary users back to `/dashboard`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::claims::decode_claims;
use crate::state::auth::AuthState;

/// Outcome of checking the stored token against a route's requirements.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Allow,
    /// Send the user to `/login`; `clear` drops a stored token that is unusable.
    RedirectLogin { clear: bool },
    RedirectDashboard,
}

/// Decide whether a route may render for `token`.
#[must_use]
pub fn route_access(token: Option<&str>, require_superuser: bool, now_secs: i64) -> RouteAccess {
    let Some(token) = token.map(str::trim).filter(|t| !t.is_empty()) else {
        return RouteAccess::RedirectLogin { clear: false };
    };
    let Ok(claims) = decode_claims(token) else {
        return RouteAccess::RedirectLogin { clear: true };
    };
    if claims.is_expired(now_secs) {
        return RouteAccess::RedirectLogin { clear: true };
    }
    if require_superuser && !claims.is_superuser() {
        return RouteAccess::RedirectDashboard;
    }
    RouteAccess::Allow
}

/// Current wall-clock time in seconds; zero off the browser.
pub fn now_secs() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let secs = (js_sys::Date::now() / 1000.0) as i64;
        secs
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// Evaluate the stored session once auth has loaded and redirect if needed.
///
/// Returns a signal that turns `true` once the route may render.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, require_superuser: bool, navigate: F) -> RwSignal<bool>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let allowed = RwSignal::new(false);
    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        let token = state.session.as_ref().map(|s| s.token.clone());
        match route_access(token.as_deref(), require_superuser, now_secs()) {
            RouteAccess::Allow => allowed.set(true),
            RouteAccess::RedirectLogin { clear } => {
                allowed.set(false);
                if clear {
                    super::session::clear_session();
                    auth.update(|a| a.session = None);
                }
                navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
            RouteAccess::RedirectDashboard => {
                allowed.set(false);
                navigate("/dashboard", NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        }
    });
    allowed
}
