//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<AuthState>` context by `App`. Route guards and
//! role-aware components read it; login, register and logout write it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AuthUser;
use crate::util::session::Session;

/// Authentication state tracking the stored session and loading status.
///
/// `loading` stays `true` until the session has been read from browser
/// storage after hydration.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { session: None, loading: true }
    }
}

impl AuthState {
    #[must_use]
    pub fn signed_in(session: Session) -> Self {
        Self { session: Some(session), loading: false }
    }

    #[must_use]
    pub fn signed_out() -> Self {
        Self { session: None, loading: false }
    }

    #[must_use]
    pub fn user(&self) -> Option<&AuthUser> {
        self.session.as_ref().map(|s| &s.user)
    }

    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        self.user().map(|u| u.user_id)
    }

    /// UI gating only; the backend enforces the real permission.
    #[must_use]
    pub fn is_superuser(&self) -> bool {
        self.user().is_some_and(AuthUser::is_superuser)
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.user()
            .map(|u| u.name.trim())
            .filter(|n| !n.is_empty())
            .unwrap_or("Guest")
            .to_owned()
    }
}
