//! Browser `localStorage` persistence for the signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token written here is attached to every REST call and decoded by the
//! route guard. Older builds stored it under `authToken`; reads fall back to
//! that key and logout clears every key any build wrote.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use crate::net::types::{AuthResponse, AuthUser};

pub const TOKEN_KEY: &str = "jwtToken";
pub const LEGACY_TOKEN_KEY: &str = "authToken";
pub const USER_INFO_KEY: &str = "userInfo";

/// Every key written by current or earlier builds.
pub const ALL_KEYS: &[&str] = &[TOKEN_KEY, LEGACY_TOKEN_KEY, USER_INFO_KEY, "userId", "roleId", "userRole", "userName"];

/// A persisted login: bearer token plus the user it was issued to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: AuthUser,
}

impl Session {
    /// Build a session from a login/register response. Both a non-empty token
    /// and a user object are required.
    #[must_use]
    pub fn from_response(resp: &AuthResponse) -> Option<Self> {
        let token = resp.token.as_deref().map(str::trim).filter(|t| !t.is_empty())?;
        let user = resp.user.clone()?;
        Some(Self { token: token.to_owned(), user })
    }

    /// Rebuild a session from raw storage values.
    #[must_use]
    pub fn from_stored(token: Option<String>, user_info: Option<String>) -> Option<Self> {
        let token = token.filter(|t| !t.trim().is_empty())?;
        let user = serde_json::from_str::<AuthUser>(&user_info?).ok()?;
        Some(Self { token, user })
    }
}

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the bearer token, preferring the canonical key.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = storage()?;
        [TOKEN_KEY, LEGACY_TOKEN_KEY]
            .iter()
            .find_map(|key| storage.get_item(key).ok().flatten())
            .filter(|t| !t.trim().is_empty())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Load the full session, if one is stored and parseable.
pub fn load_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let storage = storage()?;
        let user_info = storage.get_item(USER_INFO_KEY).ok().flatten();
        Session::from_stored(load_token(), user_info)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist `session`, replacing any previous one.
pub fn save_session(session: &Session) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = storage() else {
            return;
        };
        let Ok(user_info) = serde_json::to_string(&session.user) else {
            return;
        };
        let _ = storage.remove_item(LEGACY_TOKEN_KEY);
        let _ = storage.set_item(TOKEN_KEY, &session.token);
        let _ = storage.set_item(USER_INFO_KEY, &user_info);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}

/// Remove every session key.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            for key in ALL_KEYS {
                let _ = storage.remove_item(key);
            }
        }
    }
}
