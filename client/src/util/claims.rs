//! Read-only decoding of the bearer token's JWT payload.
//!
//! The signature is not checked here. The backend validates every request;
//! these claims only drive which screens the UI offers.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Map, Value};

use crate::net::types::{SUPERUSER_ROLE, SUPERUSER_ROLE_ID};

const USER_ID_CLAIMS: &[&str] = &[
    "UserID",
    "userID",
    "userId",
    "nameid",
    "sub",
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier",
];
const ROLE_CLAIMS: &[&str] = &["Role", "role", "http://schemas.microsoft.com/ws/2008/06/identity/claims/role"];
const ROLE_ID_CLAIMS: &[&str] = &["RoleID", "roleID", "roleId"];
const SUPERUSER_CLAIMS: &[&str] = &["isSuperuser", "IsSuperuser"];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClaimsError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Encoding(String),
    #[error("token payload is not a JSON object")]
    Payload,
}

/// Claims the UI cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenClaims {
    pub user_id: Option<i64>,
    pub role: Option<String>,
    pub role_id: Option<i64>,
    /// Expiry in seconds since the Unix epoch.
    pub exp: Option<i64>,
    pub superuser_flag: Option<bool>,
}

impl TokenClaims {
    /// A token without `exp` never expires client-side.
    #[must_use]
    pub fn is_expired(&self, now_secs: i64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_secs)
    }

    #[must_use]
    pub fn is_superuser(&self) -> bool {
        self.superuser_flag == Some(true)
            || self.role.as_deref().is_some_and(|r| r.eq_ignore_ascii_case(SUPERUSER_ROLE))
            || self.role_id == Some(SUPERUSER_ROLE_ID)
    }
}

/// Decode the payload segment of `token`.
///
/// # Errors
///
/// Returns an error if the token does not have three segments or the payload
/// is not base64url-encoded JSON.
pub fn decode_claims(token: &str) -> Result<TokenClaims, ClaimsError> {
    let mut parts = token.trim().split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(ClaimsError::Malformed);
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| ClaimsError::Encoding(e.to_string()))?;
    let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(&bytes) else {
        return Err(ClaimsError::Payload);
    };

    Ok(TokenClaims {
        user_id: first_claim(&map, USER_ID_CLAIMS).and_then(as_i64),
        role: first_claim(&map, ROLE_CLAIMS).and_then(as_role),
        role_id: first_claim(&map, ROLE_ID_CLAIMS).and_then(as_i64),
        exp: map.get("exp").and_then(as_i64),
        superuser_flag: first_claim(&map, SUPERUSER_CLAIMS).and_then(as_bool),
    })
}

fn first_claim<'a>(map: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names.iter().find_map(|name| map.get(*name))
}

#[allow(clippy::cast_possible_truncation)]
fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// ASP.NET emits an array when a user holds several roles; the first wins.
fn as_role(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(|v| v.as_str().map(str::to_owned)),
        _ => None,
    }
}
