use super::*;

fn token_with(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.signature")
}

#[test]
fn decodes_short_claim_names() {
    let token = token_with(&serde_json::json!({ "UserID": "7", "Role": "User", "RoleID": 1, "exp": 2_000_000_000 }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.user_id, Some(7));
    assert_eq!(claims.role.as_deref(), Some("User"));
    assert_eq!(claims.role_id, Some(1));
    assert_eq!(claims.exp, Some(2_000_000_000));
    assert!(!claims.is_superuser());
}

#[test]
fn decodes_aspnet_long_claim_names() {
    let token = token_with(&serde_json::json!({
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier": "12",
        "http://schemas.microsoft.com/ws/2008/06/identity/claims/role": ["Superuser", "User"]
    }));
    let claims = decode_claims(&token).unwrap();
    assert_eq!(claims.user_id, Some(12));
    assert_eq!(claims.role.as_deref(), Some("Superuser"));
    assert!(claims.is_superuser());
}

#[test]
fn superuser_flag_claim_is_honoured() {
    let token = token_with(&serde_json::json!({ "sub": 3, "isSuperuser": "true" }));
    assert!(decode_claims(&token).unwrap().is_superuser());

    let token = token_with(&serde_json::json!({ "sub": 3, "roleId": 2 }));
    assert!(decode_claims(&token).unwrap().is_superuser());
}

#[test]
fn tolerates_padded_payload() {
    let header = URL_SAFE_NO_PAD.encode(b"{}");
    let body = format!("{}==", URL_SAFE_NO_PAD.encode(br#"{"sub":"5"}"#));
    let claims = decode_claims(&format!("{header}.{body}.sig")).unwrap();
    assert_eq!(claims.user_id, Some(5));
}

#[test]
fn rejects_wrong_segment_count() {
    assert_eq!(decode_claims("only.two"), Err(ClaimsError::Malformed));
    assert_eq!(decode_claims("a.b.c.d"), Err(ClaimsError::Malformed));
    assert_eq!(decode_claims(""), Err(ClaimsError::Malformed));
}

#[test]
fn rejects_bad_encoding_and_non_object_payload() {
    assert!(matches!(decode_claims("a.!!!.c"), Err(ClaimsError::Encoding(_))));
    let array_payload = format!("h.{}.s", URL_SAFE_NO_PAD.encode(b"[1,2,3]"));
    assert_eq!(decode_claims(&array_payload), Err(ClaimsError::Payload));
}

#[test]
fn expiry_is_inclusive_and_optional() {
    let claims = TokenClaims { exp: Some(100), ..TokenClaims::default() };
    assert!(!claims.is_expired(99));
    assert!(claims.is_expired(100));
    assert!(!TokenClaims::default().is_expired(i64::MAX));
}
