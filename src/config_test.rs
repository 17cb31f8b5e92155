use std::sync::{Mutex, MutexGuard, PoisonError};

use super::*;

static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock_env() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
}

/// # Safety
/// Callers hold `lock_env()` so no other test touches the environment.
unsafe fn clear_kiosk_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("KIOSK_API_URL");
        std::env::remove_var("KIOSK_API_ACCEPT_INVALID_CERTS");
        std::env::remove_var("KIOSK_API_TIMEOUT_SECS");
        std::env::remove_var("KIOSK_API_CONNECT_TIMEOUT_SECS");
    }
}

#[test]
fn from_env_uses_defaults() {
    let _env = lock_env();
    unsafe { clear_kiosk_env() };

    let cfg = KioskConfig::from_env().unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_url, DEFAULT_API_URL);
    assert!(!cfg.accept_invalid_certs);
    assert_eq!(
        cfg.timeouts,
        UpstreamTimeouts { request_secs: DEFAULT_API_TIMEOUT_SECS, connect_secs: DEFAULT_API_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn from_env_parses_overrides() {
    let _env = lock_env();
    unsafe {
        clear_kiosk_env();
        std::env::set_var("PORT", "8080");
        std::env::set_var("KIOSK_API_URL", "http://kiosk-api.internal:5000/");
        std::env::set_var("KIOSK_API_ACCEPT_INVALID_CERTS", "true");
        std::env::set_var("KIOSK_API_TIMEOUT_SECS", "45");
        std::env::set_var("KIOSK_API_CONNECT_TIMEOUT_SECS", "3");
    }

    let cfg = KioskConfig::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_url, "http://kiosk-api.internal:5000");
    assert!(cfg.accept_invalid_certs);
    assert_eq!(cfg.timeouts, UpstreamTimeouts { request_secs: 45, connect_secs: 3 });

    unsafe { clear_kiosk_env() };
}

#[test]
fn from_env_rejects_bad_port() {
    let _env = lock_env();
    unsafe {
        clear_kiosk_env();
        std::env::set_var("PORT", "eighty");
    }

    assert_eq!(KioskConfig::from_env(), Err(ConfigError::InvalidPort("eighty".into())));

    unsafe { clear_kiosk_env() };
}

#[test]
fn from_env_rejects_unknown_boolean() {
    let _env = lock_env();
    unsafe {
        clear_kiosk_env();
        std::env::set_var("KIOSK_API_ACCEPT_INVALID_CERTS", "maybe");
    }

    assert_eq!(
        KioskConfig::from_env(),
        Err(ConfigError::InvalidBool { var: "KIOSK_API_ACCEPT_INVALID_CERTS".into(), value: "maybe".into() })
    );

    unsafe { clear_kiosk_env() };
}

#[test]
fn from_env_ignores_unparseable_timeouts() {
    let _env = lock_env();
    unsafe {
        clear_kiosk_env();
        std::env::set_var("KIOSK_API_TIMEOUT_SECS", "soon");
    }

    let cfg = KioskConfig::from_env().unwrap();
    assert_eq!(cfg.timeouts.request_secs, DEFAULT_API_TIMEOUT_SECS);

    unsafe { clear_kiosk_env() };
}

#[test]
fn parse_api_url_requires_http_scheme() {
    assert_eq!(parse_api_url(Some("localhost:7273")), Err(ConfigError::InvalidApiUrl("localhost:7273".into())));
    assert_eq!(parse_api_url(Some("https://")), Err(ConfigError::InvalidApiUrl("https:".into())));
    assert_eq!(parse_api_url(Some(" https://api.example.test// ")).unwrap(), "https://api.example.test");
    assert_eq!(parse_api_url(None).unwrap(), DEFAULT_API_URL);
}

#[test]
fn parse_bool_accepts_common_spellings() {
    for raw in ["1", "true", "TRUE", "yes", "on"] {
        assert_eq!(parse_bool(raw), Some(true), "{raw}");
    }
    for raw in ["0", "false", "No", "off", ""] {
        assert_eq!(parse_bool(raw), Some(false), "{raw}");
    }
    assert_eq!(parse_bool("2"), None);
}
