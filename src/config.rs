//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "https://localhost:7273";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_API_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),

    /// `KIOSK_API_URL` must be an absolute http(s) URL.
    #[error("invalid KIOSK_API_URL: {0}")]
    InvalidApiUrl(String),

    #[error("invalid boolean for {var}: {value}")]
    InvalidBool { var: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KioskConfig {
    pub port: u16,
    /// Kiosk backend origin without a trailing slash.
    pub api_url: String,
    /// Trust self-signed backend certificates (local development only).
    pub accept_invalid_certs: bool,
    pub timeouts: UpstreamTimeouts,
}

impl KioskConfig {
    /// Build typed server config from environment variables.
    ///
    /// All variables are optional:
    /// - `PORT` (default 3000)
    /// - `KIOSK_API_URL` (default `https://localhost:7273`)
    /// - `KIOSK_API_ACCEPT_INVALID_CERTS` (default false)
    /// - `KIOSK_API_TIMEOUT_SECS` (default 30)
    /// - `KIOSK_API_CONNECT_TIMEOUT_SECS` (default 10)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };
        let api_url = parse_api_url(std::env::var("KIOSK_API_URL").ok().as_deref())?;
        let accept_invalid_certs = env_bool("KIOSK_API_ACCEPT_INVALID_CERTS", false)?;
        let timeouts = UpstreamTimeouts {
            request_secs: env_parse_u64("KIOSK_API_TIMEOUT_SECS", DEFAULT_API_TIMEOUT_SECS),
            connect_secs: env_parse_u64("KIOSK_API_CONNECT_TIMEOUT_SECS", DEFAULT_API_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { port, api_url, accept_invalid_certs, timeouts })
    }
}

fn parse_api_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw.map_or(DEFAULT_API_URL, str::trim).trim_end_matches('/');
    let host = url.strip_prefix("https://").or_else(|| url.strip_prefix("http://"));
    if host.is_none_or(str::is_empty) {
        return Err(ConfigError::InvalidApiUrl(url.to_owned()));
    }
    Ok(url.to_owned())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn env_bool(key: &str, default: bool) -> Result<bool, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => parse_bool(&raw).ok_or(ConfigError::InvalidBool { var: key.to_owned(), value: raw }),
        Err(_) => Ok(default),
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}
