//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the pooled HTTP client used to reach the kiosk backend and the
//! parsed configuration. Nothing in it is mutable after startup.

use std::sync::Arc;
use std::time::Duration;

use crate::config::KioskConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub config: Arc<KioskConfig>,
}

impl AppState {
    /// Build the upstream client from `config`.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the TLS backend cannot be initialised.
    pub fn new(config: KioskConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;
        Ok(Self { http, config: Arc::new(config) })
    }
}
