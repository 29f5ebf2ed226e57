//! Shared host state.
//!
//! `AppState` is injected into the proxy handler via the `State` extractor.
//! It holds one pooled HTTP client and the backend base URL.

use crate::config::HostConfig;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    pub backend_url: String,
}

impl AppState {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().timeout(config.proxy_timeout).build()?;
        Ok(Self { http, backend_url: config.backend_url.clone() })
    }
}
