//! Discogs API client for seller inventories and release versions
//!
//! Blocking reqwest client; every request goes through the [`RequestPacer`]
//! and carries the configured User-Agent and optional token.

mod inventory;
mod models;
mod release;

pub use inventory::InventoryPages;
pub use models::{Listing, ReleaseRecord, VariantFormat};

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, USER_AGENT};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::FinderConfig;
use crate::error::{FinderError, Result};
use crate::rate_limit::{Clock, RequestPacer, SystemClock};

/// Discogs REST API client
#[derive(Debug)]
pub struct DiscogsClient {
    client: Client,
    base_url: String,
    per_page: u32,
    pacer: RequestPacer,
}

impl DiscogsClient {
    /// Creates a client that paces requests on the wall clock.
    pub fn new(config: &FinderConfig) -> Result<Self> {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Creates a client that paces requests on the given clock.
    pub fn with_clock(config: &FinderConfig, clock: Box<dyn Clock>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent)
                .map_err(|e| FinderError::Config(format!("invalid User-Agent: {e}")))?,
        );
        if let Some(auth) = config.authorization_header() {
            let mut value = HeaderValue::from_str(&auth)
                .map_err(|e| FinderError::Config(format!("invalid API token: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
            log::info!("Using authenticated API requests");
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_root().to_string(),
            per_page: config.effective_per_page(),
            pacer: RequestPacer::with_clock(config.request_interval, clock),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Paced GET of `{base_url}{path}`, decoded into `T`
    pub(crate) fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(String, String)],
    ) -> Result<T> {
        self.pacer.wait();

        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {} {:?}", url, params);

        let response = self.client.get(&url).query(params).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FinderError::HttpStatus { status, url });
        }

        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
