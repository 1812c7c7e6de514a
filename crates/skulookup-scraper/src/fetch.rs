//! Page transport: the [`PageFetcher`] seam and its `reqwest` implementation.
//!
//! Lookups only ever see `Result<String, LookupError>`, so tests can swap in
//! a canned fetcher with no network and no delay.

use std::future::Future;
use std::time::Duration;

use rand::seq::IndexedRandom;
use reqwest::Client;
use skulookup_core::app_config::DEFAULT_USER_AGENTS;
use skulookup_core::AppConfig;

use crate::error::LookupError;

/// Fetches a URL and returns the response body for a 2xx status.
pub trait PageFetcher {
    /// # Errors
    ///
    /// Returns a [`LookupError`] when the request cannot complete, times
    /// out, or the server answers with a non-success status.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, LookupError>> + Send;
}

/// HTTP fetcher that sends browser-like headers and rotates the
/// `User-Agent` on every request.
pub struct HttpFetcher {
    client: Client,
    user_agents: Vec<String>,
    referer: String,
}

impl HttpFetcher {
    /// Builds a fetcher with the configured timeout, referer, and UA pool.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::ClientBuild`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(config: &AppConfig) -> Result<Self, LookupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.request_timeout_secs.min(10)))
            .build()
            .map_err(LookupError::ClientBuild)?;
        Ok(Self {
            client,
            user_agents: config.user_agents.clone(),
            referer: config.referer.clone(),
        })
    }

    fn pick_user_agent(&self) -> &str {
        self.user_agents
            .choose(&mut rand::rng())
            .map_or(DEFAULT_USER_AGENTS[0], String::as_str)
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, LookupError> {
        let user_agent = self.pick_user_agent().to_owned();

        let response = self
            .client
            .get(url)
            .header(reqwest::header::USER_AGENT, user_agent)
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            .header(reqwest::header::REFERER, &self.referer)
            .send()
            .await
            .map_err(|e| LookupError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| LookupError::from_reqwest(url, e))
    }
}
