//! In-memory [`PageFetcher`] for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use skulookup_core::AppConfig;

use crate::error::LookupError;
use crate::fetch::PageFetcher;

pub(crate) const PAGE_TEMPLATE: &str = "https://shop.test/{sku}.html";
pub(crate) const API_TEMPLATE: &str = "https://shop.test/api/{sku}.json";

pub(crate) enum StubResponse {
    Body(String),
    Status(u16),
}

#[derive(Default)]
pub(crate) struct StubFetcher {
    responses: HashMap<String, StubResponse>,
    calls: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub(crate) fn body_at(mut self, url: &str, body: &str) -> Self {
        self.responses
            .insert(url.to_owned(), StubResponse::Body(body.to_owned()));
        self
    }

    pub(crate) fn page(self, sku: &str, html: &str) -> Self {
        self.body_at(&PAGE_TEMPLATE.replace("{sku}", sku), html)
    }

    pub(crate) fn api(self, sku: &str, json: &str) -> Self {
        self.body_at(&API_TEMPLATE.replace("{sku}", sku), json)
    }

    pub(crate) fn status(mut self, sku: &str, status: u16) -> Self {
        self.responses.insert(
            PAGE_TEMPLATE.replace("{sku}", sku),
            StubResponse::Status(status),
        );
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PageFetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<String, LookupError> {
        self.calls.lock().unwrap().push(url.to_owned());
        match self.responses.get(url) {
            Some(StubResponse::Body(body)) => Ok(body.clone()),
            Some(StubResponse::Status(status)) => Err(LookupError::UnexpectedStatus {
                status: *status,
                url: url.to_owned(),
            }),
            None => Err(LookupError::Unreachable {
                url: url.to_owned(),
                reason: "connection refused".to_owned(),
            }),
        }
    }
}

pub(crate) fn config(with_api: bool) -> AppConfig {
    AppConfig {
        page_url_template: PAGE_TEMPLATE.to_owned(),
        api_url_template: with_api.then(|| API_TEMPLATE.to_owned()),
        min_delay_ms: 0,
        max_delay_ms: 0,
        ..AppConfig::default()
    }
}
