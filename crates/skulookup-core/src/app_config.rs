pub const DEFAULT_PAGE_URL_TEMPLATE: &str =
    "https://www.ajmadison.com/cgi-bin/ajmadison/{sku}.html";
pub const DEFAULT_REFERER: &str = "https://www.ajmadison.com/";

/// Browser user-agents rotated between requests.
pub const DEFAULT_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
];

/// Placeholder substituted with the identifier in URL templates.
pub const SKU_PLACEHOLDER: &str = "{sku}";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub page_url_template: String,
    pub api_url_template: Option<String>,
    pub referer: String,
    pub request_timeout_secs: u64,
    pub user_agents: Vec<String>,
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl AppConfig {
    /// Product page URL for `sku`.
    #[must_use]
    pub fn page_url(&self, sku: &str) -> String {
        self.page_url_template.replace(SKU_PLACEHOLDER, sku)
    }

    /// Companion JSON endpoint URL for `sku`, when one is configured.
    #[must_use]
    pub fn api_url(&self, sku: &str) -> Option<String> {
        self.api_url_template
            .as_deref()
            .map(|template| template.replace(SKU_PLACEHOLDER, sku))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            page_url_template: DEFAULT_PAGE_URL_TEMPLATE.to_owned(),
            api_url_template: None,
            referer: DEFAULT_REFERER.to_owned(),
            request_timeout_secs: 10,
            user_agents: DEFAULT_USER_AGENTS.iter().map(|s| (*s).to_owned()).collect(),
            min_delay_ms: 1000,
            max_delay_ms: 3000,
        }
    }
}
