//! Single-identifier lookup: fetch the product page, run the extraction
//! fallback chain, parse the description, and merge.
//!
//! ```text
//! Fetch → TryMetadata ─found─→ UseMetadata ───────────────┐
//!                     └─none─→ TryProductApi? → TryTitle ──┤
//!                                                         ↓
//!                         ApplyDescriptionParser → Merge → Return
//! ```
//!
//! There are no retries inside one lookup. A failed fetch ends the lookup
//! with [`LookupOutcome::TransportFailure`] and no partial result.

use scraper::Html;
use skulookup_core::{AppConfig, AttributeMap, ExtractionResult, Identifier, Source, NOT_AVAILABLE};

use crate::description::parse_description;
use crate::error::LookupError;
use crate::fetch::PageFetcher;
use crate::metadata::{extract_metadata, MetadataRecord};
use crate::product_api::{parse_product_api, ProductApiRecord};
use crate::sidebar::{extract_sidebar, LIST_PRICE_KEY};
use crate::title::{page_title, split_title};

/// Per-identifier outcome. Failures stop here; callers never see raw
/// transport or parse errors except inside [`LookupOutcome::TransportFailure`].
#[derive(Debug)]
pub enum LookupOutcome {
    Found(ExtractionResult),
    /// Every strategy ran and nothing usable came back.
    NothingFound,
    TransportFailure(LookupError),
}

impl LookupOutcome {
    #[must_use]
    pub fn result(&self) -> Option<&ExtractionResult> {
        match self {
            Self::Found(result) => Some(result),
            Self::NothingFound | Self::TransportFailure(_) => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::NothingFound => "nothing_found",
            Self::TransportFailure(_) => "transport_failure",
        }
    }
}

/// Everything read from one fetched page. Built synchronously so the parsed
/// DOM never outlives the call.
#[derive(Debug, Clone, Default)]
pub struct PageExtraction {
    pub metadata: Option<MetadataRecord>,
    pub title: Option<String>,
    pub sidebar: AttributeMap,
}

/// Runs the metadata, sidebar, and title readers over `html`.
#[must_use]
pub fn extract_page(html: &str) -> PageExtraction {
    let document = Html::parse_document(html);
    PageExtraction {
        metadata: extract_metadata(&document),
        title: page_title(&document),
        sidebar: extract_sidebar(&document),
    }
}

/// Brand/model/description chosen by the fallback chain.
struct Identity {
    brand: String,
    model: String,
    description: String,
    source: Source,
}

pub struct Lookup<F> {
    fetcher: F,
    config: AppConfig,
}

impl<F: PageFetcher> Lookup<F> {
    #[must_use]
    pub fn new(fetcher: F, config: &AppConfig) -> Self {
        Self {
            fetcher,
            config: config.clone(),
        }
    }

    /// Looks up one identifier.
    pub async fn lookup(&self, id: &Identifier) -> LookupOutcome {
        let url = self.config.page_url(id.as_str());
        let body = match self.fetcher.fetch(&url).await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(sku = %id, url = %url, error = %err, "product page fetch failed");
                return LookupOutcome::TransportFailure(err);
            }
        };

        let page = extract_page(&body);
        let mut sidebar = page.sidebar;

        let identity = if let Some(record) = page.metadata {
            from_metadata(record, id)
        } else if let Some(mut api) = self.try_product_api(id).await {
            sidebar.fill_missing(std::mem::take(&mut api.quickspecs));
            from_product_api(api, id)
        } else {
            from_title_or_sidebar(page.title.as_deref(), &sidebar, id)
        };

        let result = merge(identity, sidebar);
        if result.is_empty_for(id.as_str()) {
            tracing::info!(sku = %id, "no attributes extracted");
            return LookupOutcome::NothingFound;
        }

        tracing::info!(
            sku = %id,
            source = %result.source,
            attributes = result.attributes.len(),
            "lookup complete"
        );
        LookupOutcome::Found(result)
    }

    /// Consults the companion JSON endpoint when one is configured. Any
    /// failure falls through to the title strategy.
    async fn try_product_api(&self, id: &Identifier) -> Option<ProductApiRecord> {
        let url = self.config.api_url(id.as_str())?;

        let parsed = match self.fetcher.fetch(&url).await {
            Ok(body) => parse_product_api(&body),
            Err(err) => Err(err),
        };
        match parsed {
            Ok(Some(record)) if record.has_identity() => Some(record),
            Ok(_) => {
                tracing::debug!(sku = %id, "product API returned no usable item");
                None
            }
            Err(err) => {
                tracing::warn!(sku = %id, error = %err, "product API unavailable; using title fallback");
                None
            }
        }
    }
}

fn from_metadata(record: MetadataRecord, id: &Identifier) -> Identity {
    Identity {
        brand: record.brand,
        model: record.model.unwrap_or_else(|| id.to_string()),
        description: record.description,
        source: Source::MetadataRecord,
    }
}

fn from_product_api(record: ProductApiRecord, id: &Identifier) -> Identity {
    Identity {
        brand: record.brand.unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
        model: record.model.unwrap_or_else(|| id.to_string()),
        description: record
            .description
            .unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
        source: Source::ProductApi,
    }
}

/// Title split first; when the page has no usable title, sidebar `brand` /
/// `model` / `description` rows stand in.
fn from_title_or_sidebar(title: Option<&str>, sidebar: &AttributeMap, id: &Identifier) -> Identity {
    let title = title.map(str::trim).filter(|t| !t.is_empty());
    if let Some(title) = title {
        let parts = split_title(title, id.as_str());
        return Identity {
            brand: parts.brand,
            model: parts.model,
            description: parts.description,
            source: Source::TitleFallback,
        };
    }

    let sidebar_text = |key: &str| {
        sidebar
            .get(key)
            .map(ToString::to_string)
            .filter(|s| !s.is_empty())
    };
    let brand = sidebar_text("brand");
    let model = sidebar_text("model").or_else(|| sidebar_text("model_number"));
    let description = sidebar_text("description");

    let source = if brand.is_some() || model.is_some() || description.is_some() {
        Source::SidebarScrape
    } else {
        Source::TitleFallback
    };
    Identity {
        brand: brand.unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
        model: model.unwrap_or_else(|| id.to_string()),
        description: description.unwrap_or_else(|| NOT_AVAILABLE.to_owned()),
        source,
    }
}

/// Parses the resolved description and lays the parsed features over the
/// sidebar attributes; parsed values win on collision.
fn merge(identity: Identity, sidebar: AttributeMap) -> ExtractionResult {
    let mut attributes = sidebar;
    attributes.override_with(parse_description(&identity.description));
    attributes.move_to_front(LIST_PRICE_KEY);

    ExtractionResult {
        brand: identity.brand,
        model: identity.model,
        description: identity.description,
        attributes,
        source: identity.source,
    }
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod tests;
