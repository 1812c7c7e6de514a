//! Primary identity source: the schema.org `Product` record embedded as JSON-LD.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use serde_json::Value;
use skulookup_core::NOT_AVAILABLE;

static JSONLD_SCRIPT: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"script[type="application/ld+json"]"#).expect("valid json-ld selector")
});

/// Brand/model/description taken from the page's structured product record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataRecord {
    pub brand: String,
    /// `None` when the record carries neither `sku` nor `mpn`; the
    /// orchestrator substitutes the requested identifier.
    pub model: Option<String>,
    pub description: String,
}

/// Returns the first JSON-LD record whose `@type` is exactly `"Product"`.
///
/// Blocks that are not valid JSON are skipped. `None` means the page simply
/// carries no product record, which is common and not an error.
#[must_use]
pub fn extract_metadata(document: &Html) -> Option<MetadataRecord> {
    for script in document.select(&JSONLD_SCRIPT) {
        let raw: String = script.text().collect();
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        let value: Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(err) => {
                tracing::debug!(error = %err, "skipping malformed JSON-LD block");
                continue;
            }
        };

        if let Some(product) = candidates(&value).into_iter().find(|v| is_product(v)) {
            return Some(record_from_product(product));
        }
    }
    None
}

/// Flattens a JSON-LD payload into its records: a single object, a
/// top-level array, and any `@graph` containers, in document order.
fn candidates(value: &Value) -> Vec<&Value> {
    let top: Vec<&Value> = match value {
        Value::Array(items) => items.iter().collect(),
        other => vec![other],
    };

    let mut out = Vec::with_capacity(top.len());
    for item in top {
        out.push(item);
        if let Some(graph) = item.get("@graph").and_then(Value::as_array) {
            out.extend(graph.iter());
        }
    }
    out
}

fn is_product(value: &Value) -> bool {
    value.get("@type").and_then(Value::as_str) == Some("Product")
}

fn record_from_product(product: &Value) -> MetadataRecord {
    let brand = named(product.get("brand"))
        .or_else(|| named(product.get("manufacturer")))
        .unwrap_or_else(|| NOT_AVAILABLE.to_owned());

    let model = text_field(product.get("sku")).or_else(|| text_field(product.get("mpn")));

    let description =
        text_field(product.get("description")).unwrap_or_else(|| NOT_AVAILABLE.to_owned());

    MetadataRecord {
        brand,
        model,
        description,
    }
}

/// Reads `{"name": ...}` or a bare string.
fn named(node: Option<&Value>) -> Option<String> {
    let node = node?;
    text_field(node.get("name")).or_else(|| text_field(Some(node)))
}

/// Non-empty trimmed text from a string or number node.
fn text_field(node: Option<&Value>) -> Option<String> {
    let text = match node? {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!text.is_empty()).then_some(text)
}
