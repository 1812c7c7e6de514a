//! Optional companion JSON endpoint carrying the same brand/model/description
//! fields as the embedded product record, plus a `quickspecs` object.
//!
//! Observed shape:
//!
//! ```json
//! {"item": {"brand": "GE", "sku": "JVM3160RFSS",
//!           "child_label": "30 Inch Over-the-Range Microwave",
//!           "quickspecs": {"Width": "29 7/8 in", "Capacity": "1.6 cu. ft."}}}
//! ```

use serde::Deserialize;
use serde_json::Value;
use skulookup_core::attributes::attribute_key;
use skulookup_core::AttributeMap;

use crate::error::LookupError;

#[derive(Debug, Deserialize)]
struct ProductApiResponse {
    #[serde(default)]
    item: Option<ProductApiItem>,
}

#[derive(Debug, Deserialize)]
struct ProductApiItem {
    #[serde(default)]
    brand: Option<String>,
    #[serde(default)]
    sku: Option<String>,
    #[serde(default)]
    child_label: Option<String>,
    #[serde(default)]
    quickspecs: serde_json::Map<String, Value>,
}

/// Fields recovered from the product API. `None` fields were absent or blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductApiRecord {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub description: Option<String>,
    pub quickspecs: AttributeMap,
}

impl ProductApiRecord {
    /// `true` when the record names at least a brand, model, or description.
    #[must_use]
    pub fn has_identity(&self) -> bool {
        self.brand.is_some() || self.model.is_some() || self.description.is_some()
    }
}

/// Parses the endpoint body. `Ok(None)` means the payload had no `item`.
///
/// # Errors
///
/// Returns [`LookupError::Deserialize`] when the body is not the expected JSON.
pub fn parse_product_api(body: &str) -> Result<Option<ProductApiRecord>, LookupError> {
    let response: ProductApiResponse =
        serde_json::from_str(body).map_err(|source| LookupError::Deserialize {
            context: "product API response".to_owned(),
            source,
        })?;

    Ok(response.item.map(|item| ProductApiRecord {
        brand: non_blank(item.brand),
        model: non_blank(item.sku),
        description: non_blank(item.child_label),
        quickspecs: quickspecs_to_attributes(&item.quickspecs),
    }))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_owned())
        .filter(|s| !s.is_empty())
}

fn quickspecs_to_attributes(specs: &serde_json::Map<String, Value>) -> AttributeMap {
    let mut out = AttributeMap::new();
    for (label, value) in specs {
        let key = attribute_key(label);
        if key.is_empty() {
            continue;
        }
        match value {
            Value::String(s) if !s.trim().is_empty() => out.insert(key, s.trim()),
            Value::Number(n) => out.insert(key, n.to_string()),
            Value::Bool(b) => out.insert(key, if *b { "yes" } else { "no" }),
            Value::Array(items) => {
                let list: Vec<String> = items
                    .iter()
                    .filter_map(|v| match v {
                        Value::String(s) => Some(s.trim().to_owned()),
                        Value::Number(n) => Some(n.to_string()),
                        _ => None,
                    })
                    .filter(|s| !s.is_empty())
                    .collect();
                if !list.is_empty() {
                    out.insert(key, list);
                }
            }
            _ => {}
        }
    }
    out
}
