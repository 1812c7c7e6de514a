//! Per-identifier extraction result.

use serde::Serialize;

use crate::attributes::{display_label, AttributeMap};

/// Placeholder used for brand/description when no strategy yields a value,
/// so rendering never deals with empty or missing fields.
pub const NOT_AVAILABLE: &str = "n/a";

/// Which strategy supplied brand, model, and description.
///
/// Supplemental attributes always come from the sidebar scrape and the
/// description parser regardless of this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    MetadataRecord,
    ProductApi,
    SidebarScrape,
    TitleFallback,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::MetadataRecord => write!(f, "metadata_record"),
            Source::ProductApi => write!(f, "product_api"),
            Source::SidebarScrape => write!(f, "sidebar_scrape"),
            Source::TitleFallback => write!(f, "title_fallback"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    pub brand: String,
    pub model: String,
    pub description: String,
    pub attributes: AttributeMap,
    pub source: Source,
}

impl ExtractionResult {
    /// Ordered `(label, value)` rows for the attribute table.
    #[must_use]
    pub fn rows(&self) -> Vec<(String, String)> {
        self.attributes
            .iter()
            .map(|(key, value)| (display_label(key), value.to_string()))
            .collect()
    }

    /// `true` when nothing beyond the defaults was extracted.
    #[must_use]
    pub fn is_empty_for(&self, requested_model: &str) -> bool {
        self.brand == NOT_AVAILABLE
            && self.description == NOT_AVAILABLE
            && self.model == requested_model
            && self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with(attributes: AttributeMap) -> ExtractionResult {
        ExtractionResult {
            brand: NOT_AVAILABLE.to_owned(),
            model: "ABC1234".to_owned(),
            description: NOT_AVAILABLE.to_owned(),
            attributes,
            source: Source::TitleFallback,
        }
    }

    #[test]
    fn rows_follow_attribute_order() {
        let mut attributes = AttributeMap::new();
        attributes.insert("list_price", "$899.00");
        attributes.push("blower", "400 cfm");
        attributes.push("blower", "300 cfm");

        let rows = result_with(attributes).rows();
        assert_eq!(
            rows,
            vec![
                ("List price".to_owned(), "$899.00".to_owned()),
                ("Blower".to_owned(), "400 cfm, 300 cfm".to_owned()),
            ]
        );
    }

    #[test]
    fn is_empty_for_requires_all_defaults() {
        assert!(result_with(AttributeMap::new()).is_empty_for("ABC1234"));

        let mut attributes = AttributeMap::new();
        attributes.insert("width", "30 in");
        assert!(!result_with(attributes).is_empty_for("ABC1234"));
    }

    #[test]
    fn source_serializes_snake_case() {
        let json = serde_json::to_string(&Source::MetadataRecord).unwrap();
        assert_eq!(json, "\"metadata_record\"");
    }
}
