//! Fallback brand/model/description split out of the page `<title>`.
//!
//! The retailer titles pages as `"<Brand> <Model> <Description> | Site"`.
//! Nothing guarantees that convention, so this is best-effort only and is
//! consulted only when no structured record exists.

use std::sync::LazyLock;

use scraper::{Html, Selector};
use skulookup_core::NOT_AVAILABLE;

use crate::sidebar::stripped_text;

static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("valid title selector"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleParts {
    pub brand: String,
    pub model: String,
    pub description: String,
}

/// Text of the first `<title>` element, if any.
#[must_use]
pub fn page_title(document: &Html) -> Option<String> {
    document.select(&TITLE).next().map(stripped_text)
}

/// Splits `title` into brand, model, and description. Missing parts fall
/// back to `identifier` (model) or the not-available marker.
#[must_use]
pub fn split_title(title: &str, identifier: &str) -> TitleParts {
    let main = title.split('|').next().unwrap_or_default().trim();
    let mut parts = main.splitn(3, ' ').map(str::trim);

    let mut next_part = || parts.next().filter(|p| !p.is_empty()).map(str::to_owned);
    let brand = next_part().unwrap_or_else(|| NOT_AVAILABLE.to_owned());
    let model = next_part().unwrap_or_else(|| identifier.to_owned());
    let description = next_part().unwrap_or_else(|| NOT_AVAILABLE.to_owned());

    TitleParts {
        brand,
        model,
        description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_brand_model_and_description() {
        let parts = split_title(
            "GE JVM3160RFSS 30 Inch Over-the-Range Microwave | AJ Madison",
            "JVM3160RFSS",
        );
        assert_eq!(parts.brand, "GE");
        assert_eq!(parts.model, "JVM3160RFSS");
        assert_eq!(parts.description, "30 Inch Over-the-Range Microwave");
    }

    #[test]
    fn short_title_degrades_to_defaults() {
        let parts = split_title("Whirlpool | AJ Madison", "WDT750SAHZ0");
        assert_eq!(parts.brand, "Whirlpool");
        assert_eq!(parts.model, "WDT750SAHZ0");
        assert_eq!(parts.description, NOT_AVAILABLE);
    }

    #[test]
    fn empty_title_is_all_defaults() {
        let parts = split_title("", "ABC1234");
        assert_eq!(parts.brand, NOT_AVAILABLE);
        assert_eq!(parts.model, "ABC1234");
        assert_eq!(parts.description, NOT_AVAILABLE);
    }

    #[test]
    fn page_title_reads_title_element() {
        let doc = Html::parse_document(
            "<html><head><title> Bosch SHX78CM5N Dishwasher | AJ Madison </title></head></html>",
        );
        assert_eq!(
            page_title(&doc).as_deref(),
            Some("Bosch SHX78CM5N Dishwasher | AJ Madison")
        );
    }
}
