//! Label/value pairs scraped from the product page's spec sidebar.
//!
//! Three independent passes run in order and later passes override earlier
//! ones on key collision:
//!
//! 1. `<dl>` definition lists (`<dt>` label, `<dd>` value)
//! 2. `<span class="bold black">Label:</span> value` runs
//! 3. the schema.org `Offer` price table (`list_price` only)
//!
//! Missing sections are skipped. An empty map is a valid outcome.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use skulookup_core::attributes::attribute_key;
use skulookup_core::AttributeMap;

/// Key under which the list price is stored; rendered ahead of every other row.
pub const LIST_PRICE_KEY: &str = "list_price";

mod selectors {
    use super::{LazyLock, Selector};

    fn parse(css: &str) -> Selector {
        Selector::parse(css).expect("valid sidebar selector")
    }

    pub(super) static DL: LazyLock<Selector> = LazyLock::new(|| parse("dl"));
    pub(super) static DT: LazyLock<Selector> = LazyLock::new(|| parse("dt"));
    pub(super) static DD: LazyLock<Selector> = LazyLock::new(|| parse("dd"));
    pub(super) static BOLD_LABEL: LazyLock<Selector> =
        LazyLock::new(|| parse("span.bold.black"));
    pub(super) static OFFER_TABLE: LazyLock<Selector> =
        LazyLock::new(|| parse(r#"table[itemtype$="schema.org/Offer"]"#));
    pub(super) static ROW: LazyLock<Selector> = LazyLock::new(|| parse("tr"));
    pub(super) static CELL: LazyLock<Selector> = LazyLock::new(|| parse("td"));
    pub(super) static STRUCK_PRICE: LazyLock<Selector> = LazyLock::new(|| parse("del"));
    pub(super) static META_PRICE: LazyLock<Selector> =
        LazyLock::new(|| parse(r#"meta[itemprop="price"]"#));
}

/// Runs all three passes and merges them, later passes winning.
#[must_use]
pub fn extract_sidebar(document: &Html) -> AttributeMap {
    let mut attributes = definition_lists(document);
    attributes.override_with(bold_labels(document));
    attributes.override_with(offer_price(document));
    attributes.move_to_front(LIST_PRICE_KEY);
    attributes
}

fn definition_lists(document: &Html) -> AttributeMap {
    let mut out = AttributeMap::new();
    for dl in document.select(&selectors::DL) {
        for (dt, dd) in dl.select(&selectors::DT).zip(dl.select(&selectors::DD)) {
            let key = attribute_key(&stripped_text(dt));
            if key.is_empty() {
                continue;
            }
            out.insert(key, stripped_text(dd));
        }
    }
    out
}

fn bold_labels(document: &Html) -> AttributeMap {
    let mut out = AttributeMap::new();
    for span in document.select(&selectors::BOLD_LABEL) {
        let Some(parent) = span.parent().and_then(ElementRef::wrap) else {
            continue;
        };
        let label = spaced_text(span);
        let key = attribute_key(&label);
        if key.is_empty() {
            continue;
        }

        let full = spaced_text(parent);
        let value = match full.strip_prefix(label.as_str()) {
            Some(rest) => rest.trim().to_owned(),
            None => full.replacen(label.as_str(), "", 1).trim().to_owned(),
        };
        if !value.is_empty() {
            out.insert(key, value);
        }
    }
    out
}

fn offer_price(document: &Html) -> AttributeMap {
    let mut out = AttributeMap::new();
    let Some(table) = document.select(&selectors::OFFER_TABLE).next() else {
        return out;
    };

    for row in table.select(&selectors::ROW) {
        let cells: Vec<ElementRef<'_>> = row.select(&selectors::CELL).collect();
        let [label_cell, price_cell, ..] = cells.as_slice() else {
            continue;
        };
        if attribute_key(&stripped_text(*label_cell)) != LIST_PRICE_KEY {
            continue;
        }
        if let Some(price) = cell_price(*price_cell) {
            out.insert(LIST_PRICE_KEY, price);
        }
    }
    out
}

/// Struck-through price first, then the machine-readable `content`, then
/// whatever text the cell shows.
fn cell_price(cell: ElementRef<'_>) -> Option<String> {
    if let Some(struck) = cell.select(&selectors::STRUCK_PRICE).next() {
        return non_empty(stripped_text(struck));
    }
    if let Some(content) = cell
        .select(&selectors::META_PRICE)
        .next()
        .and_then(|meta| meta.value().attr("content"))
    {
        return non_empty(content.trim().to_owned());
    }
    non_empty(stripped_text(cell))
}

fn non_empty(s: String) -> Option<String> {
    (!s.is_empty()).then_some(s)
}

/// Text nodes trimmed and concatenated with no separator.
///
/// `29 <sup>7</sup>/<sub>8</sub> in` reads as `297/8in`. Stored values keep
/// this joined form so they stay stable across pages.
pub(crate) fn stripped_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}

/// Text nodes trimmed, blank ones dropped, joined by single spaces.
fn spaced_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    #[test]
    fn definition_list_pairs_become_keys() {
        let html = doc(
            "<dl><dt>Overall Width:</dt><dd> 29 7/8 in </dd>\
             <dt>Fuel Type</dt><dd>Electric</dd></dl>",
        );
        let attrs = extract_sidebar(&html);
        assert_eq!(attrs.get("overall_width").unwrap().to_string(), "29 7/8 in");
        assert_eq!(attrs.get("fuel_type").unwrap().to_string(), "Electric");
    }

    #[test]
    fn fraction_markup_in_value_is_joined_without_spaces() {
        let html = doc("<dl><dt>Width</dt><dd>29 <sup>7</sup>/<sub>8</sub> in</dd></dl>");
        let attrs = extract_sidebar(&html);
        assert_eq!(attrs.get("width").unwrap().to_string(), "297/8in");
    }

    #[test]
    fn bold_label_span_value_follows_label() {
        let html = doc(
            r#"<div><span class="bold black">Height:</span> 18 in</div>
               <div><span class="bold black">Depth:</span></div>"#,
        );
        let attrs = extract_sidebar(&html);
        assert_eq!(attrs.get("height").unwrap().to_string(), "18 in");
        assert!(!attrs.contains_key("depth"), "empty values are not stored");
    }

    #[test]
    fn bold_label_overrides_definition_list() {
        let html = doc(
            r#"<dl><dt>Height</dt><dd>17 in</dd></dl>
               <p><span class="bold black">Height:</span> 17 1/8 in</p>"#,
        );
        let attrs = extract_sidebar(&html);
        assert_eq!(attrs.get("height").unwrap().to_string(), "17 1/8 in");
    }

    #[test]
    fn list_price_prefers_struck_price_and_comes_first() {
        let html = doc(
            r#"<dl><dt>Width</dt><dd>30 in</dd></dl>
               <table itemscope itemtype="https://schema.org/Offer">
                 <tr><td>List Price:</td><td><del>$1,099.00</del><meta itemprop="price" content="999.00">$999.00</td></tr>
                 <tr><td>Our Price:</td><td>$999.00</td></tr>
               </table>"#,
        );
        let attrs = extract_sidebar(&html);
        assert_eq!(attrs.keys().next(), Some(LIST_PRICE_KEY));
        assert_eq!(attrs.get(LIST_PRICE_KEY).unwrap().to_string(), "$1,099.00");
        assert!(!attrs.contains_key("our_price"));
    }

    #[test]
    fn list_price_falls_back_to_meta_content() {
        let html = doc(
            r#"<table itemtype="https://schema.org/Offer">
                 <tr><td>list price</td><td><meta itemprop="price" content="449.00">Call</td></tr>
               </table>"#,
        );
        let attrs = extract_sidebar(&html);
        assert_eq!(attrs.get(LIST_PRICE_KEY).unwrap().to_string(), "449.00");
    }

    #[test]
    fn list_price_falls_back_to_cell_text() {
        let html = doc(
            r#"<table itemtype="https://schema.org/Offer">
                 <tr><td>List Price</td><td> $329.00 </td></tr>
               </table>"#,
        );
        let attrs = extract_sidebar(&html);
        assert_eq!(attrs.get(LIST_PRICE_KEY).unwrap().to_string(), "$329.00");
    }

    #[test]
    fn page_without_sidebar_yields_empty_map() {
        let html = doc("<p>Nothing to see</p>");
        assert!(extract_sidebar(&html).is_empty());
    }
}
