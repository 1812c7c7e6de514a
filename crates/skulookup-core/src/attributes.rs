//! Ordered attribute mapping produced by the extraction passes.
//!
//! Keys are open-ended (lowercase, words joined by `_`). Insertion order is
//! preserved, and overwriting an existing key keeps the key's original
//! position so rendering order stays stable across merges.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single attribute value. Multi-valued features (blower ratings, lighting
/// mentions, ...) are kept as lists in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Single(String),
    List(Vec<String>),
}

impl AttributeValue {
    /// Returns the single string, or `None` for list values.
    #[must_use]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            Self::List(_) => None,
        }
    }

    /// Returns the list items, or `None` for single values.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::List(items) => Some(items),
        }
    }
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(s) => f.write_str(s),
            Self::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_owned())
    }
}

impl From<Vec<String>> for AttributeValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Single(s) => serializer.serialize_str(s),
            Self::List(items) => items.serialize(serializer),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: Vec<(String, AttributeValue)>,
}

impl AttributeMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Sets `key` to `value`, replacing any previous value in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttributeValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Appends `item` to the list stored under `key`, creating the list on
    /// first use. A single value already stored under `key` is promoted to
    /// the head of the list.
    pub fn push(&mut self, key: impl Into<String>, item: impl Into<String>) {
        let key = key.into();
        let item = item.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, AttributeValue::List(items))) => items.push(item),
            Some((_, existing)) => {
                let previous = std::mem::replace(existing, AttributeValue::List(Vec::new()));
                if let (AttributeValue::Single(first), AttributeValue::List(items)) =
                    (previous, existing)
                {
                    items.push(first);
                    items.push(item);
                }
            }
            None => self.entries.push((key, AttributeValue::List(vec![item]))),
        }
    }

    /// Moves `key` (if present) to the first position.
    pub fn move_to_front(&mut self, key: &str) {
        if let Some(pos) = self.entries.iter().position(|(k, _)| k == key) {
            let entry = self.entries.remove(pos);
            self.entries.insert(0, entry);
        }
    }

    /// Merges `other` into `self`; `other` wins on key collision.
    pub fn override_with(&mut self, other: AttributeMap) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    /// Merges `other` into `self`, keeping `self`'s value on key collision.
    pub fn fill_missing(&mut self, other: AttributeMap) {
        for (key, value) in other.entries {
            if !self.contains_key(&key) {
                self.entries.push((key, value));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Normalizes a human label (`"Overall Width:"`) into an attribute key
/// (`"overall_width"`).
#[must_use]
pub fn attribute_key(label: &str) -> String {
    label
        .trim()
        .trim_end_matches(':')
        .trim()
        .to_lowercase()
        .replace(' ', "_")
}

/// Renders an attribute key as a display label: `"list_price"` → `"List price"`.
#[must_use]
pub fn display_label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrite_keeps_position() {
        let mut map = AttributeMap::new();
        map.insert("width", "30 in");
        map.insert("height", "18 in");
        map.insert("width", "29.9 in");

        let keys: Vec<&str> = map.keys().collect();
        assert_eq!(keys, ["width", "height"]);
        assert_eq!(map.get("width"), Some(&AttributeValue::from("29.9 in")));
    }

    #[test]
    fn push_builds_list_in_order() {
        let mut map = AttributeMap::new();
        map.push("blower", "400 cfm");
        map.push("blower", "300 cfm");
        assert_eq!(
            map.get("blower").and_then(AttributeValue::as_list),
            Some(&["400 cfm".to_owned(), "300 cfm".to_owned()][..])
        );
    }

    #[test]
    fn push_promotes_existing_single_value() {
        let mut map = AttributeMap::new();
        map.insert("features", "wifi");
        map.push("features", "auto cook");
        assert_eq!(map.get("features").unwrap().to_string(), "wifi, auto cook");
    }

    #[test]
    fn override_with_prefers_other() {
        let mut base = AttributeMap::new();
        base.insert("install_time", "see manual");
        base.insert("width", "30 in");

        let mut parsed = AttributeMap::new();
        parsed.push("install_time", "15-minute install");

        base.override_with(parsed);
        assert_eq!(
            base.get("install_time"),
            Some(&AttributeValue::List(vec!["15-minute install".to_owned()]))
        );
        assert_eq!(base.keys().next(), Some("install_time"));
    }

    #[test]
    fn fill_missing_keeps_existing() {
        let mut base = AttributeMap::new();
        base.insert("width", "30 in");

        let mut extra = AttributeMap::new();
        extra.insert("width", "31 in");
        extra.insert("depth", "20 in");

        base.fill_missing(extra);
        assert_eq!(base.get("width").unwrap().to_string(), "30 in");
        assert_eq!(base.get("depth").unwrap().to_string(), "20 in");
    }

    #[test]
    fn move_to_front_reorders() {
        let mut map = AttributeMap::new();
        map.insert("width", "30 in");
        map.insert("list_price", "$499.00");
        map.move_to_front("list_price");
        assert_eq!(map.keys().collect::<Vec<_>>(), ["list_price", "width"]);
    }

    #[test]
    fn serializes_in_insertion_order() {
        let mut map = AttributeMap::new();
        map.insert("size", "30 inch");
        map.push("blower", "400 cfm");
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"size":"30 inch","blower":["400 cfm"]}"#);
    }

    #[test]
    fn attribute_key_strips_colon_and_joins_words() {
        assert_eq!(attribute_key(" Overall Width: "), "overall_width");
    }

    #[test]
    fn display_label_capitalizes_first_word() {
        assert_eq!(display_label("list_price"), "List price");
        assert_eq!(display_label(""), "");
    }
}
