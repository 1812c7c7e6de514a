//! Rule-based decomposition of a free-text product description into
//! semantic feature buckets.
//!
//! Two passes run over the lowercased text:
//!
//! 1. **Whole-text scans** pick out capacity, nominal size, color, and
//!    appliance category independently of tokenization.
//! 2. **Fragment classification** splits the text on commas and the word
//!    `and`, then walks [`FRAGMENT_RULES`] for each fragment. The first rule
//!    that matches claims the fragment; unmatched fragments are dropped.
//!
//! Rule order is part of the output contract: the vocabulary is tuned to
//! one retailer's phrasing, and moving a rule changes which bucket a
//! fragment lands in.

use std::sync::LazyLock;

use regex::Regex;
use skulookup_core::AttributeMap;

static CAPACITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?\s*cu\.?\s*ft").expect("valid capacity regex"));
static SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s*inch").expect("valid size regex"));
static INSTALL_TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+-minute").expect("valid install time regex"));
static FRAGMENT_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",|\s+and\s+").expect("valid fragment split regex"));

/// Color/finish vocabulary, highest priority first.
pub const COLORS: &[&str] = &[
    "black",
    "white",
    "stainless steel",
    "gray",
    "silver",
    "white-on-white",
];

/// Appliance categories, highest priority first.
pub const APPLIANCES: &[&str] = &[
    "microwave",
    "range hood",
    "dishwasher",
    "refrigerator",
    "oven",
    "cooktop",
    "washer",
    "dryer",
];

/// How a matched fragment is recorded under its bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Replace the bucket's value; the last matching fragment wins.
    Set,
    /// Append to the bucket's list.
    Append,
    /// Set the bucket only when the named key is still absent.
    SetUnless(&'static str),
}

/// One entry of the first-match-wins decision list.
pub struct FragmentRule {
    pub bucket: &'static str,
    pub effect: Effect,
    /// Returns the normalized value to record when the fragment matches.
    pub matcher: fn(&str) -> Option<String>,
}

/// A fragment's classification: which bucket claimed it and what to record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub bucket: &'static str,
    pub effect: Effect,
    pub value: String,
}

pub static FRAGMENT_RULES: &[FragmentRule] = &[
    FragmentRule {
        bucket: "mount",
        effect: Effect::Set,
        matcher: mount,
    },
    FragmentRule {
        bucket: "blower",
        effect: Effect::Append,
        matcher: |t| contains(t, "cfm"),
    },
    FragmentRule {
        bucket: "speeds",
        effect: Effect::Append,
        matcher: |t| contains(t, "speed"),
    },
    FragmentRule {
        bucket: "lighting",
        effect: Effect::Append,
        matcher: lighting,
    },
    FragmentRule {
        bucket: "filters",
        effect: Effect::Append,
        matcher: filters,
    },
    FragmentRule {
        bucket: "install_time",
        effect: Effect::Append,
        matcher: |t| INSTALL_TIME_RE.is_match(t).then(|| t.to_owned()),
    },
    FragmentRule {
        bucket: "venting",
        effect: Effect::Set,
        matcher: |t| t.contains("convertible").then(|| "convertible".to_owned()),
    },
    FragmentRule {
        bucket: "features",
        effect: Effect::Append,
        matcher: features,
    },
    FragmentRule {
        bucket: "certifications",
        effect: Effect::Append,
        matcher: |t| (t.contains("ul listed") || t.contains("cul listed")).then(|| t.to_owned()),
    },
    FragmentRule {
        bucket: "finish",
        effect: Effect::SetUnless("color"),
        matcher: finish,
    },
];

fn contains(fragment: &str, needle: &str) -> Option<String> {
    fragment.contains(needle).then(|| fragment.to_owned())
}

fn mount(t: &str) -> Option<String> {
    if t.contains("under cabinet") {
        Some("under cabinet".to_owned())
    } else if t.contains("over-the-range") || t.contains("over the range") {
        Some("over the range".to_owned())
    } else {
        None
    }
}

fn lighting(t: &str) -> Option<String> {
    if t.contains("incandes") {
        Some("incandescent".to_owned())
    } else if t.contains("led light") {
        Some("led".to_owned())
    } else {
        contains(t, "light")
    }
}

fn filters(t: &str) -> Option<String> {
    if t.contains("dishwasher safe") {
        Some("dishwasher safe".to_owned())
    } else {
        contains(t, "filter")
    }
}

fn features(t: &str) -> Option<String> {
    if t.contains("quick start") {
        Some("quick start".to_owned())
    } else if t.contains("auto cook") {
        Some("auto cook".to_owned())
    } else {
        contains(t, "cook")
    }
}

fn finish(t: &str) -> Option<String> {
    if t.contains("stainless steel") {
        Some("stainless steel".to_owned())
    } else {
        contains(t, "finish")
    }
}

/// Classifies one already-lowercased, trimmed fragment.
#[must_use]
pub fn classify_fragment(fragment: &str) -> Option<Classification> {
    FRAGMENT_RULES.iter().find_map(|rule| {
        (rule.matcher)(fragment).map(|value| Classification {
            bucket: rule.bucket,
            effect: rule.effect,
            value,
        })
    })
}

/// Parses `description` into feature attributes. Deterministic: the same
/// input always yields the same map.
#[must_use]
pub fn parse_description(description: &str) -> AttributeMap {
    let text = description.to_lowercase();
    let attributes = whole_text_scan(&text);
    classify_fragments(&text, attributes)
}

fn whole_text_scan(text: &str) -> AttributeMap {
    let mut attributes = AttributeMap::new();

    if let Some(m) = CAPACITY_RE.find(text) {
        attributes.insert("capacity", m.as_str());
    }
    if let Some(m) = SIZE_RE.find(text) {
        attributes.insert("size", m.as_str());
    }
    if let Some(color) = COLORS.iter().find(|c| text.contains(**c)) {
        attributes.insert("color", *color);
    }
    if let Some(appliance) = APPLIANCES.iter().find(|a| text.contains(**a)) {
        attributes.insert("appliance", *appliance);
    }

    attributes
}

fn classify_fragments(text: &str, mut attributes: AttributeMap) -> AttributeMap {
    let fragments = FRAGMENT_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|f| !f.is_empty());

    for fragment in fragments {
        let Some(class) = classify_fragment(fragment) else {
            continue;
        };
        match class.effect {
            Effect::Set => attributes.insert(class.bucket, class.value),
            Effect::Append => attributes.push(class.bucket, class.value),
            Effect::SetUnless(guard) => {
                if !attributes.contains_key(guard) {
                    attributes.insert(class.bucket, class.value);
                }
            }
        }
    }

    attributes
}

#[cfg(test)]
#[path = "description_test.rs"]
mod tests;
