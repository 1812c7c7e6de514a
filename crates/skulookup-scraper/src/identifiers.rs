//! Recognizes catalog identifiers embedded in pasted text or spreadsheet cells.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use skulookup_core::Identifier;

static CANDIDATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b[a-z]{2,}[0-9]{2,}[a-z0-9]*\b").expect("valid identifier regex")
});

/// Extracts distinct identifiers from a block of text, in order of first
/// appearance. Matching is case-insensitive; duplicates are compared after
/// uppercasing.
#[must_use]
pub fn identifiers_from_text(text: &str) -> Vec<Identifier> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    collect_into(text, &mut seen, &mut out);
    out
}

/// Extracts distinct identifiers from a grid of cells scanned row by row.
#[must_use]
pub fn identifiers_from_grid<R, C>(rows: &[R]) -> Vec<Identifier>
where
    R: AsRef<[C]>,
    C: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for row in rows {
        for cell in row.as_ref() {
            collect_into(cell.as_ref(), &mut seen, &mut out);
        }
    }
    out
}

fn collect_into(text: &str, seen: &mut HashSet<Identifier>, out: &mut Vec<Identifier>) {
    for candidate in CANDIDATE_RE.find_iter(text) {
        let Ok(id) = Identifier::parse(candidate.as_str()) else {
            continue;
        };
        if seen.insert(id.clone()) {
            out.push(id);
        }
    }
}
