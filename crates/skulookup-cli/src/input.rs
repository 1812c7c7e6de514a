//! Batch input sources: pasted text, text files, and delimited spreadsheets.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use skulookup_core::Identifier;
use skulookup_scraper::{identifiers_from_grid, identifiers_from_text};

use crate::InputArgs;

pub(crate) fn read_identifiers(source: &InputArgs) -> anyhow::Result<Vec<Identifier>> {
    if let Some(text) = &source.text {
        return Ok(identifiers_from_text(text));
    }

    if let Some(path) = &source.file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let identifiers = match delimiter_for(path) {
            Some(delimiter) => identifiers_from_grid(
                &read_cells(&content, delimiter)
                    .with_context(|| format!("failed to parse {}", path.display()))?,
            ),
            None => identifiers_from_text(&content),
        };
        tracing::info!(
            file = %path.display(),
            count = identifiers.len(),
            "recognized model numbers in file"
        );
        return Ok(identifiers);
    }

    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("failed to read standard input")?;
    Ok(identifiers_from_text(&content))
}

/// Cell delimiter for spreadsheet exports; `None` means scan as plain text.
fn delimiter_for(path: &Path) -> Option<u8> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "csv" => Some(b','),
        "tsv" | "tab" => Some(b'\t'),
        _ => None,
    }
}

/// Parses delimited content into rows of cells. Rows may differ in length.
fn read_cells(content: &str, delimiter: u8) -> Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(delimiter)
        .from_reader(content.as_bytes());

    reader
        .records()
        .map(|record| record.map(|r| r.iter().map(str::to_owned).collect::<Vec<_>>()))
        .collect()
}
