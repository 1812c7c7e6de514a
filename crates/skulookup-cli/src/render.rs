//! Terminal output for lookup results.

use skulookup_core::{ExtractionResult, Identifier, NOT_AVAILABLE};
use skulookup_scraper::LookupOutcome;

pub(crate) fn print_outcome(identifier: &Identifier, outcome: &LookupOutcome) {
    match outcome {
        LookupOutcome::Found(result) => print!("{}", format_result(result)),
        LookupOutcome::NothingFound => println!("{identifier}: no product data found"),
        LookupOutcome::TransportFailure(err) => println!("{identifier}: lookup failed: {err}"),
    }
}

/// Header block followed by an aligned two-column attribute table.
pub(crate) fn format_result(result: &ExtractionResult) -> String {
    let mut out = String::new();
    out.push_str(&format!("Brand:       {}\n", result.brand));
    out.push_str(&format!("Model:       {}\n", result.model));
    if result.description != NOT_AVAILABLE {
        out.push_str(&format!("Description: {}\n", result.description));
    }
    out.push_str(&format!("Source:      {}\n", result.source));

    let rows = result.rows();
    if rows.is_empty() {
        out.push_str("(no attributes)\n");
        return out;
    }

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in &rows {
        out.push_str(&format!("  {label:<width$}  {value}\n"));
    }
    out
}

pub(crate) fn entry_json(identifier: &Identifier, outcome: &LookupOutcome) -> serde_json::Value {
    let mut value = serde_json::json!({
        "identifier": identifier,
        "status": outcome.status(),
    });
    match outcome {
        LookupOutcome::Found(result) => value["result"] = serde_json::json!(result),
        LookupOutcome::TransportFailure(err) => value["error"] = serde_json::json!(err.to_string()),
        LookupOutcome::NothingFound => {}
    }
    value
}

pub(crate) fn print_json(values: &[serde_json::Value]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(values)?);
    Ok(())
}

pub(crate) fn print_identifiers(identifiers: &[Identifier], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(identifiers)?);
    } else if identifiers.is_empty() {
        println!("no model numbers recognized");
    } else {
        for identifier in identifiers {
            println!("{identifier}");
        }
    }
    Ok(())
}
