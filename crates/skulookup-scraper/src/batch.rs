//! Sequential batch lookups over recognized identifiers.
//!
//! Each identifier is looked up on its own; a failure is recorded against
//! that identifier and the run moves on. Results come back in input order.

use skulookup_core::Identifier;

use crate::fetch::PageFetcher;
use crate::lookup::{Lookup, LookupOutcome};
use crate::pacing::Pacing;

#[derive(Debug)]
pub struct BatchEntry {
    pub identifier: Identifier,
    pub outcome: LookupOutcome,
}

/// Per-outcome counts for a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub found: usize,
    pub nothing_found: usize,
    pub failed: usize,
}

impl BatchSummary {
    #[must_use]
    pub fn from_entries(entries: &[BatchEntry]) -> Self {
        entries
            .iter()
            .fold(Self::default(), |mut acc, entry| {
                match entry.outcome {
                    LookupOutcome::Found(_) => acc.found += 1,
                    LookupOutcome::NothingFound => acc.nothing_found += 1,
                    LookupOutcome::TransportFailure(_) => acc.failed += 1,
                }
                acc
            })
    }
}

/// Looks up every identifier in order, one request at a time, pausing per
/// `pacing` between consecutive lookups.
pub async fn run_batch<F: PageFetcher>(
    lookup: &Lookup<F>,
    identifiers: &[Identifier],
    pacing: Pacing,
) -> Vec<BatchEntry> {
    run_batch_with(lookup, identifiers, pacing, |_| {}).await
}

/// Like [`run_batch`], calling `on_entry` as each lookup finishes so callers
/// can render progressively.
pub async fn run_batch_with<F, C>(
    lookup: &Lookup<F>,
    identifiers: &[Identifier],
    pacing: Pacing,
    mut on_entry: C,
) -> Vec<BatchEntry>
where
    F: PageFetcher,
    C: FnMut(&BatchEntry),
{
    let mut entries = Vec::with_capacity(identifiers.len());

    for (index, identifier) in identifiers.iter().enumerate() {
        if index > 0 {
            pacing.wait().await;
        }

        let outcome = lookup.lookup(identifier).await;
        tracing::debug!(
            sku = %identifier,
            position = index + 1,
            total = identifiers.len(),
            status = outcome.status(),
            "batch lookup finished"
        );

        let entry = BatchEntry {
            identifier: identifier.clone(),
            outcome,
        };
        on_entry(&entry);
        entries.push(entry);
    }

    let summary = BatchSummary::from_entries(&entries);
    tracing::info!(
        found = summary.found,
        nothing_found = summary.nothing_found,
        failed = summary.failed,
        "batch complete"
    );
    entries
}
