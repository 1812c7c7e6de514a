pub mod batch;
pub mod description;
pub mod error;
pub mod fetch;
pub mod identifiers;
pub mod lookup;
pub mod metadata;
pub mod pacing;
pub mod product_api;
pub mod sidebar;
pub mod title;

#[cfg(test)]
mod testing;

pub use batch::{run_batch, run_batch_with, BatchEntry, BatchSummary};
pub use description::parse_description;
pub use error::LookupError;
pub use fetch::{HttpFetcher, PageFetcher};
pub use identifiers::{identifiers_from_grid, identifiers_from_text};
pub use lookup::{extract_page, Lookup, LookupOutcome, PageExtraction};
pub use pacing::Pacing;
