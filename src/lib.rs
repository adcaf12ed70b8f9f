//! Deterministic catalog filter engine for library front-ends.
//!
//! `catalog-core` takes a fetched batch of catalog records and a set of
//! user-selected criteria and produces the ordered list to display. The
//! engine is a pure function: identical inputs always produce identical
//! output, in the same order. Around it sit the fetch-boundary adapter that
//! normalizes backend JSON, an HTTP fetcher, and the per-screen session state.

pub mod client;
pub mod config;
pub mod document;
pub mod selection;
pub mod session;
pub mod types;

pub use document::DocumentRecord;
pub use selection::{compute_visible_list, CatalogFilter, FilterOptions};
pub use types::{FilterCriteria, SortKey};
