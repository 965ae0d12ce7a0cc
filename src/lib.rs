//! ctsearch: clinical trial search.
//!
//! Answers free-text queries against a fixed trial table with one of two
//! matching modes: substring search expanded over shared conditions and
//! interventions, or a synonym-aware AND over query words. This crate
//! re-exports the layers so integration tests, benches and the binary can
//! import them from one place.
//!
//! # Architecture
//!
//! ```text
//! CSV ──► Loader ──► Store ──► Search (expand | terms) ──► Present ──► HTTP / CLI
//!                               ▲
//!                  Synonyms ────┘
//! ```
//!
//! Everything left of Present is built once at start-up and is read-only
//! afterwards.

pub use cts_core::{
    config, error, loader, present, search, store, synonyms, types, CoreError, Query,
    RecordStore, SearchEngine, SearchMode, SynonymResolver, TrialRecord, TrialSummary,
};

pub mod server {
    pub use cts_server::*;
}

use std::path::Path;

/// Load the trial table at `path` and build an engine over it, with the
/// built-in synonyms plus `config.synonyms`.
pub fn build_engine(path: &Path, config: &config::Config) -> cts_core::Result<SearchEngine> {
    let records = loader::load_csv(path)?;
    let store = RecordStore::new(records)?;
    let synonyms = SynonymResolver::with_overrides(&config.synonyms)?;
    Ok(SearchEngine::new(store, synonyms))
}
