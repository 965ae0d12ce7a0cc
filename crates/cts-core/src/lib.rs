//! cts-core: clinical trial search core.
//!
//! This crate holds the record store, the synonym resolver, both matchers
//! and the result assembler, plus the loader and configuration that feed
//! them.
//!
//! # Architecture
//!
//! ```text
//! Loader ──► Store ──┬──► Search::Expand ──┐
//!                    │                     ├──► Present
//! Synonyms ──────────┴──► Search::Terms ───┘
//! ```
//!
//! Store and synonyms are built once and are read-only afterwards, so a
//! shared [`SearchEngine`] serves concurrent requests without locking.

pub mod config;
pub mod error;
pub mod loader;
pub mod present;
pub mod search;
pub mod store;
pub mod synonyms;
pub mod types;

pub use error::{CoreError, Result};
pub use present::TrialSummary;
pub use search::{parse_max_steps, Query, SearchEngine, SearchMode};
pub use store::RecordStore;
pub use synonyms::{SynonymGroup, SynonymResolver};
pub use types::{TrialFields, TrialRecord};
