//! Search layer: one engine, two matching modes.
//!
//! - [`SearchMode::Expand`]: substring seed over every raw field, grown by
//!   up to `max_steps` hops over shared Condition / Intervention values
//!   (see [`expansion`]).
//! - [`SearchMode::Terms`]: tokenised AND-match where each token stands for
//!   its whole synonym group (see [`terms`]).
//!
//! The matchers are pure functions over an immutable [`RecordStore`] and
//! [`SynonymResolver`]; they never fail. Input validation lives here, in
//! [`Query::new`] and [`SearchEngine::search`], so a matcher is never
//! handed a query it would mis-handle.

pub mod expansion;
pub mod terms;

use crate::error::{CoreError, Result};
use crate::present::{summarize, TrialSummary};
use crate::store::RecordStore;
use crate::synonyms::SynonymResolver;
use crate::types::TrialRecord;
use std::fmt;

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// A non-empty query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(text: impl Into<String>) -> Result<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(CoreError::EmptyQuery);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// SearchMode
// ---------------------------------------------------------------------------

/// Which matcher to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Substring seed plus up to `max_steps` expansion hops.
    Expand { max_steps: usize },
    /// Tokenised AND over synonym groups.
    Terms,
}

impl SearchMode {
    /// Parse a mode name. `steps` is only consulted for expansion and goes
    /// through [`parse_max_steps`].
    pub fn parse(name: &str, steps: Option<&str>) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "expand" | "expansion" => Ok(SearchMode::Expand {
                max_steps: parse_max_steps(steps),
            }),
            "terms" | "synonyms" => Ok(SearchMode::Terms),
            _ => Err(CoreError::UnknownMode(name.to_string())),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Expand { max_steps } => write!(f, "expand(steps={max_steps})"),
            SearchMode::Terms => write!(f, "terms"),
        }
    }
}

/// Lenient hop-count parsing. Absent, non-integer and negative values all
/// mean 0 (no expansion) instead of failing the request; present-but-invalid
/// values are logged at `warn` so caller mistakes stay visible.
pub fn parse_max_steps(raw: Option<&str>) -> usize {
    let Some(raw) = raw else { return 0 };
    match raw.trim().parse::<usize>() {
        Ok(steps) => steps,
        Err(err) => {
            tracing::warn!(steps = raw, error = %err, "malformed step count, expanding 0 steps");
            0
        }
    }
}

// ---------------------------------------------------------------------------
// SearchEngine
// ---------------------------------------------------------------------------

/// Read-only search state shared by every request.
#[derive(Debug, Default)]
pub struct SearchEngine {
    store: RecordStore,
    synonyms: SynonymResolver,
}

impl SearchEngine {
    pub fn new(store: RecordStore, synonyms: SynonymResolver) -> Self {
        Self { store, synonyms }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn synonyms(&self) -> &SynonymResolver {
        &self.synonyms
    }

    /// Matching records in store order. An empty result is a successful
    /// "no match". Fails only with [`CoreError::NoSearchTerms`] when a term
    /// search query has no word tokens.
    pub fn search(&self, query: &Query, mode: SearchMode) -> Result<Vec<&TrialRecord>> {
        let hits = match mode {
            SearchMode::Expand { max_steps } => {
                expansion::expand(&self.store, query.as_str(), max_steps)
            }
            SearchMode::Terms => {
                if terms::tokenize(query.as_str()).is_empty() {
                    return Err(CoreError::NoSearchTerms);
                }
                terms::match_terms(&self.store, &self.synonyms, query.as_str())
            }
        };
        tracing::info!(query = %query, mode = %mode, hits = hits.len(), "search");
        Ok(hits)
    }

    /// [`search`](Self::search) followed by projection to the public field set.
    pub fn search_summaries(&self, query: &Query, mode: SearchMode) -> Result<Vec<TrialSummary>> {
        Ok(summarize(&self.search(query, mode)?))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
