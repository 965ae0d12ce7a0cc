//! Synonym term matcher: AND across query tokens, OR within each token's
//! synonym group.

use crate::store::RecordStore;
use crate::synonyms::{SynonymGroup, SynonymResolver};
use crate::types::TrialRecord;
use regex::Regex;
use std::sync::LazyLock;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("word regex is valid"));

/// Split `query` into lower-cased maximal runs of word characters.
pub fn tokenize(query: &str) -> Vec<String> {
    WORD.find_iter(query)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// One group per token, duplicates kept.
pub fn resolve_groups(resolver: &SynonymResolver, tokens: &[String]) -> Vec<SynonymGroup> {
    tokens
        .iter()
        .map(|token| resolver.synonyms_of(token).into_owned())
        .collect()
}

/// True if every group has a member in the record's search text.
pub fn record_matches(record: &TrialRecord, groups: &[SynonymGroup]) -> bool {
    groups.iter().all(|group| group.occurs_in(record.search_text()))
}

/// Run a term search. The caller must ensure `query` has at least one
/// token; with none, every record would match. Results are in store order.
pub fn match_terms<'s>(
    store: &'s RecordStore,
    resolver: &SynonymResolver,
    query: &str,
) -> Vec<&'s TrialRecord> {
    let tokens = tokenize(query);
    let groups = resolve_groups(resolver, &tokens);
    tracing::debug!(
        tokens = tokens.len(),
        alternatives = groups.iter().map(SynonymGroup::len).sum::<usize>(),
        "term search"
    );
    store.records_where(|record| record_matches(record, &groups))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
