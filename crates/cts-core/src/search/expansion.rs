//! Expansion matcher: substring seed grown over shared Condition /
//! Intervention values.
//!
//! Records form an implicit graph: two records are adjacent when they share
//! a condition value or an intervention value. The seed is every record
//! whose raw text contains the query; each hop then adds every unvisited
//! record adjacent to the previous hop's additions. The walk stops after
//! `max_steps` hops or as soon as a hop adds nothing.

use crate::store::RecordStore;
use crate::types::TrialRecord;
use std::collections::{BTreeSet, HashSet};

/// Run an expansion search. `query` must be non-empty; `max_steps == 0`
/// returns exactly the seed. Results are in store order.
pub fn expand<'s>(store: &'s RecordStore, query: &str, max_steps: usize) -> Vec<&'s TrialRecord> {
    let positions = expand_positions(store, query, max_steps);
    positions
        .into_iter()
        .filter_map(|idx| store.by_index(idx))
        .collect()
}

/// Store positions of the substring seed.
pub fn seed_positions(store: &RecordStore, query: &str) -> BTreeSet<usize> {
    let needle = query.to_lowercase();
    store
        .all()
        .iter()
        .enumerate()
        .filter(|(_, record)| record.raw_text().contains(needle.as_str()))
        .map(|(idx, _)| idx)
        .collect()
}

/// Store positions reached by the expansion, sorted (i.e. store order).
pub fn expand_positions(store: &RecordStore, query: &str, max_steps: usize) -> BTreeSet<usize> {
    let seed = seed_positions(store, query);
    if seed.is_empty() {
        tracing::debug!(query, "expansion seed empty");
        return seed;
    }

    let records = store.all();
    // Results only ever grow by `visited` additions, so one set serves as both.
    let mut visited = seed.clone();
    let mut frontier = seed;

    for step in 0..max_steps {
        let mut conditions: HashSet<&str> = HashSet::new();
        let mut interventions: HashSet<&str> = HashSet::new();
        for &idx in &frontier {
            let record = &records[idx];
            conditions.extend(record.conditions.iter().map(String::as_str));
            interventions.extend(record.interventions.iter().map(String::as_str));
        }

        let new_matches: BTreeSet<usize> = records
            .iter()
            .enumerate()
            .filter(|(idx, _)| !visited.contains(idx))
            .filter(|(_, record)| {
                record
                    .conditions
                    .iter()
                    .any(|c| conditions.contains(c.as_str()))
                    || record
                        .interventions
                        .iter()
                        .any(|i| interventions.contains(i.as_str()))
            })
            .map(|(idx, _)| idx)
            .collect();

        if new_matches.is_empty() {
            tracing::debug!(query, step, "expansion reached fixed point");
            break;
        }

        tracing::trace!(query, step, added = new_matches.len(), "expansion hop");
        visited.extend(new_matches.iter().copied());
        frontier = new_matches;
    }

    visited
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
