//! Domain-specific assertion macros for ctsearch harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* search invariant was violated.

use cts_core::TrialRecord;
use std::collections::HashSet;

// ---------------------------------------------------------------------------
// Result-set assertions
// ---------------------------------------------------------------------------

/// Assert that a result set has exactly these ids, in this order.
///
/// ```rust
/// assert_ids!(results, ["NCT001", "NCT003"]);
/// ```
#[macro_export]
macro_rules! assert_ids {
    ($results:expr, [$($id:expr),* $(,)?]) => {{
        let actual: Vec<&str> = $results.iter().map(|r| r.id.as_str()).collect();
        let expected: Vec<&str> = vec![$($id),*];
        pretty_assertions::assert_eq!(actual, expected, "result ids differ");
    }};
}

/// Assert that every record in `$smaller` also appears in `$larger`.
///
/// ```rust
/// assert_subset!(results_k, results_k_plus_1);
/// ```
#[macro_export]
macro_rules! assert_subset {
    ($smaller:expr, $larger:expr) => {{
        let larger: std::collections::HashSet<&str> =
            $larger.iter().map(|r| r.id.as_str()).collect();
        let missing: Vec<&str> = $smaller
            .iter()
            .map(|r| r.id.as_str())
            .filter(|id| !larger.contains(id))
            .collect();
        if !missing.is_empty() {
            panic!(
                "assert_subset! failed: {} id(s) missing from the larger set: {:?}",
                missing.len(),
                missing
            );
        }
    }};
}

/// Assert that a result set contains a record with the given id.
#[macro_export]
macro_rules! assert_contains_id {
    ($results:expr, $id:expr) => {{
        let id: &str = $id;
        if !$results.iter().any(|r| r.id == id) {
            panic!(
                "assert_contains_id! failed: {:?} not in results {:?}",
                id,
                $results.iter().map(|r| r.id.as_str()).collect::<Vec<_>>()
            );
        }
    }};
}

/// Assert that a result set does not contain a record with the given id.
#[macro_export]
macro_rules! assert_lacks_id {
    ($results:expr, $id:expr) => {{
        let id: &str = $id;
        if $results.iter().any(|r| r.id == id) {
            panic!("assert_lacks_id! failed: {:?} unexpectedly in results", id);
        }
    }};
}

// ---------------------------------------------------------------------------
// Ordering helpers
// ---------------------------------------------------------------------------

/// Assert that `results` appear in the same relative order as in `store`.
pub fn assert_store_order(results: &[&TrialRecord], store: &[TrialRecord]) {
    let position = |id: &str| {
        store
            .iter()
            .position(|r| r.id == id)
            .unwrap_or_else(|| panic!("result {id:?} is not in the store"))
    };
    let positions: Vec<usize> = results.iter().map(|r| position(&r.id)).collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "results are not in store order: positions {positions:?}"
    );
}

/// Assert that no id appears twice in a result set.
pub fn assert_unique(results: &[&TrialRecord]) {
    let mut seen = HashSet::new();
    for record in results {
        assert!(seen.insert(record.id.as_str()), "duplicate result {:?}", record.id);
    }
}
