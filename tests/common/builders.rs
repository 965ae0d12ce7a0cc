//! Test builders: ergonomic constructors for `TrialRecord`, `RecordStore`
//! and engines.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use cts_core::{RecordStore, SearchEngine, SynonymResolver, TrialFields, TrialRecord};

// ---------------------------------------------------------------------------
// TrialBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`TrialRecord`] test fixtures.
///
/// # Example
///
/// ```rust
/// let trial = TrialBuilder::new("NCT001")
///     .title("Pembrolizumab in NSCLC")
///     .conditions("NSCLC|Lung Cancer")
///     .interventions("Drug A")
///     .build();
/// ```
pub struct TrialBuilder {
    fields: TrialFields,
}

impl TrialBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            fields: TrialFields {
                study_url: format!("https://clinicaltrials.gov/study/{id}"),
                study_status: "RECRUITING".to_string(),
                id,
                ..Default::default()
            },
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.fields.title = title.into();
        self
    }

    /// Pipe-delimited, as in the source table.
    pub fn conditions(mut self, conditions: impl Into<String>) -> Self {
        self.fields.conditions = conditions.into();
        self
    }

    /// Pipe-delimited, as in the source table.
    pub fn interventions(mut self, interventions: impl Into<String>) -> Self {
        self.fields.interventions = interventions.into();
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.fields.brief_summary = summary.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.fields.study_status = status.into();
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.fields.study_url = url.into();
        self
    }

    pub fn extra(mut self, header: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.extra.push((header.into(), value.into()));
        self
    }

    pub fn build(self) -> TrialRecord {
        TrialRecord::from_fields(self.fields)
    }
}

// ---------------------------------------------------------------------------
// Store / engine helpers
// ---------------------------------------------------------------------------

/// Build a store; panics on duplicate ids.
pub fn store_of(records: Vec<TrialRecord>) -> RecordStore {
    RecordStore::new(records).expect("test records must have unique ids")
}

/// Engine over `records` with the built-in synonym table.
pub fn engine_of(records: Vec<TrialRecord>) -> SearchEngine {
    SearchEngine::new(store_of(records), SynonymResolver::builtin())
}

/// Ids of a result set, in result order.
pub fn ids<'a>(records: &[&'a TrialRecord]) -> Vec<&'a str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Corpus helpers
// ---------------------------------------------------------------------------

/// `n` trials arranged in a chain: trial `i` shares an intervention with
/// trial `i + 1`. Only trial 0 mentions "headache".
pub fn chain_corpus(n: usize) -> Vec<TrialRecord> {
    (0..n)
        .map(|i| {
            let title = if i == 0 {
                "Headache prevention study".to_string()
            } else {
                format!("Follow-up study {i}")
            };
            TrialBuilder::new(format!("NCT{i:05}"))
                .title(title)
                .conditions(format!("Condition {i}"))
                .interventions(format!("Drug {i}|Drug {}", i + 1))
                .build()
        })
        .collect()
}

/// `n` trials that all share one hub condition.
pub fn hub_corpus(n: usize) -> Vec<TrialRecord> {
    (0..n)
        .map(|i| {
            TrialBuilder::new(format!("NCT{i:05}"))
                .title(if i == 0 { "Hub seed".to_string() } else { format!("Spoke {i}") })
                .conditions("Hypertension")
                .interventions(format!("Drug {i}"))
                .build()
        })
        .collect()
}
