//! Synonym resolution: maps a query token to the group of interchangeable
//! terms it belongs to.
//!
//! Groups are static configuration: a canonical concept plus its member
//! list. The concept is itself a member, and any member resolves to the
//! whole group. Lookup is exact membership after lower-casing; there is no
//! stemming or fuzzy matching. A term outside every group resolves to a
//! singleton group of itself.
//!
//! Disjoint groups do not mean disjoint matches. Members are tested as
//! substrings of a record's text, so "sclc" and "small cell lung cancer"
//! also hit every record that spells out non-small cell lung cancer. The
//! reverse does not hold.

use crate::config::SynonymEntry;
use crate::error::{CoreError, Result};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap};

// ---------------------------------------------------------------------------
// Built-in table
// ---------------------------------------------------------------------------

/// Canonical concept → member list. All entries lower-case and disjoint.
pub static BUILTIN_SYNONYMS: phf::Map<&'static str, &'static [&'static str]> = phf::phf_map! {
    "non-small cell lung cancer" => &[
        "nsclc",
        "non small cell lung cancer",
        "non-small-cell lung cancer",
        "non small-cell lung cancer",
        "nonsmall cell lung cancer",
    ],
    "small cell lung cancer" => &["sclc", "small-cell lung cancer"],
    "immunotherapy" => &[
        "immunotherapies",
        "immune therapy",
        "immuno-oncology",
        "immune checkpoint inhibitor",
        "checkpoint inhibitor",
    ],
    "chemotherapy" => &["chemo", "chemotherapeutic", "cytotoxic therapy"],
    "radiotherapy" => &["radiation therapy", "radiation", "irradiation"],
    "breast cancer" => &["breast carcinoma", "breast neoplasm"],
    "pembrolizumab" => &["keytruda", "mk-3475"],
    "nivolumab" => &["opdivo"],
};

// ---------------------------------------------------------------------------
// SynonymGroup
// ---------------------------------------------------------------------------

/// A set of interchangeable, lower-cased terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymGroup {
    concept: String,
    terms: BTreeSet<String>,
}

impl SynonymGroup {
    /// Group containing only `term`, lower-cased.
    pub fn singleton(term: &str) -> Self {
        let term = term.to_lowercase();
        Self {
            terms: BTreeSet::from([term.clone()]),
            concept: term,
        }
    }

    fn new<M>(concept: &str, members: M) -> Self
    where
        M: IntoIterator,
        M::Item: AsRef<str>,
    {
        let concept = concept.trim().to_lowercase();
        let mut terms: BTreeSet<String> = members
            .into_iter()
            .map(|m| m.as_ref().trim().to_lowercase())
            .filter(|m| !m.is_empty())
            .collect();
        terms.insert(concept.clone());
        Self { concept, terms }
    }

    pub fn concept(&self) -> &str {
        &self.concept
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(&term.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True if any member occurs as a substring of `text`. `text` must
    /// already be lower-cased.
    pub fn occurs_in(&self, text: &str) -> bool {
        self.terms.iter().any(|term| text.contains(term.as_str()))
    }
}

// ---------------------------------------------------------------------------
// SynonymResolver
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct SynonymResolver {
    groups: Vec<SynonymGroup>,
    index: HashMap<String, usize>,
}

impl SynonymResolver {
    /// Resolver over [`BUILTIN_SYNONYMS`] only.
    pub fn builtin() -> Self {
        Self::from_entries(builtin_entries()).expect("built-in synonym table must be disjoint")
    }

    /// Built-in table with configured groups layered on top. A configured
    /// concept replaces the built-in group of the same name; new concepts
    /// are added.
    pub fn with_overrides(overrides: &[SynonymEntry]) -> Result<Self> {
        let mut merged: BTreeMap<String, Vec<String>> = builtin_entries()
            .map(|(concept, members)| {
                (
                    concept.to_string(),
                    members.iter().map(|m| m.to_string()).collect(),
                )
            })
            .collect();
        for entry in overrides {
            let concept = entry.concept.trim().to_lowercase();
            if merged.insert(concept.clone(), entry.members.clone()).is_some() {
                tracing::debug!(concept = %concept, "configured synonyms replace built-in group");
            }
        }
        Self::from_entries(merged)
    }

    /// Build from `(concept, members)` pairs. Fails with
    /// [`CoreError::OverlappingSynonym`] if a term lands in two groups.
    pub fn from_entries<I, C, M>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (C, M)>,
        C: AsRef<str>,
        M: IntoIterator,
        M::Item: AsRef<str>,
    {
        let mut groups = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (concept, members) in entries {
            let group = SynonymGroup::new(concept.as_ref(), members);
            let idx = groups.len();
            for term in group.terms() {
                if let Some(&other) = index.get(term) {
                    let other: &SynonymGroup = &groups[other];
                    return Err(CoreError::OverlappingSynonym {
                        term: term.to_string(),
                        first: other.concept.clone(),
                        second: group.concept.clone(),
                    });
                }
                index.insert(term.to_string(), idx);
            }
            groups.push(group);
        }

        tracing::debug!(groups = groups.len(), terms = index.len(), "synonym table loaded");
        Ok(Self { groups, index })
    }

    /// The group containing `term`, or a singleton of `term` lower-cased.
    pub fn synonyms_of(&self, term: &str) -> Cow<'_, SynonymGroup> {
        let key = term.to_lowercase();
        match self.index.get(&key) {
            Some(&idx) => Cow::Borrowed(&self.groups[idx]),
            None => Cow::Owned(SynonymGroup::singleton(&key)),
        }
    }

    pub fn groups(&self) -> &[SynonymGroup] {
        &self.groups
    }
}

fn builtin_entries() -> impl Iterator<Item = (&'static str, &'static [&'static str])> {
    // phf iteration order is fixed at compile time but not meaningful;
    // sort so group order is stable across table edits.
    let mut entries: Vec<_> = BUILTIN_SYNONYMS.entries().map(|(k, v)| (*k, *v)).collect();
    entries.sort_unstable_by_key(|(concept, _)| *concept);
    entries.into_iter()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
