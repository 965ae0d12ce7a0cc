//! Core types for cts-core.
//!
//! [`TrialRecord`] is the normalised, immutable form of one row of the trial
//! table. All normalisation (delimiter splitting, lower-casing) happens once,
//! in [`TrialRecord::from_fields`]; matchers only ever read the precomputed
//! fields.

/// Separator used inside the `Conditions` and `Interventions` source fields.
pub const MULTI_VALUE_SEPARATOR: char = '|';

/// Raw, un-normalised field values for one trial, as they appear in the
/// source table. Absent values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrialFields {
    pub id: String,
    pub title: String,
    /// Pipe-delimited list.
    pub conditions: String,
    /// Pipe-delimited list.
    pub interventions: String,
    pub brief_summary: String,
    pub study_status: String,
    pub study_url: String,
    /// Every other column of the row, in source order, as `(header, value)`.
    pub extra: Vec<(String, String)>,
}

/// One clinical trial, normalised for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialRecord {
    /// `NCT Number`. Unique within a [`RecordStore`](crate::store::RecordStore).
    pub id: String,
    pub title: String,
    pub conditions: Vec<String>,
    pub interventions: Vec<String>,
    pub brief_summary: String,
    pub study_status: String,
    pub study_url: String,
    pub extra: Vec<(String, String)>,
    search_text: String,
    raw_text: String,
}

impl TrialRecord {
    /// Normalise raw field values into a record.
    pub fn from_fields(fields: TrialFields) -> Self {
        let conditions = split_multi_value(&fields.conditions);
        let interventions = split_multi_value(&fields.interventions);

        let joined_conditions = conditions.join("|");
        let joined_interventions = interventions.join("|");
        let search_text = [
            fields.title.as_str(),
            joined_conditions.as_str(),
            joined_interventions.as_str(),
            fields.brief_summary.as_str(),
        ]
        .join(" ")
        .to_lowercase();

        // Source column order, pipes kept: the seed scan sees the row the
        // way it was written.
        let mut raw = vec![
            fields.id.as_str(),
            fields.title.as_str(),
            fields.conditions.as_str(),
            fields.interventions.as_str(),
            fields.brief_summary.as_str(),
            fields.study_status.as_str(),
            fields.study_url.as_str(),
        ];
        raw.extend(fields.extra.iter().map(|(_, value)| value.as_str()));
        let raw_text = raw.join(" ").to_lowercase();

        Self {
            id: fields.id,
            title: fields.title,
            conditions,
            interventions,
            brief_summary: fields.brief_summary,
            study_status: fields.study_status,
            study_url: fields.study_url,
            extra: fields.extra,
            search_text,
            raw_text,
        }
    }

    /// Lower-cased title, conditions, interventions and brief summary. Used
    /// by the synonym term matcher.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Lower-cased content of every raw field. Used by the expansion seed.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }
}

/// Split a pipe-delimited field. Segments are trimmed; empty segments are
/// dropped, so an empty field yields an empty list.
pub fn split_multi_value(field: &str) -> Vec<String> {
    field
        .split(MULTI_VALUE_SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
