//! Result assembly: projects matched records to the public field set.
//!
//! Runs after matching, never before: matchers work on the structured
//! lists, this module only renders them. Multi-valued fields are joined
//! with `", "`; empty values become `None` (`null` on the wire). Wire names
//! follow the trial table's column headers.

use crate::types::TrialRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialSummary {
    #[serde(rename = "NCT Number")]
    pub id: String,
    #[serde(rename = "Study Title")]
    pub title: Option<String>,
    #[serde(rename = "Conditions")]
    pub conditions: Option<String>,
    #[serde(rename = "Interventions")]
    pub interventions: Option<String>,
    #[serde(rename = "Brief Summary")]
    pub brief_summary: Option<String>,
    #[serde(rename = "Study Status")]
    pub study_status: Option<String>,
    #[serde(rename = "Study URL")]
    pub study_url: Option<String>,
}

impl From<&TrialRecord> for TrialSummary {
    fn from(record: &TrialRecord) -> Self {
        Self {
            id: record.id.clone(),
            title: present(&record.title),
            conditions: display_list(&record.conditions),
            interventions: display_list(&record.interventions),
            brief_summary: present(&record.brief_summary),
            study_status: present(&record.study_status),
            study_url: present(&record.study_url),
        }
    }
}

/// Project every record, keeping order.
pub fn summarize(records: &[&TrialRecord]) -> Vec<TrialSummary> {
    records.iter().map(|&record| TrialSummary::from(record)).collect()
}

fn present(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn display_list(values: &[String]) -> Option<String> {
    (!values.is_empty()).then(|| values.join(", "))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
