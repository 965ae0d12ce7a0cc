//! Loader: reads the trial table (CSV with a header row) into
//! [`TrialRecord`] values.
//!
//! Required headers are located by name, so column order is free. Every
//! other column is carried along in [`TrialFields::extra`].

use crate::error::{CoreError, Result};
use crate::types::{TrialFields, TrialRecord};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use std::path::Path;

pub const COL_ID: &str = "NCT Number";
pub const COL_TITLE: &str = "Study Title";
pub const COL_CONDITIONS: &str = "Conditions";
pub const COL_INTERVENTIONS: &str = "Interventions";
pub const COL_BRIEF_SUMMARY: &str = "Brief Summary";
pub const COL_STUDY_STATUS: &str = "Study Status";
pub const COL_STUDY_URL: &str = "Study URL";

const REQUIRED: [&str; 7] = [
    COL_ID,
    COL_TITLE,
    COL_CONDITIONS,
    COL_INTERVENTIONS,
    COL_BRIEF_SUMMARY,
    COL_STUDY_STATUS,
    COL_STUDY_URL,
];

/// Load every row of the CSV file at `path`.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Vec<TrialRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| CoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_csv(file)?;
    tracing::info!(path = %path.display(), records = records.len(), "trial table loaded");
    Ok(records)
}

/// Read every row from `reader`. Rows may be shorter or longer than the
/// header; missing cells read as empty strings.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<TrialRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let columns = ColumnMap::new(&headers)?;

    let mut records = Vec::new();
    for row in reader.records() {
        records.push(TrialRecord::from_fields(columns.fields(&row?)));
    }
    Ok(records)
}

// ---------------------------------------------------------------------------
// Column mapping
// ---------------------------------------------------------------------------

struct ColumnMap {
    /// Position of each `REQUIRED` header, same order.
    required: [usize; 7],
    /// `(position, header)` of every other column.
    extra: Vec<(usize, String)>,
}

impl ColumnMap {
    fn new(headers: &StringRecord) -> Result<Self> {
        let position = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(CoreError::MissingColumn(name))
        };

        let mut required = [0usize; 7];
        for (slot, name) in required.iter_mut().zip(REQUIRED) {
            *slot = position(name)?;
        }

        let extra = headers
            .iter()
            .enumerate()
            .filter(|(idx, _)| !required.contains(idx))
            .map(|(idx, header)| (idx, header.trim().to_string()))
            .collect();

        Ok(Self { required, extra })
    }

    fn fields(&self, row: &StringRecord) -> TrialFields {
        let cell = |idx: usize| row.get(idx).unwrap_or_default().to_string();
        let [id, title, conditions, interventions, brief_summary, study_status, study_url] =
            self.required.map(cell);

        TrialFields {
            id,
            title,
            conditions,
            interventions,
            brief_summary,
            study_status,
            study_url,
            extra: self
                .extra
                .iter()
                .map(|(idx, header)| (header.clone(), cell(*idx)))
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
