//! Error type shared by the core layers.
//!
//! Matching itself never fails: a query with no hits is an empty result.
//! Everything here is either a load-time problem (bad table, bad synonym
//! configuration) or a request the caller should have rejected up front.

use std::path::PathBuf;

pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("failed to open trial table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed trial table: {0}")]
    Csv(#[from] csv::Error),

    #[error("trial table is missing required column {0:?}")]
    MissingColumn(&'static str),

    #[error("duplicate trial id {0:?}")]
    DuplicateId(String),

    #[error("synonym term {term:?} is claimed by both {first:?} and {second:?}")]
    OverlappingSynonym {
        term: String,
        first: String,
        second: String,
    },

    #[error("query must not be empty")]
    EmptyQuery,

    #[error("query contains no searchable words")]
    NoSearchTerms,

    #[error("unknown search mode {0:?} (expected \"expand\" or \"terms\")")]
    UnknownMode(String),
}
