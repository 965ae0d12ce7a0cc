//! Route handlers.
//!
//! Handlers validate request parameters, then call into the shared
//! [`SearchEngine`](cts_core::SearchEngine). Matching is synchronous and
//! never awaits.

use crate::error::{ApiError, ApiResult};
use crate::AppState;
use axum::extract::{Path, Query as QueryParams, State};
use axum::Json;
use cts_core::{Query, SearchMode, TrialSummary};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// `/search` query string. Everything is taken as text so malformed values
/// reach our own parsing instead of being rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub steps: Option<String>,
    pub mode: Option<String>,
}

/// `GET /search?q=<query>&steps=<n>&mode=<expand|terms>`
pub async fn search(
    State(state): State<Arc<AppState>>,
    QueryParams(params): QueryParams<SearchParams>,
) -> ApiResult<Json<Vec<TrialSummary>>> {
    let query = Query::new(params.q.unwrap_or_default())?;
    let mode_name = params.mode.as_deref().unwrap_or(&state.default_mode);
    let mode = SearchMode::parse(mode_name, params.steps.as_deref())?;

    let results = state.engine.search_summaries(&query, mode)?;
    Ok(Json(results))
}

/// `GET /trials/{id}`
pub async fn trial(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<TrialSummary>> {
    state
        .engine
        .store()
        .by_id(&id)
        .map(|record| Json(TrialSummary::from(record)))
        .ok_or_else(|| ApiError::NotFound(format!("No trial with id {id}")))
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub records: usize,
}

/// `GET /healthz`
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Health> {
    Json(Health {
        status: "ok",
        records: state.engine.store().len(),
    })
}
