//! Screen handlers — each GET is one dashboard screen: the raw query string
//! is the bookmarkable view state, the response is the shaped page plus the
//! canonical re-encoded query for the address bar.

use axum::extract::{RawQuery, State};
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::MatchRecord;
use crate::pipeline::store::ResultStore;
use crate::pipeline::summary::FilterSummary;
use crate::pipeline::url_state::QueryState;
use crate::source::RankingParams;
use crate::state::AppState;

/// One shaped page of results, ready to render.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub items: Vec<MatchRecord>,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// Post-filter count across all pages.
    pub visible_count: usize,
    /// Unfiltered source count — lets the UI distinguish "no matches" from
    /// "no data at all".
    pub total_count: usize,
    pub filters: FilterSummary,
    /// Canonical query string for history-replacing address-bar updates.
    pub query: String,
}

/// GET /api/v1/internships/recommendations
///
/// The recommendation screen filters entirely client-side: fetch the
/// unnarrowed top-K once, then shape locally from the query string.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<PageResponse>, AppError> {
    let query_state = QueryState::decode(query.as_deref().unwrap_or(""));
    let records = state
        .source
        .fetch(&RankingParams::with_top_k(state.config.top_k))
        .await?;

    Ok(Json(shape_page(records, &query_state)))
}

/// GET /api/v1/candidates/ranking
///
/// The candidate-ranking screen forwards its score/experience/flagged
/// bounds to the backend as query parameters and lets it narrow; the client
/// pipeline still runs on the result (idempotent on an already-narrowed
/// set) so sorting, pagination, and the remaining criteria behave
/// identically to the recommendation screen.
pub async fn handle_candidate_ranking(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Json<PageResponse>, AppError> {
    let query_state = QueryState::decode(query.as_deref().unwrap_or(""));
    let criteria = query_state.criteria();

    let params = RankingParams {
        min_score: criteria.score_min,
        max_score: criteria.score_max,
        experience_min: criteria.experience_min,
        experience_max: criteria.experience_max,
        exclude_flagged: criteria.exclude_flagged,
        top_k: state.config.top_k,
    };
    let records = state.source.fetch(&params).await?;

    Ok(Json(shape_page(records, &query_state)))
}

fn shape_page(records: Vec<MatchRecord>, query_state: &QueryState) -> PageResponse {
    let mut store = ResultStore::new(records);
    store.apply_query_state(query_state);

    let visible = store.visible();
    PageResponse {
        items: visible.items.clone(),
        page: store.pagination().page,
        page_size: store.pagination().page_size,
        total_pages: visible.total_pages,
        visible_count: visible.visible_count,
        total_count: visible.total_count,
        filters: store.summary(),
        query: store.query_state().encode(),
    }
}
