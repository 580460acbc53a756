use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::rank::RankError;
use super::service::{MatchService, MatchServiceError};
use crate::catalog::NeedFilter;
use crate::session::SessionStore;

/// Router builder exposing the two core pipelines over HTTP.
pub fn matching_router<S: SessionStore + 'static>(service: Arc<MatchService<S>>) -> Router {
    Router::new()
        .route("/api/v1/scholarships", get(browse_handler::<S>))
        .route("/api/v1/matches", post(matches_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct BrowseParams {
    #[serde(default)]
    pub(crate) query: String,
    #[serde(default)]
    pub(crate) need: NeedFilter,
    /// Reference date for deadline statuses; defaults to the server's
    /// current date.
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) async fn browse_handler<S: SessionStore + 'static>(
    State(service): State<Arc<MatchService<S>>>,
    Query(params): Query<BrowseParams>,
) -> Response {
    let today = params.today.unwrap_or_else(|| Local::now().date_naive());
    let page = service.browse(&params.query, params.need, today);
    let payload = json!({
        "count": page.scholarships.len(),
        "scholarships": page.scholarships,
        "origin": page.origin,
        "last_updated": page.last_updated,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn matches_handler<S: SessionStore + 'static>(
    State(service): State<Arc<MatchService<S>>>,
) -> Response {
    match service.matches() {
        Ok(results) => {
            let payload = json!({
                "count": results.len(),
                "matches": results,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(MatchServiceError::Rank(RankError::ProfileIncomplete)) => {
            let payload = json!({
                "error": RankError::ProfileIncomplete.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
