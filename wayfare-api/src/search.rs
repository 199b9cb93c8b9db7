use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;
use wayfare_core::{offers_from_payload, AirportQuery, SearchParams};
use wayfare_offer::{Paginator, ResultsSession, SortMode, Source};
use wayfare_store::app_config::PaginationMode;

use crate::error::AppError;
use crate::state::AppState;

/// Which source answered: `upstream:<endpoint path>` or `mock`
pub const SOURCE_HEADER: HeaderName = HeaderName::from_static("x-wayfare-source");

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AirportSearchQuery {
    #[serde(default)]
    pub query: String,
}

/// Optional ranking and pagination of a flight search response
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsView {
    pub sort: Option<SortMode>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub pagination: Option<PaginationMode>,
}

impl ResultsView {
    pub fn is_requested(&self) -> bool {
        self.sort.is_some() || self.page.is_some() || self.page_size.is_some() || self.pagination.is_some()
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/airports/search", get(search_airports))
        .route("/api/flights/search", post(search_flights))
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/airports/search?query=
pub async fn search_airports(
    State(state): State<AppState>,
    query: Result<Query<AirportSearchQuery>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(req) = query.map_err(AppError::from_query_rejection)?;
    let query = AirportQuery::parse(req.query).map_err(AppError::from_core)?;
    info!("Searching airports for query: {:?}", query.query);

    let resolved = state.gateway.search_airports(&query).await;
    Ok(with_source(&resolved.source, resolved.body))
}

/// POST /api/flights/search
/// Records the search, then answers from upstream or mock data
pub async fn search_flights(
    State(state): State<AppState>,
    view: Result<Query<ResultsView>, QueryRejection>,
    body: Result<Json<SearchParams>, JsonRejection>,
) -> Result<Response, AppError> {
    let Query(view) = view.map_err(AppError::from_query_rejection)?;
    let Json(params) = body.map_err(AppError::from_json_rejection)?;
    params.validate().map_err(AppError::from_core)?;
    if view.page_size == Some(0) {
        return Err(AppError::ValidationError("pageSize: must be at least 1".to_string()));
    }

    state
        .store
        .add_search_history(&params)
        .await
        .map_err(AppError::from_core)?;

    let resolved = state.gateway.search_flights(&params).await;
    let body = if view.is_requested() {
        ranked_view(&state, &resolved.body, &view)?
    } else {
        resolved.body
    };

    Ok(with_source(&resolved.source, body))
}

fn ranked_view(state: &AppState, body: &Value, view: &ResultsView) -> Result<Value, AppError> {
    let mode = view.pagination.unwrap_or(state.pagination.mode);
    let page_size = view.page_size.unwrap_or(state.pagination.page_size);

    let mut session = ResultsSession::new(state.ranker.clone(), Paginator::new(mode, page_size));
    session.set_sort(view.sort.unwrap_or_default());
    session.new_search(offers_from_payload(body));
    if let Some(page) = view.page {
        session.go_to_page(page);
    }

    let itineraries = serde_json::to_value(session.visible())?;
    let pagination = serde_json::to_value(session.summary())?;
    Ok(json!({
        "status": body.get("status").cloned().unwrap_or(Value::Bool(true)),
        "data": {
            "itineraries": itineraries,
            "pagination": pagination,
        }
    }))
}

fn with_source(source: &Source, body: Value) -> Response {
    let value = HeaderValue::from_str(&source.to_string())
        .unwrap_or_else(|_| HeaderValue::from_static("upstream"));
    ([(SOURCE_HEADER, value)], Json(body)).into_response()
}
