use axum::{extract::State, routing::get, Json, Router};
use wayfare_core::SearchHistoryRecord;

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/search-history", get(get_search_history))
}

/// GET /api/search-history
/// Most recent searches, newest first
pub async fn get_search_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<SearchHistoryRecord>>, AppError> {
    let history = state
        .store
        .get_search_history(state.history_limit)
        .await
        .map_err(AppError::from_core)?;
    Ok(Json(history))
}
