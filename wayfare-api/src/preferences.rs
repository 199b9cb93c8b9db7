use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::Value;
use wayfare_core::{NewUserPreferences, UserPreferences};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdatePreferencesRequest {
    pub preferences: Value,
}

pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/api/preferences/{user_id}",
        get(get_preferences).put(update_preferences),
    )
}

/// GET /api/preferences/{user_id}
pub async fn get_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<UserPreferences>, AppError> {
    let record = state
        .store
        .get_user_preferences(&user_id)
        .await
        .map_err(AppError::from_core)?
        .ok_or_else(|| AppError::NotFoundError(format!("No preferences for user {}", user_id)))?;
    Ok(Json(record))
}

/// PUT /api/preferences/{user_id}
/// Create or replace the user's preferences
pub async fn update_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    body: Result<Json<UpdatePreferencesRequest>, JsonRejection>,
) -> Result<Json<UserPreferences>, AppError> {
    let Json(req) = body.map_err(AppError::from_json_rejection)?;
    let record = state
        .store
        .update_user_preferences(NewUserPreferences {
            user_id,
            preferences: req.preferences,
        })
        .await
        .map_err(AppError::from_core)?;
    tracing::debug!("Stored preferences {} for {}", record.id, record.user_id);
    Ok(Json(record))
}
