use axum::{
    extract::{Path, State},
    Json,
};

use crate::app::AppState;
use crate::database::models::UserResponse;
use crate::error::ApiError;

/// POST /api/init - Seed the demo user and skills when no users exist
pub async fn init_post(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    let outcome = state.career.init_data().await?;
    Ok(outcome.message())
}

/// GET /api/user/:email - Look up a profile by email
///
/// A miss is 404 `User not found`; legacy-compat mode answers 200 with `null`.
pub async fn user_get(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Option<UserResponse>>, ApiError> {
    let legacy = state.config.security.legacy_compat;
    let echo = state.accounts.password_mode().echoes_password();

    match state.career.find_user(&email).await? {
        Some(user) => Ok(Json(Some(UserResponse::from_user(user, echo)))),
        None if legacy => Ok(Json(None)),
        None => Err(ApiError::not_found("User not found")),
    }
}
