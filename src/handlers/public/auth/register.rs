// handlers/public/auth/register.rs - POST /api/auth/register handler

use axum::{extract::State, Json};

use crate::app::AppState;
use crate::database::models::{NewUser, UserResponse};
use crate::error::ApiError;

/// POST /api/auth/register - Register a new user account
///
/// Expected Input:
/// ```json
/// {
///   "name": "string",
///   "email": "string",
///   "password": "string",
///   "careerGoal": "string"    // optional
/// }
/// ```
///
/// Errors:
/// - 400 `Email already registered`
pub async fn register_post(
    State(state): State<AppState>,
    Json(payload): Json<NewUser>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.accounts.register(payload).await?;
    let echo = state.accounts.password_mode().echoes_password();
    Ok(Json(UserResponse::from_user(user, echo)))
}
