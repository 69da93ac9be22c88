// handlers/public/auth/login.rs - POST /api/auth/login handler

use axum::{
    extract::State,
    http::{HeaderName, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};

use crate::app::AppState;
use crate::database::models::{LoginRequest, UserResponse};
use crate::error::ApiError;
use crate::middleware::cors::AUTH_TOKEN_HEADER;

/// POST /api/auth/login - Authenticate with email and password
///
/// Expected Input:
/// ```json
/// { "email": "string", "password": "string" }
/// ```
///
/// The body of a successful response is the user record. When token signing
/// is configured the session token is returned in the `X-Auth-Token` header,
/// for use as `Authorization: Bearer <token>`.
///
/// Errors:
/// - 401 `Invalid email or password` (unknown email and wrong password alike)
pub async fn login_post(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    let outcome = state.accounts.login(payload).await?;
    let echo = state.accounts.password_mode().echoes_password();

    let mut response = Json(UserResponse::from_user(outcome.user, echo)).into_response();

    if let Some(token) = outcome.token {
        let value = HeaderValue::from_str(&token).map_err(|e| {
            tracing::error!("Token is not a valid header value: {}", e);
            ApiError::internal_server_error("Failed to issue session token")
        })?;
        response
            .headers_mut()
            .insert(HeaderName::from_static(AUTH_TOKEN_HEADER), value);
    }

    Ok(response)
}
