// HTTP handlers for authentication endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde_json::json;

use crate::auth::{
    error::AuthError,
    middleware::AuthenticatedUser,
    models::{AuthResponse, CredentialsRequest, UserResponse},
};
use crate::extract::ValidatedJson;
use crate::AppState;

/// Log a user in
/// POST /api/login
pub async fn login_handler(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CredentialsRequest>,
) -> Result<Json<AuthResponse>, AuthError> {
    let response = state
        .account_service
        .login(&request.username, &request.password)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    Ok(Json(response))
}

/// Register a new user
/// POST /api/register
pub async fn register_handler(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CredentialsRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AuthError> {
    let response = state
        .account_service
        .register(&request.username, &request.password)
        .await?
        .ok_or(AuthError::UsernameTaken)?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Get the current user (protected endpoint)
/// GET /api/user
pub async fn current_user_handler(user: AuthenticatedUser) -> Json<UserResponse> {
    Json(UserResponse {
        id: user.user_id,
        username: user.username,
    })
}

/// Acknowledge a logout
/// POST /api/logout
///
/// Tokens are stateless, so logout is client-local token deletion; the
/// server only acknowledges.
pub async fn logout_handler() -> Json<serde_json::Value> {
    Json(json!({ "message": "Logged out successfully" }))
}
