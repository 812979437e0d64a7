// Request authentication for protected routes

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use tracing::warn;

use crate::auth::error::AuthError;
use crate::AppState;

/// Authenticated user extractor for protected routes
///
/// Resolves the bearer token through a linear pipeline with no retries:
/// extract the Authorization header (401 if absent), verify the token
/// (403 if invalid or expired), load the encoded user from storage
/// (403 if gone, 500 if the lookup itself fails). Any stage failure
/// short-circuits before the handler runs.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub username: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let endpoint = parts.uri.path().to_string();

        // Stage 1: extract the bearer token
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| {
                warn!("Missing Authorization header for protected endpoint: {}", endpoint);
                AuthError::MissingToken
            })?
            .to_str()
            .map_err(|_| AuthError::MissingToken)?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| {
                warn!("Authorization header missing 'Bearer ' prefix for endpoint: {}", endpoint);
                AuthError::MissingToken
            })?;

        // Stage 2: verify signature and expiry
        let claims = state.token_service.verify(token)?;

        // Stage 3: the encoded user must still exist in storage
        let user = state
            .user_repo
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| {
                warn!("Token for deleted user {} on endpoint: {}", claims.sub, endpoint);
                AuthError::UnknownUser
            })?;

        // Stage 4: attach the resolved user to the request
        Ok(AuthenticatedUser {
            user_id: user.id,
            username: user.username,
        })
    }
}
