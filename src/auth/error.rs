// Authentication and authorization error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, warn};

/// Error types for authentication operations
///
/// Status mapping follows the request-authorization pipeline: a missing
/// credential is 401, a credential that fails verification (bad signature,
/// expired, or pointing at a deleted user) is 403, and infrastructure
/// faults are 500 with a generic client message.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Username already exists")]
    UsernameTaken,

    #[error("Missing authentication token")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Token subject no longer exists")]
    UnknownUser,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Password hashing error")]
    PasswordHashError,

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),
}

impl From<sqlx::Error> for AuthError {
    fn from(err: sqlx::Error) -> Self {
        AuthError::DatabaseError(err.to_string())
    }
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AuthError::UsernameTaken => StatusCode::BAD_REQUEST,
            AuthError::MissingToken => StatusCode::UNAUTHORIZED,
            AuthError::InvalidToken => StatusCode::FORBIDDEN,
            AuthError::ExpiredToken => StatusCode::FORBIDDEN,
            AuthError::UnknownUser => StatusCode::FORBIDDEN,
            AuthError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::PasswordHashError => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::TokenGenerationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-safe message for this error (no internal details)
    pub fn error_message(&self) -> String {
        match self {
            AuthError::InvalidCredentials => "Invalid username or password".to_string(),
            AuthError::UsernameTaken => "Username already exists".to_string(),
            AuthError::MissingToken => "Missing authentication token".to_string(),
            AuthError::InvalidToken => "Invalid token".to_string(),
            AuthError::ExpiredToken => "Token has expired".to_string(),
            AuthError::UnknownUser => "Invalid token".to_string(),
            AuthError::DatabaseError(_)
            | AuthError::PasswordHashError
            | AuthError::TokenGenerationError(_) => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            AuthError::MissingToken => {
                warn!("Missing token in request to protected endpoint");
            }
            AuthError::InvalidToken | AuthError::ExpiredToken | AuthError::UnknownUser => {
                warn!("Rejected token: {}", self);
            }
            AuthError::DatabaseError(msg) => {
                error!("Database error in auth: {}", msg);
            }
            AuthError::PasswordHashError => {
                error!("Password hashing error");
            }
            AuthError::TokenGenerationError(msg) => {
                error!("Token generation error: {}", msg);
            }
            _ => {}
        }

        let body = Json(json!({
            "error": self.error_message(),
        }));

        (self.status_code(), body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_token_is_unauthorized() {
        assert_eq!(AuthError::MissingToken.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_bad_tokens_are_forbidden() {
        assert_eq!(AuthError::InvalidToken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AuthError::ExpiredToken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(AuthError::UnknownUser.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_infrastructure_errors_hide_details() {
        let err = AuthError::DatabaseError("connection refused to 10.0.0.5".to_string());
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_message(), "Internal server error");
    }

    #[test]
    fn test_duplicate_username_is_bad_request() {
        assert_eq!(AuthError::UsernameTaken.status_code(), StatusCode::BAD_REQUEST);
    }
}
