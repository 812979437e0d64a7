// Account service - login and registration orchestration

use crate::auth::{
    error::AuthError,
    models::{AuthResponse, UserResponse},
    password::PasswordService,
    repository::UserRepository,
    token::TokenService,
};
use std::sync::Arc;

/// Account service combining password hashing, token issuance and the
/// user repository
///
/// Business rejections (wrong credentials, duplicate username) come back
/// as `Ok(None)`; only infrastructure faults are `Err`.
pub struct AccountService {
    user_repo: UserRepository,
    token_service: Arc<TokenService>,
}

impl AccountService {
    /// Create a new AccountService
    pub fn new(user_repo: UserRepository, token_service: Arc<TokenService>) -> Self {
        Self {
            user_repo,
            token_service,
        }
    }

    /// Log a user in
    ///
    /// Returns `Ok(None)` uniformly for an unknown username or a wrong
    /// password, so the error variant never reveals whether the username
    /// exists.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AuthResponse>, AuthError> {
        let Some(user) = self.user_repo.find_by_username(username).await? else {
            tracing::debug!("Login attempt for unknown username");
            return Ok(None);
        };

        if !PasswordService::verify_password(password, &user.password_hash)? {
            tracing::debug!("Password mismatch for user {}", user.id);
            return Ok(None);
        }

        let token = self.token_service.issue(user.id, &user.username)?;

        tracing::info!("User {} logged in", user.id);
        Ok(Some(AuthResponse {
            user: UserResponse::from(user),
            token,
        }))
    }

    /// Register a new user
    ///
    /// Returns `Ok(None)` when the username is already taken.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<AuthResponse>, AuthError> {
        let password_hash = PasswordService::hash_password(password)?;

        let Some(user) = self.user_repo.create_user(username, &password_hash).await? else {
            tracing::debug!("Registration rejected: username already exists");
            return Ok(None);
        };

        let token = self.token_service.issue(user.id, &user.username)?;

        tracing::info!("Registered new user {}", user.id);
        Ok(Some(AuthResponse {
            user: UserResponse::from(user),
            token,
        }))
    }
}
