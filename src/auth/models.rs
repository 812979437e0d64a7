// Authentication data models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// User database model
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// User response model (excludes password_hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// Login and registration request DTO (both endpoints share the shape)
#[derive(Debug, Deserialize, Validate)]
pub struct CredentialsRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Authentication response DTO
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_response_excludes_password_hash() {
        let user = User {
            id: 1,
            username: "admin".to_string(),
            password_hash: "aabb:ccdd".to_string(),
            created_at: Utc::now(),
        };

        let response = UserResponse::from(user);
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"username\":\"admin\""));
        assert!(!json.contains("password"));
        assert!(!json.contains("ccdd"));
    }

    #[test]
    fn test_credentials_request_rejects_empty_fields() {
        let request = CredentialsRequest {
            username: "".to_string(),
            password: "secret".to_string(),
        };
        assert!(request.validate().is_err());

        let request = CredentialsRequest {
            username: "admin".to_string(),
            password: "".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
