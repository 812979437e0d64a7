// JWT token generation and validation service

use crate::auth::error::AuthError;
use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token lifetime: 7 days
const TOKEN_DURATION_SECS: i64 = 7 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32, // user id
    pub username: String,
    pub iat: i64, // issued at timestamp
    pub exp: i64, // expiration timestamp
}

/// Token service for issuing and verifying bearer tokens
///
/// The signing secret is injected at construction; nothing in this module
/// reads the environment. Tokens are stateless and invalidated only by
/// expiry or secret rotation.
pub struct TokenService {
    secret: String,
}

impl TokenService {
    /// Create a new TokenService with the given signing secret
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Issue a token for a user, valid for 7 days
    pub fn issue(&self, user_id: i32, username: &str) -> Result<String, AuthError> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user_id,
            username: username.to_string(),
            iat: now,
            exp: now + TOKEN_DURATION_SECS,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenGenerationError(e.to_string()))
    }

    /// Verify a token, returning its claims
    ///
    /// Any failure comes back as a typed error: expired tokens as
    /// `ExpiredToken`, everything else (bad signature, malformed payload)
    /// as `InvalidToken`. Never panics.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::ExpiredToken,
            _ => AuthError::InvalidToken,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_token_service() -> TokenService {
        TokenService::new("test_secret_key_for_testing_purposes".to_string())
    }

    #[test]
    fn test_token_expiration_is_7_days() {
        let service = test_token_service();
        let token = service.issue(1, "admin").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.exp - claims.iat, 604800);
    }

    #[test]
    fn test_token_claims_contain_user_identity() {
        let service = test_token_service();
        let token = service.issue(42, "admin").unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.username, "admin");
    }

    #[test]
    fn test_malformed_tokens_are_rejected() {
        let service = test_token_service();

        assert!(matches!(service.verify(""), Err(AuthError::InvalidToken)));
        assert!(matches!(service.verify("not.a.token"), Err(AuthError::InvalidToken)));
        assert!(matches!(
            service.verify("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.invalid.signature"),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn test_token_signed_with_different_secret_is_rejected() {
        let service1 = TokenService::new("secret1".to_string());
        let service2 = TokenService::new("secret2".to_string());

        let token = service1.issue(1, "admin").unwrap();

        assert!(service1.verify(&token).is_ok());
        assert!(matches!(service2.verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let service = test_token_service();

        // Hand-craft a token that expired well beyond the default leeway
        let claims = Claims {
            sub: 1,
            username: "admin".to_string(),
            iat: Utc::now().timestamp() - 1000,
            exp: Utc::now().timestamp() - 500,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test_secret_key_for_testing_purposes".as_bytes()),
        )
        .unwrap();

        assert!(matches!(service.verify(&token), Err(AuthError::ExpiredToken)));
    }

    proptest! {
        #[test]
        fn prop_issue_verify_round_trip(
            user_id in 1i32..1000000,
            username in "[a-z][a-z0-9_]{2,20}"
        ) {
            let service = test_token_service();
            let token = service.issue(user_id, &username).unwrap();
            let claims = service.verify(&token).unwrap();

            prop_assert_eq!(claims.sub, user_id);
            prop_assert_eq!(claims.username, username);
            prop_assert_eq!(claims.exp - claims.iat, 604800);
        }

        #[test]
        fn prop_random_strings_are_rejected(garbage in "[a-zA-Z0-9]{10,50}") {
            let service = test_token_service();
            prop_assert!(service.verify(&garbage).is_err());
        }
    }
}
