// Leadership value catalog models and DTOs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// An admin-curated catalog entry describing a named leadership value
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct LeadershipValue {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Integrity")]
    pub value: String,
    #[schema(example = "Doing the right thing even when nobody is watching")]
    pub description: String,
}

/// Request DTO for creating or replacing a leadership value
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LeadershipValueRequest {
    #[schema(example = "Courage")]
    #[validate(length(min = 1, message = "Value name is required"))]
    pub value: String,
    #[schema(example = "Taking ownership of hard decisions")]
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_requires_value_and_description() {
        let request = LeadershipValueRequest {
            value: "".to_string(),
            description: "something".to_string(),
        };
        assert!(request.validate().is_err());

        let request = LeadershipValueRequest {
            value: "Integrity".to_string(),
            description: "".to_string(),
        };
        assert!(request.validate().is_err());

        let request = LeadershipValueRequest {
            value: "Integrity".to_string(),
            description: "Doing the right thing".to_string(),
        };
        assert!(request.validate().is_ok());
    }
}
