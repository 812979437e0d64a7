// Assessment submission models and DTOs
// The wire contract uses camelCase field names

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A public assessment result linking a respondent to a set of selected
/// leadership values
///
/// Immutable after creation; there is no update or delete route.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    /// Optional grouping tag used for filtering and export
    #[schema(example = "ACME2024")]
    pub company_code: Option<String>,
    #[schema(example = json!(["Integrity", "Courage"]))]
    pub core_values: Vec<String>,
    pub date_submitted: DateTime<Utc>,
}

/// Request DTO for creating a submission (unauthenticated)
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionRequest {
    #[schema(example = "Jane Doe")]
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[schema(example = "jane@example.com")]
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[schema(example = "ACME2024")]
    pub company_code: Option<String>,
    #[schema(example = json!(["Integrity", "Courage"]))]
    #[validate(
        length(min = 1, message = "At least one core value is required"),
        custom = "crate::validation::validate_core_values"
    )]
    pub core_values: Vec<String>,
}

/// Query parameters for the CSV export endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportParams {
    pub company_code: Option<String>,
}
