// HTTP handlers for assessment submissions

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::auth::middleware::AuthenticatedUser;
use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::submissions::export::submissions_to_csv;
use crate::submissions::models::{CreateSubmissionRequest, ExportParams, Submission};
use crate::AppState;

/// Create a new submission
/// POST /api/submissions (public)
#[utoipa::path(
    post,
    path = "/api/submissions",
    request_body = CreateSubmissionRequest,
    responses(
        (status = 201, description = "Submission created", body = Submission),
        (status = 400, description = "Invalid input data")
    ),
    tag = "submissions"
)]
pub async fn create_submission_handler(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateSubmissionRequest>,
) -> Result<(StatusCode, Json<Submission>), ApiError> {
    tracing::debug!("Creating submission for {}", request.email);

    let submission = state
        .submissions_repo
        .create(
            &request.name,
            &request.email,
            request.company_code.as_deref(),
            &request.core_values,
        )
        .await?;

    tracing::info!("Created submission {}", submission.id);
    Ok((StatusCode::CREATED, Json(submission)))
}

/// List all submissions
/// GET /api/submissions (auth required)
#[utoipa::path(
    get,
    path = "/api/submissions",
    responses(
        (status = 200, description = "List of submissions", body = Vec<Submission>),
        (status = 401, description = "Missing authentication token"),
        (status = 403, description = "Invalid or expired token")
    ),
    security(("bearer_auth" = [])),
    tag = "submissions"
)]
pub async fn list_submissions_handler(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<Submission>>, ApiError> {
    let submissions = state.submissions_repo.find_all().await?;

    tracing::debug!("Retrieved {} submissions", submissions.len());
    Ok(Json(submissions))
}

/// List submissions for a company code
/// GET /api/submissions/company/:companyCode (auth required)
pub async fn submissions_by_company_handler(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(company_code): Path<String>,
) -> Result<Json<Vec<Submission>>, ApiError> {
    let submissions = state
        .submissions_repo
        .find_by_company_code(&company_code)
        .await?;

    Ok(Json(submissions))
}

/// List the unique company codes seen across submissions
/// GET /api/submissions/company-codes (auth required)
pub async fn company_codes_handler(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<Vec<String>>, ApiError> {
    let codes = state.submissions_repo.find_company_codes().await?;

    Ok(Json(codes))
}

/// Export submissions as a CSV attachment
/// GET /api/submissions/export?companyCode= (auth required)
///
/// Without the query parameter every submission is exported; with it,
/// only exact company-code matches (case-sensitive).
pub async fn export_submissions_handler(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(params): Query<ExportParams>,
) -> Result<impl IntoResponse, ApiError> {
    let (submissions, filename) = match params.company_code.as_deref() {
        Some(code) => (
            state.submissions_repo.find_by_company_code(code).await?,
            format!("submissions_{}.csv", code),
        ),
        None => (
            state.submissions_repo.find_all().await?,
            "submissions.csv".to_string(),
        ),
    };

    tracing::info!("Exporting {} submissions to {}", submissions.len(), filename);

    let csv = submissions_to_csv(&submissions);
    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        ),
    ];

    Ok((headers, csv))
}
