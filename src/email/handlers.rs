// HTTP handler for the PDF-email relay

use axum::{extract::State, Json};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde_json::json;

use crate::email::models::SendPdfEmailRequest;
use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::AppState;

/// Send the assessment report to a respondent by email
/// POST /api/send-pdf-email
///
/// Accepts a base64-encoded PDF plus recipient metadata; delivery
/// failure at the provider maps to 500, everything else about the
/// request shape to 400.
pub async fn send_pdf_email_handler(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SendPdfEmailRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let pdf = BASE64
        .decode(&request.pdf_base64)
        .map_err(|_| ApiError::BadRequest {
            message: "pdfBase64 is not valid base64".to_string(),
        })?;

    tracing::debug!(
        "Relaying {}-byte PDF report to {}",
        pdf.len(),
        request.user_info.email
    );

    state
        .email_service
        .send_report(
            &request.user_info.email,
            &request.user_info.name,
            pdf,
            &request.core_values,
        )
        .await?;

    Ok(Json(json!({ "success": true })))
}
