// HTTP handlers for the leadership value catalog

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::auth::middleware::AuthenticatedUser;
use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::values::models::{LeadershipValue, LeadershipValueRequest};
use crate::AppState;

/// Create a new leadership value
/// POST /api/leadership-values (auth required)
#[utoipa::path(
    post,
    path = "/api/leadership-values",
    request_body = LeadershipValueRequest,
    responses(
        (status = 201, description = "Leadership value created", body = LeadershipValue),
        (status = 400, description = "Invalid input data"),
        (status = 401, description = "Missing authentication token"),
        (status = 403, description = "Invalid or expired token")
    ),
    security(("bearer_auth" = [])),
    tag = "leadership-values"
)]
pub async fn create_value_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<LeadershipValueRequest>,
) -> Result<(StatusCode, Json<LeadershipValue>), ApiError> {
    tracing::debug!("User {} creating leadership value: {}", user.user_id, request.value);

    let value = state
        .values_repo
        .create(&request.value, &request.description)
        .await?;

    tracing::info!("Created leadership value {}", value.id);
    Ok((StatusCode::CREATED, Json(value)))
}

/// List all leadership values
/// GET /api/leadership-values (public)
#[utoipa::path(
    get,
    path = "/api/leadership-values",
    responses(
        (status = 200, description = "List of leadership values", body = Vec<LeadershipValue>)
    ),
    tag = "leadership-values"
)]
pub async fn list_values_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeadershipValue>>, ApiError> {
    let values = state.values_repo.find_all().await?;

    tracing::debug!("Retrieved {} leadership values", values.len());
    Ok(Json(values))
}

/// Get a leadership value by ID
/// GET /api/leadership-values/:id (auth required)
#[utoipa::path(
    get,
    path = "/api/leadership-values/{id}",
    params(("id" = i32, Path, description = "Leadership value ID")),
    responses(
        (status = 200, description = "Leadership value found", body = LeadershipValue),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Leadership value not found")
    ),
    security(("bearer_auth" = [])),
    tag = "leadership-values"
)]
pub async fn get_value_handler(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<Json<LeadershipValue>, ApiError> {
    let value = state
        .values_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "LeadershipValue".to_string(),
            id: id.to_string(),
        })?;

    Ok(Json(value))
}

/// Replace a leadership value
/// PUT /api/leadership-values/:id (auth required)
#[utoipa::path(
    put,
    path = "/api/leadership-values/{id}",
    params(("id" = i32, Path, description = "Leadership value ID")),
    request_body = LeadershipValueRequest,
    responses(
        (status = 200, description = "Leadership value updated", body = LeadershipValue),
        (status = 400, description = "Invalid input data"),
        (status = 404, description = "Leadership value not found")
    ),
    security(("bearer_auth" = [])),
    tag = "leadership-values"
)]
pub async fn update_value_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<LeadershipValueRequest>,
) -> Result<Json<LeadershipValue>, ApiError> {
    tracing::debug!("User {} updating leadership value {}", user.user_id, id);

    let updated = state
        .values_repo
        .update(id, &request.value, &request.description)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "LeadershipValue".to_string(),
            id: id.to_string(),
        })?;

    tracing::info!("Updated leadership value {}", id);
    Ok(Json(updated))
}

/// Delete a leadership value
/// DELETE /api/leadership-values/:id (auth required)
#[utoipa::path(
    delete,
    path = "/api/leadership-values/{id}",
    params(("id" = i32, Path, description = "Leadership value ID")),
    responses(
        (status = 200, description = "Leadership value deleted"),
        (status = 400, description = "Malformed ID"),
        (status = 404, description = "Leadership value not found")
    ),
    security(("bearer_auth" = [])),
    tag = "leadership-values"
)]
pub async fn delete_value_handler(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, ApiError> {
    tracing::debug!("User {} deleting leadership value {}", user.user_id, id);

    if !state.values_repo.delete(id).await? {
        return Err(ApiError::NotFound {
            resource: "LeadershipValue".to_string(),
            id: id.to_string(),
        });
    }

    tracing::info!("Deleted leadership value {}", id);
    Ok(Json(serde_json::json!({ "message": "Leadership value deleted" })))
}
