use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::Deserialize;
use service::maintenance::domain::{MaintenanceRequest, MaintenanceRequestDetails, NewMaintenanceRequest};
use tracing::info;

use crate::{errors::ApiError, routes::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LookupQuery {
    /// Email the request was filed under
    pub email: String,
}

#[utoipa::path(
    get, path = "/api/v1/maintenance-requests", tag = "maintenance",
    responses(
        (status = 200, description = "All maintenance requests", body = [crate::openapi::MaintenanceRequestDoc])
    )
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<MaintenanceRequest>>, ApiError> {
    let all = state.maintenance.get_all().await?;
    info!(count = all.len(), "list maintenance requests");
    Ok(Json(all))
}

#[utoipa::path(
    post, path = "/api/v1/maintenance-requests", tag = "maintenance",
    request_body = crate::openapi::NewMaintenanceRequestDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::MaintenanceRequestDoc),
        (status = 409, description = "Email already has a request", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewMaintenanceRequest>,
) -> Result<(StatusCode, Json<MaintenanceRequest>), ApiError> {
    let created = state.maintenance.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/api/v1/maintenance-requests/{id}", tag = "maintenance",
    params(("id" = i64, Path, description = "Maintenance request id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::MaintenanceRequestDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<Json<MaintenanceRequest>, ApiError> {
    Ok(Json(state.maintenance.get_by_id(id).await?))
}

#[utoipa::path(
    get, path = "/api/v1/maintenance-requests/lookup", tag = "maintenance",
    params(LookupQuery),
    responses(
        (status = 200, description = "OK", body = crate::openapi::MaintenanceRequestDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn lookup(State(state): State<ServerState>, Query(q): Query<LookupQuery>) -> Result<Json<MaintenanceRequest>, ApiError> {
    Ok(Json(state.maintenance.get_by_email(&q.email).await?))
}

#[utoipa::path(
    put, path = "/api/v1/maintenance-requests/{id}", tag = "maintenance",
    params(("id" = i64, Path, description = "Maintenance request id")),
    request_body = crate::openapi::MaintenanceRequestDetailsDoc,
    responses(
        (status = 202, description = "Updated", body = crate::openapi::MaintenanceRequestDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse),
        (status = 409, description = "Email belongs to another request", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(details): Json<MaintenanceRequestDetails>,
) -> Result<(StatusCode, Json<MaintenanceRequest>), ApiError> {
    let updated = state.maintenance.update(id, details).await?;
    Ok((StatusCode::ACCEPTED, Json(updated)))
}

#[utoipa::path(
    delete, path = "/api/v1/maintenance-requests/{id}", tag = "maintenance",
    params(("id" = i64, Path, description = "Maintenance request id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> Result<StatusCode, ApiError> {
    state.maintenance.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
