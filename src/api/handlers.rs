//! HTTP request handlers

use crate::api::models::{CreateGopherRequest, Gopher, HealthResponse, UpdateGopherRequest};
use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

/// Location of the Swagger UI index
pub const SWAGGER_UI_INDEX: &str = "/swagger-ui/";

/// Turn a body extraction failure into an application error
///
/// Oversized bodies keep their 413; every other rejection is a validation error.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload.map(|Json(body)| body).map_err(|rejection| match rejection {
        JsonRejection::BytesRejection(inner) if inner.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            AppError::PayloadTooLarge(inner.body_text())
        }
        other => AppError::Validation(other.body_text()),
    })
}

/// Create a new gopher
#[utoipa::path(
    post,
    path = "/gophers",
    tag = "Gophers",
    request_body = CreateGopherRequest,
    responses(
        (status = 201, description = "Gopher created", body = Gopher),
        (status = 400, description = "Invalid payload", body = crate::error::ErrorResponse),
        (status = 409, description = "Gopher id already exists", body = crate::error::ErrorResponse),
        (status = 413, description = "Request body too large", body = crate::error::ErrorResponse),
    )
)]
pub async fn create_gopher(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateGopherRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Gopher>), AppError> {
    let request = json_body(payload)?;
    let gopher = state.gophers.create(request).await?;

    Ok((StatusCode::CREATED, Json(gopher)))
}

/// Get all gophers
#[utoipa::path(
    get,
    path = "/gophers",
    tag = "Gophers",
    responses(
        (status = 200, description = "All gophers in insertion order", body = [Gopher]),
    )
)]
pub async fn list_gophers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Gopher>>, AppError> {
    Ok(Json(state.gophers.list().await?))
}

/// Get a gopher by ID
#[utoipa::path(
    get,
    path = "/gophers/{id}",
    tag = "Gophers",
    params(("id" = String, Path, description = "Gopher ID")),
    responses(
        (status = 200, description = "The gopher", body = Gopher),
        (status = 404, description = "Gopher not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn get_gopher(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Gopher>, AppError> {
    Ok(Json(state.gophers.get(&id).await?))
}

/// Update a gopher
#[utoipa::path(
    put,
    path = "/gophers/{id}",
    tag = "Gophers",
    params(("id" = String, Path, description = "Gopher ID")),
    request_body = UpdateGopherRequest,
    responses(
        (status = 200, description = "Gopher updated", body = Gopher),
        (status = 400, description = "Invalid payload", body = crate::error::ErrorResponse),
        (status = 404, description = "Gopher not found", body = crate::error::ErrorResponse),
        (status = 413, description = "Request body too large", body = crate::error::ErrorResponse),
    )
)]
pub async fn update_gopher(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateGopherRequest>, JsonRejection>,
) -> Result<Json<Gopher>, AppError> {
    let request = json_body(payload)?;
    Ok(Json(state.gophers.update(&id, request).await?))
}

/// Delete a gopher
#[utoipa::path(
    delete,
    path = "/gophers/{id}",
    tag = "Gophers",
    params(("id" = String, Path, description = "Gopher ID")),
    responses(
        (status = 204, description = "Gopher deleted"),
        (status = 404, description = "Gopher not found", body = crate::error::ErrorResponse),
    )
)]
pub async fn delete_gopher(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.gophers.delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Probes",
    responses(
        (status = 200, description = "Service is alive", body = HealthResponse),
    )
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// Redirect the root path to the Swagger UI
pub async fn docs_redirect() -> impl IntoResponse {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, SWAGGER_UI_INDEX)],
    )
}
