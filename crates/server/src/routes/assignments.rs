use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use models::assignment;
use service::lms::domain::NewAssignment;

use crate::errors::ApiError;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/assignments", tag = "assignments",
    responses((status = 200, description = "All assignments ordered by id", body = [crate::openapi::AssignmentDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<assignment::Model>>, ApiError> {
    Ok(Json(state.lms.assignments.list().await?))
}

#[utoipa::path(
    get, path = "/assignments/{id}", tag = "assignments",
    params(("id" = i32, Path, description = "Assignment id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::AssignmentDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<assignment::Model>, ApiError> {
    Ok(Json(state.lms.assignments.get(id).await?))
}

#[utoipa::path(
    post, path = "/assignments", tag = "assignments",
    request_body = crate::openapi::AssignmentDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::AssignmentDoc),
        (status = 400, description = "Validation Error", body = crate::openapi::ProblemDoc),
        (status = 404, description = "Module not found", body = crate::openapi::ProblemDoc),
        (status = 409, description = "Duplicate id", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewAssignment>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.lms.assignments.create(input).await?;
    let location = format!("/assignments/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    put, path = "/assignments/{id}", tag = "assignments",
    params(("id" = i32, Path, description = "Assignment id")),
    request_body = crate::openapi::AssignmentDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Id mismatch or invalid module reference", body = crate::openapi::ProblemDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc),
        (status = 500, description = "Concurrency Conflict", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(body): Json<assignment::Model>,
) -> Result<StatusCode, ApiError> {
    state.lms.assignments.update(id, body).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/assignments/{id}", tag = "assignments",
    params(("id" = i32, Path, description = "Assignment id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    state.lms.assignments.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
