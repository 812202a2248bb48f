use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use models::{assignment, module};
use service::lms::domain::NewModule;

use crate::errors::ApiError;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/modules", tag = "modules",
    responses((status = 200, description = "All modules ordered by id", body = [crate::openapi::ModuleDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<module::Model>>, ApiError> {
    Ok(Json(state.lms.modules.list().await?))
}

#[utoipa::path(
    get, path = "/modules/{id}", tag = "modules",
    params(("id" = i32, Path, description = "Module id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ModuleDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<module::Model>, ApiError> {
    Ok(Json(state.lms.modules.get(id).await?))
}

#[utoipa::path(
    post, path = "/modules", tag = "modules",
    request_body = crate::openapi::NewModuleDoc,
    responses(
        (status = 201, description = "Created, with any embedded assignments"),
        (status = 400, description = "Validation Error", body = crate::openapi::ProblemDoc),
        (status = 404, description = "Course not found", body = crate::openapi::ProblemDoc),
        (status = 409, description = "Duplicate id", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewModule>,
) -> Result<impl IntoResponse, ApiError> {
    let created = state.lms.modules.create(input).await?;
    let location = format!("/modules/{}", created.module.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    put, path = "/modules/{id}", tag = "modules",
    params(("id" = i32, Path, description = "Module id")),
    request_body = crate::openapi::ModuleDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Id mismatch or invalid course reference", body = crate::openapi::ProblemDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc),
        (status = 500, description = "Concurrency Conflict", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(body): Json<module::Model>,
) -> Result<StatusCode, ApiError> {
    state.lms.modules.update(id, body).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/modules/{id}", tag = "modules",
    params(("id" = i32, Path, description = "Module id")),
    responses(
        (status = 204, description = "Deleted with its assignments"),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    state.lms.modules.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/modules/{id}/assignments", tag = "modules",
    params(("id" = i32, Path, description = "Module id")),
    responses((status = 200, description = "Assignments of the module; empty for an unknown module", body = [crate::openapi::AssignmentDoc]))
)]
pub async fn list_assignments(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<assignment::Model>>, ApiError> {
    Ok(Json(state.lms.modules.list_assignments_in_module(id).await?))
}
