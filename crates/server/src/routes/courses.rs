use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use models::{course, module};
use service::lms::domain::{CourseWithModules, NewCourse};

use crate::errors::ApiError;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/courses", tag = "courses",
    responses((status = 200, description = "All courses ordered by id", body = [crate::openapi::CourseDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<course::Model>>, ApiError> {
    Ok(Json(state.lms.courses.list().await?))
}

#[utoipa::path(
    get, path = "/courses/{id}", tag = "courses",
    params(("id" = i32, Path, description = "Course id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CourseDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn get(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Json<course::Model>, ApiError> {
    Ok(Json(state.lms.courses.get(id).await?))
}

#[utoipa::path(
    post, path = "/courses", tag = "courses",
    request_body = crate::openapi::NewCourseDoc,
    responses(
        (status = 201, description = "Created, with any embedded modules"),
        (status = 400, description = "Validation Error", body = crate::openapi::ProblemDoc),
        (status = 409, description = "Duplicate id", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<NewCourse>,
) -> Result<impl IntoResponse, ApiError> {
    let created: CourseWithModules = state.lms.courses.create(input).await?;
    let location = format!("/courses/{}", created.course.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    put, path = "/courses/{id}", tag = "courses",
    params(("id" = i32, Path, description = "Course id")),
    request_body = crate::openapi::CourseDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Id mismatch or invalid field", body = crate::openapi::ProblemDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc),
        (status = 500, description = "Concurrency Conflict", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(body): Json<course::Model>,
) -> Result<StatusCode, ApiError> {
    state.lms.courses.update(id, body).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/courses/{id}", tag = "courses",
    params(("id" = i32, Path, description = "Course id")),
    responses(
        (status = 204, description = "Deleted with its modules and assignments"),
        (status = 404, description = "Not Found", body = crate::openapi::ProblemDoc)
    )
)]
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<StatusCode, ApiError> {
    state.lms.courses.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get, path = "/courses/{id}/modules", tag = "courses",
    params(("id" = i32, Path, description = "Course id")),
    responses((status = 200, description = "Modules of the course; empty for an unknown course", body = [crate::openapi::ModuleDoc]))
)]
pub async fn list_modules(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<module::Model>>, ApiError> {
    Ok(Json(state.lms.courses.list_modules(id).await?))
}
