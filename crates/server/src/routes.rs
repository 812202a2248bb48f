use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::openapi::ApiDoc;
use crate::state::ServerState;

pub mod assignments;
pub mod courses;
pub mod modules;

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is alive", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let courses = Router::new()
        .route("/courses", get(courses::list).post(courses::create))
        .route("/courses/:id", get(courses::get).put(courses::update).delete(courses::delete))
        .route("/courses/:id/modules", get(courses::list_modules));

    let modules = Router::new()
        .route("/modules", get(modules::list).post(modules::create))
        .route("/modules/:id", get(modules::get).put(modules::update).delete(modules::delete))
        .route("/modules/:id/assignments", get(modules::list_assignments));

    let assignments = Router::new()
        .route("/assignments", get(assignments::list).post(assignments::create))
        .route(
            "/assignments/:id",
            get(assignments::get).put(assignments::update).delete(assignments::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(courses)
        .merge(modules)
        .merge(assignments)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
