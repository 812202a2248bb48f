use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use configs::AppConfig;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address: {e}")))
}

/// Connect, migrate if configured, and assemble the router.
pub async fn build_app(cfg: &AppConfig) -> Result<Router, StartupError> {
    common::env::ensure_database_dir(&cfg.database.url).await?;
    let db = models::db::connect_with_config(&cfg.database).await?;
    models::db::test_connection(&db).await.map_err(|e| StartupError::Any(e.into()))?;

    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Migration(e.to_string()))?;
        info!("database migrations applied");
    }

    Ok(routes::build_router(ServerState::new(db), build_cors()))
}

/// Resolves on Ctrl+C; in-flight requests are drained before `run` returns.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl+C, shutting down"),
        Err(e) => warn!(error = %e, "ctrl_c listener failed; shutting down"),
    }
}

/// Serve `app` until `shutdown` resolves, then drain in-flight requests.
pub async fn serve_until<F>(listener: tokio::net::TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("server drained");
    Ok(())
}

/// Public entry: load configuration, build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = AppConfig::load_or_env()?;
    let app = build_app(&cfg).await?;

    let addr = bind_addr(&cfg)?;
    info!(%addr, "starting lms server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    serve_until(listener, app, shutdown_signal()).await
}
