use std::net::SocketAddr;

use migration::MigratorTrait;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::{routes, ServerState};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let db = models::db::connect_in_memory().await?;
    migration::Migrator::up(&db, None).await?;
    let app = routes::build_router(ServerState::new(db), CorsLayer::very_permissive());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });
    Ok(TestApp { base_url: format!("http://{}:{}", addr.ip(), addr.port()) })
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(res.json::<Value>().await?, json!({"status": "ok"}));
    Ok(())
}

#[tokio::test]
async fn e2e_nested_graph_and_cascade() -> anyhow::Result<()> {
    let app = start_server().await?;
    let client = reqwest::Client::new();

    let course = json!({
        "id": 10,
        "name": "Systems",
        "modules": [
            {"id": 100, "name": "Memory", "assignments": [
                {"id": 1000, "name": "Allocator", "grade": 88, "dueDate": "2024-09-01T12:00:00"},
                {"id": 1001, "name": "Paging", "grade": 91, "dueDate": "2024-09-08T12:00:00"}
            ]},
            {"id": 101, "name": "Scheduling"}
        ]
    });
    let res = client.post(format!("{}/courses", app.base_url)).json(&course).send().await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert_eq!(res.headers().get("location").and_then(|v| v.to_str().ok()), Some("/courses/10"));

    let assignments: Value = client.get(format!("{}/modules/100/assignments", app.base_url)).send().await?.json().await?;
    assert_eq!(assignments.as_array().map(Vec::len), Some(2));

    // A failing child rolls back the whole graph
    let broken = json!({"id": 11, "name": "Broken", "modules": [{"id": 100, "name": "dup"}]});
    let res = client.post(format!("{}/courses", app.base_url)).json(&broken).send().await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let res = client.get(format!("{}/courses/11", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.delete(format!("{}/courses/10", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let modules: Value = client.get(format!("{}/modules", app.base_url)).send().await?.json().await?;
    let assignments: Value = client.get(format!("{}/assignments", app.base_url)).send().await?.json().await?;
    assert_eq!(modules, json!([]));
    assert_eq!(assignments, json!([]));
    Ok(())
}

#[tokio::test]
async fn e2e_shutdown_signal_stops_the_server() -> anyhow::Result<()> {
    let db = models::db::connect_in_memory().await?;
    let app = routes::build_router(ServerState::new(db), CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let base_url = format!("http://{}", listener.local_addr()?);

    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let handle = tokio::spawn(server::startup::serve_until(listener, app, async move {
        let _ = stop_rx.await;
    }));

    assert_eq!(reqwest::get(format!("{base_url}/health")).await?.status(), StatusCode::OK);
    let _ = stop_tx.send(());
    let finished = tokio::time::timeout(std::time::Duration::from_secs(5), handle).await??;
    assert!(finished.is_ok());
    assert!(reqwest::get(format!("{base_url}/health")).await.is_err());
    Ok(())
}
