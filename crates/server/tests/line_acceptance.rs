//! HTTP-level acceptance tests for the `/lines` resource.
//! Every test starts its own server with a private store.
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use configs::{AppConfig, DatabaseConfig};
use reqwest::StatusCode as HttpStatusCode;
use serde_json::{json, Value};
use service::line::{repo::memory::InMemoryLineRepository, LineRepository, LineService};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::{routes, startup, state::ServerState};

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

struct Created {
    id: i64,
    body: Value,
}

async fn serve(app: Router) -> anyhow::Result<TestApp> {
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, client: reqwest::Client::new() })
}

async fn start_server() -> anyhow::Result<TestApp> {
    let repo: Arc<dyn LineRepository> = Arc::new(InMemoryLineRepository::new());
    let state = ServerState::new(LineService::new(repo));
    serve(routes::build_router(state, CorsLayer::very_permissive())).await
}

async fn start_sqlite_server() -> anyhow::Result<TestApp> {
    let cfg = AppConfig {
        database: DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() },
        ..Default::default()
    };
    serve(startup::build_app(&cfg).await?).await
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /lines and pull the id out of the Location header (`/lines/{id}`).
    async fn create_line(&self, name: &str, color: &str) -> anyhow::Result<Created> {
        let res = self.client.post(self.url("/lines"))
            .json(&json!({"name": name, "color": color}))
            .send().await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
        let location = res.headers()
            .get("location")
            .expect("Location header")
            .to_str()?
            .to_string();
        assert!(!location.trim().is_empty());
        let id: i64 = location.split('/').nth(2).expect("id segment").parse()?;
        let body = res.json::<Value>().await?;
        Ok(Created { id, body })
    }

    async fn get_line(&self, id: i64) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.get(self.url(&format!("/lines/{id}"))).send().await?)
    }
}

#[tokio::test]
async fn create_line() -> anyhow::Result<()> {
    let app = start_server().await?;
    let created = app.create_line("신분당선", "bg-red-600").await?;
    assert!(created.id > 0);
    assert_eq!(created.body["name"], "신분당선");
    assert_eq!(created.body["color"], "bg-red-600");
    assert_eq!(created.body["id"], created.id);
    Ok(())
}

#[tokio::test]
async fn get_lines() -> anyhow::Result<()> {
    let app = start_server().await?;
    let first = app.create_line("2호선", "bg-red-600").await?;
    let second = app.create_line("3호선", "bg-red-600").await?;

    let res = app.client.get(app.url("/lines")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let lines = res.json::<Vec<Value>>().await?;
    let ids: Vec<i64> = lines.iter().filter_map(|l| l["id"].as_i64()).collect();
    assert!(ids.contains(&first.id));
    assert!(ids.contains(&second.id));
    Ok(())
}

#[tokio::test]
async fn show_line() -> anyhow::Result<()> {
    let app = start_server().await?;
    let created = app.create_line("4호선", "bg-blue-600").await?;

    let res = app.get_line(created.id).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["name"], "4호선");
    assert_eq!(body["color"], "bg-blue-600");
    Ok(())
}

#[tokio::test]
async fn update_line() -> anyhow::Result<()> {
    let app = start_server().await?;
    let created = app.create_line("5호선", "bg-blue-600").await?;

    let res = app.client.put(app.url(&format!("/lines/{}", created.id)))
        .json(&json!({"name": "6호선", "color": "bg-blue-600"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let body = app.get_line(created.id).await?.json::<Value>().await?;
    assert_eq!(body["name"], "6호선");
    assert_eq!(body["color"], "bg-blue-600");
    Ok(())
}

#[tokio::test]
async fn delete_line() -> anyhow::Result<()> {
    let app = start_server().await?;
    let created = app.create_line("7호선", "bg-yellow-600").await?;

    let res = app.client.delete(app.url(&format!("/lines/{}", created.id))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);

    // gone afterwards, and a second delete is reported as missing
    assert_eq!(app.get_line(created.id).await?.status(), HttpStatusCode::NOT_FOUND);
    let res = app.client.delete(app.url(&format!("/lines/{}", created.id))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() -> anyhow::Result<()> {
    let app = start_server().await?;
    let first = app.create_line("8호선", "bg-pink-600").await?;
    app.client.delete(app.url(&format!("/lines/{}", first.id))).send().await?;
    let second = app.create_line("9호선", "bg-gold-600").await?;
    assert!(second.id > first.id);
    Ok(())
}

#[tokio::test]
async fn blank_color_is_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app.client.post(app.url("/lines"))
        .json(&json!({"name": "신분당선", "color": ""}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Validation Error");
    Ok(())
}

#[tokio::test]
async fn sqlite_backed_scenario() -> anyhow::Result<()> {
    let app = start_sqlite_server().await?;
    let created = app.create_line("신분당선", "bg-red-600").await?;
    assert_eq!(created.body["name"], "신분당선");

    let lines = app.client.get(app.url("/lines")).send().await?.json::<Vec<Value>>().await?;
    assert!(lines.iter().any(|l| l["id"].as_i64() == Some(created.id)));

    let res = app.client.put(app.url(&format!("/lines/{}", created.id)))
        .json(&json!({"name": "신분당선 연장", "color": "bg-red-700"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = app.get_line(created.id).await?.json::<Value>().await?;
    assert_eq!(body["name"], "신분당선 연장");
    assert_eq!(body["color"], "bg-red-700");

    let res = app.client.delete(app.url(&format!("/lines/{}", created.id))).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    assert_eq!(app.get_line(created.id).await?.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn health_metrics_and_docs() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = app.client.get(app.url("/health")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<Value>().await?["status"], "ok");

    app.create_line("경의중앙선", "bg-teal-600").await?;
    common::metrics::init();
    let metrics = app.client.get(app.url("/metrics")).send().await?.text().await?;
    assert!(metrics.contains("subway_lines_created_total"));

    let doc = app.client.get(app.url("/api-docs/openapi.json")).send().await?.json::<Value>().await?;
    assert!(doc["paths"]["/lines/{id}"].is_object());
    Ok(())
}
