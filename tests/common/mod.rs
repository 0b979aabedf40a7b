#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use chrono::Utc;
use reqwest::Client;
use serde_json::{json, Value};
use uuid::Uuid;

use formpost::config::Config;
use formpost::models::Submission;
use formpost::store::SubmissionStore;

/// Keeps submissions in memory instead of Postgres.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Submission>>,
}

impl MemoryStore {
    pub fn payloads(&self) -> Vec<Value> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .map(|s| s.payload.clone())
            .collect()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn insert(&self, payload: &Value) -> Result<Submission, String> {
        let submission = Submission {
            id: Uuid::now_v7(),
            payload: payload.clone(),
            created_at: Utc::now(),
        };
        self.rows.lock().unwrap().push(submission.clone());
        Ok(submission)
    }
}

/// A store whose writes always fail.
pub struct FailingStore(pub &'static str);

#[async_trait]
impl SubmissionStore for FailingStore {
    async fn insert(&self, _payload: &Value) -> Result<Submission, String> {
        Err(self.0.to_string())
    }
}

/// A running test server instance.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// POST a JSON value to `/submit`, return (body, status).
    pub async fn submit_json(&self, data: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .json(data)
            .send()
            .await
            .expect("submit json failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a raw body to `/submit`, return (body, status).
    pub async fn submit_raw(&self, content_type: &str, body: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .header("content-type", content_type)
            .body(body.to_string())
            .send()
            .await
            .expect("submit raw failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn get_text(&self, path: &str) -> (String, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        (resp.text().await.unwrap_or_default(), status)
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: None,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        data_file: temp_path("missing.json"),
        static_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
    }
}

/// A unique path in the system temp directory.
pub fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("formpost_test_{}_{name}", Uuid::now_v7().simple()))
}

pub async fn spawn_app(store: Option<Arc<dyn SubmissionStore>>) -> TestApp {
    spawn_app_with(test_config(), store).await
}

pub async fn spawn_app_with(config: Config, store: Option<Arc<dyn SubmissionStore>>) -> TestApp {
    let app = formpost::build_app(config, store);
    let addr = serve(app).await;

    let client = Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();

    TestApp { addr, client }
}

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    addr
}

/// A request as seen by a stub server.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub content_type: Option<String>,
    pub body: String,
}

/// Canned `/submit` endpoint that records every request it receives.
pub struct Stub {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
    pub delay: Option<Duration>,
    pub requests: Mutex<Vec<Recorded>>,
}

impl Stub {
    pub fn json(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.to_string(),
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn raw(status: StatusCode, content_type: &'static str, body: &str) -> Self {
        Self {
            status,
            content_type,
            body: body.to_string(),
            delay: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }
}

async fn stub_submit(State(stub): State<Arc<Stub>>, headers: HeaderMap, body: String) -> Response {
    stub.requests.lock().unwrap().push(Recorded {
        content_type: headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string()),
        body,
    });

    if let Some(delay) = stub.delay {
        tokio::time::sleep(delay).await;
    }

    (
        stub.status,
        [("content-type", stub.content_type)],
        stub.body.clone(),
    )
        .into_response()
}

/// Serve `stub` on a random port, return its base URL.
pub async fn spawn_stub(stub: Arc<Stub>) -> String {
    let app = Router::new()
        .route("/submit", post(stub_submit))
        .with_state(stub);
    format!("http://{}", serve(app).await)
}

/// Base URL of a port nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
