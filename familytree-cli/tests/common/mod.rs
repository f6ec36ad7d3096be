//! Stub API server and process helpers for CLI integration tests.

use assert_cmd::cargo::cargo_bin_cmd;
use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use std::{
    path::PathBuf,
    process::Output,
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub token: Option<String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct Route {
    pub method: &'static str,
    pub path: &'static str,
    pub status: StatusCode,
    pub body: String,
}

impl Route {
    pub fn new(method: &'static str, path: &'static str, status: StatusCode, body: &str) -> Self {
        Self {
            method,
            path,
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Clone)]
struct Shared {
    routes: Arc<Vec<Route>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

pub struct StubApi {
    pub base_url: String,
    shared: Shared,
}

impl StubApi {
    pub async fn start(routes: Vec<Route>) -> Self {
        let shared = Shared {
            routes: Arc::new(routes),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let app = Router::new().fallback(handle).with_state(shared.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self {
            base_url: format!("http://{addr}"),
            shared,
        }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.shared.requests.lock().unwrap().clone()
    }
}

async fn handle(
    State(shared): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    shared.requests.lock().unwrap().push(Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        token: headers
            .get("token")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    });

    match shared
        .routes
        .iter()
        .find(|route| route.method == method.as_str() && route.path == uri.path())
    {
        Some(route) => (
            route.status,
            [(header::CONTENT_TYPE, "application/json")],
            route.body.clone(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}

/// Run the `familytree` binary in an isolated directory.
pub async fn run_cli(args: Vec<String>, stdin: Option<String>) -> Output {
    tokio::task::spawn_blocking(move || {
        let workdir = tempfile::tempdir().unwrap();
        let config_home: PathBuf = workdir.path().join("config");
        let mut cmd = cargo_bin_cmd!("familytree");
        cmd.args(&args)
            .current_dir(workdir.path())
            .env("XDG_CONFIG_HOME", &config_home)
            .env("HOME", workdir.path())
            .env_remove("FAMILYTREE_BASE_URL")
            .env_remove("FAMILYTREE_LOG_LEVEL")
            .env_remove("RUST_LOG")
            .timeout(Duration::from_secs(20));
        if let Some(input) = stdin {
            cmd.write_stdin(input);
        }
        cmd.output().unwrap()
    })
    .await
    .unwrap()
}

pub fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}
