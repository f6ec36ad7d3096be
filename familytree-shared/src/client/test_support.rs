//! In-process stand-in for the family-tree server used by client tests.

use axum::{
    Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

use super::ApiClient;

/// One request as seen by the stub.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub token: Option<String>,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

/// Canned reply for a method and path.
#[derive(Debug, Clone)]
pub(crate) struct StubRoute {
    method: Method,
    path: String,
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

impl StubRoute {
    pub(crate) fn json(method: &str, path: &str, status: StatusCode, body: &Value) -> Self {
        Self {
            method: method.parse().unwrap_or(Method::GET),
            path: path.to_string(),
            status,
            content_type: "application/json",
            body: body.to_string(),
        }
    }

    pub(crate) fn post(path: &str, status: StatusCode, body: Value) -> Self {
        Self::json("POST", path, status, &body)
    }

    pub(crate) fn get(path: &str, status: StatusCode, body: Value) -> Self {
        Self::json("GET", path, status, &body)
    }

    pub(crate) fn text(method: &str, path: &str, status: StatusCode, body: &str) -> Self {
        Self {
            method: method.parse().unwrap_or(Method::GET),
            path: path.to_string(),
            status,
            content_type: "text/plain",
            body: body.to_string(),
        }
    }
}

#[derive(Clone)]
struct StubState {
    routes: Arc<Mutex<Vec<StubRoute>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

pub(crate) struct StubServer {
    base_url: String,
    state: StubState,
}

impl StubServer {
    /// Bind an ephemeral port and serve `routes` until the test ends.
    pub(crate) async fn start(routes: Vec<StubRoute>) -> Self {
        let state = StubState {
            routes: Arc::new(Mutex::new(routes)),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let app = Router::new().fallback(handle).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub(crate) fn client(&self) -> ApiClient {
        ApiClient::new(&self.base_url).unwrap()
    }

    /// Replace the reply for an existing method and path, or add it.
    pub(crate) fn set_route(&self, route: StubRoute) {
        let mut routes = self.state.routes.lock().unwrap();
        routes.retain(|existing| existing.method != route.method || existing.path != route.path);
        routes.push(route);
    }

    pub(crate) fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }
}

fn header_value(headers: &HeaderMap, name: impl header::AsHeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

async fn handle(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.requests.lock().unwrap().push(RecordedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        token: header_value(&headers, "token"),
        authorization: header_value(&headers, header::AUTHORIZATION),
        content_type: header_value(&headers, header::CONTENT_TYPE),
        body: serde_json::from_slice(&body).ok(),
    });

    let routes = state.routes.lock().unwrap();
    match routes
        .iter()
        .find(|route| route.method == method && route.path == uri.path())
    {
        Some(route) => (
            route.status,
            [(header::CONTENT_TYPE, route.content_type)],
            route.body.clone(),
        )
            .into_response(),
        None => (StatusCode::NOT_FOUND, "not found").into_response(),
    }
}
