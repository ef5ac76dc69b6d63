#![allow(dead_code)]
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

pub const API_KEY: &str = "0123456789abcdef0123456789abcdef";

/// Scriptable state of the fake Radarr instance.
pub struct FakeRadarrState {
    pub api_key: String,
    pub instance_name: String,
    /// Status polls answered with 503 before the instance reports itself.
    pub warmup_polls: u32,
    pub notifications: Vec<Value>,
    /// Fixed answer for POST /notification; `None` accepts and stores the entry.
    pub post_response: Option<(StatusCode, Value)>,
    pub status_calls: u32,
    pub post_calls: u32,
    pub probe_queries: Vec<HashMap<String, String>>,
    pub posted: Vec<Value>,
}

impl Default for FakeRadarrState {
    fn default() -> Self {
        Self {
            api_key: API_KEY.to_string(),
            instance_name: "Radarr".to_string(),
            warmup_polls: 0,
            notifications: Vec::new(),
            post_response: None,
            status_calls: 0,
            post_calls: 0,
            probe_queries: Vec::new(),
            posted: Vec::new(),
        }
    }
}

type Shared = Arc<Mutex<FakeRadarrState>>;

pub struct FakeRadarr {
    addr: SocketAddr,
    state: Shared,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl FakeRadarr {
    pub async fn start(state: FakeRadarrState) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let state = Arc::new(Mutex::new(state));
        let app = router(state.clone());

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Self {
            addr,
            state,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn with_state<R>(&self, f: impl FnOnce(&mut FakeRadarrState) -> R) -> R {
        f(&mut self.state.lock().unwrap())
    }

    pub fn status_calls(&self) -> u32 {
        self.with_state(|s| s.status_calls)
    }

    pub fn post_calls(&self) -> u32 {
        self.with_state(|s| s.post_calls)
    }

    pub fn posted(&self) -> Vec<Value> {
        self.with_state(|s| s.posted.clone())
    }

    pub fn probe_queries(&self) -> Vec<HashMap<String, String>> {
        self.with_state(|s| s.probe_queries.clone())
    }
}

impl Drop for FakeRadarr {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

fn router(state: Shared) -> Router {
    Router::new()
        .route("/api/{version}/system/status", get(system_status))
        .route("/api/v3/notification", get(list_notifications).post(create_notification))
        .route("/api/v3/filesystem", get(filesystem))
        .with_state(state)
}

fn unauthorized() -> (StatusCode, Json<Value>) {
    (StatusCode::UNAUTHORIZED, Json(json!({ "error": "Unauthorized" })))
}

fn header_key_matches(state: &FakeRadarrState, headers: &HeaderMap) -> bool {
    headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|key| key == state.api_key)
}

async fn system_status(
    State(state): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().unwrap();
    state.status_calls += 1;

    if query.get("apikey") != Some(&state.api_key) {
        return unauthorized();
    }

    if state.warmup_polls > 0 {
        state.warmup_polls -= 1;
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "message": "starting" })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "appName": "Radarr",
            "instanceName": state.instance_name,
            "version": "5.14.0.9383",
            "urlBase": ""
        })),
    )
}

async fn list_notifications(
    State(state): State<Shared>,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let state = state.lock().unwrap();
    if !header_key_matches(&state, &headers) {
        return unauthorized();
    }
    (StatusCode::OK, Json(Value::Array(state.notifications.clone())))
}

async fn create_notification(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().unwrap();
    if !header_key_matches(&state, &headers) {
        return unauthorized();
    }

    state.post_calls += 1;
    state.posted.push(body.clone());

    if let Some((status, response)) = state.post_response.clone() {
        return (status, Json(response));
    }

    let id = state.notifications.len() as i64 + 1;
    let mut stored = body;
    stored["id"] = json!(id);
    state.notifications.push(stored.clone());
    (StatusCode::CREATED, Json(stored))
}

async fn filesystem(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    let mut state = state.lock().unwrap();
    if !header_key_matches(&state, &headers) {
        return unauthorized();
    }
    state.probe_queries.push(query);
    (
        StatusCode::OK,
        Json(json!({ "parent": "/config/scripts/", "directories": [], "files": [] })),
    )
}
