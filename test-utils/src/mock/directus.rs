//! Mock of the Directus `GET /items/{collection}` endpoint.
//!
//! Supports the subset of Directus behaviour the directory relies on: equality filters
//! written as `filter[field][_eq]=value`, `limit`, bearer-token authentication, the
//! `{ "data": [...] }` success envelope and the `{ "errors": [{ "message" }] }` error
//! envelope.

use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::{Path, Query, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::task::JoinHandle;

use crate::error::TestError;

/// A request received by the mock, kept for assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub collection: String,
    pub params: Vec<(String, String)>,
    pub authorization: Option<String>,
}

impl RecordedRequest {
    /// Value of the first query parameter named `name`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Seeded data and behaviour of the mock.
pub struct MockState {
    collections: HashMap<String, Vec<Value>>,
    failures: HashMap<String, (u16, String)>,
    token: Option<String>,
    delay: Option<Duration>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockState {
    pub fn new(
        collections: HashMap<String, Vec<Value>>,
        failures: HashMap<String, (u16, String)>,
        token: Option<String>,
        delay: Option<Duration>,
    ) -> Self {
        Self {
            collections,
            failures,
            token,
            delay,
            requests: Mutex::new(Vec::new()),
        }
    }
}

/// Running mock server bound to an ephemeral localhost port.
pub struct MockDirectus {
    addr: SocketAddr,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockDirectus {
    /// Binds a listener on `127.0.0.1:0` and serves the mock in a background task.
    pub async fn start(state: MockState) -> Result<Self, TestError> {
        let state = Arc::new(state);
        let router = Router::new()
            .route("/items/{collection}", get(read_items))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });

        Ok(Self {
            addr,
            state,
            handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn token(&self) -> Option<String> {
        self.state.token.clone()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state
            .requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl Drop for MockDirectus {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn errors(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "errors": [{ "message": message }] }))).into_response()
}

/// Compares a record field with a filter value the way Directus coerces query strings.
fn field_matches(record: &Value, field: &str, expected: &str) -> bool {
    match record.get(field) {
        Some(Value::String(s)) => s == expected,
        Some(Value::Number(n)) => n.to_string() == expected,
        Some(Value::Bool(b)) => b.to_string() == expected,
        Some(Value::Null) | None => expected == "null",
        Some(_) => false,
    }
}

async fn read_items(
    State(state): State<Arc<MockState>>,
    Path(collection): Path<String>,
    Query(params): Query<Vec<(String, String)>>,
    headers: HeaderMap,
) -> Response {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    if let Ok(mut requests) = state.requests.lock() {
        requests.push(RecordedRequest {
            collection: collection.clone(),
            params: params.clone(),
            authorization: authorization.clone(),
        });
    }

    if let Some(delay) = state.delay {
        tokio::time::sleep(delay).await;
    }

    if let Some(token) = &state.token {
        if authorization.as_deref() != Some(format!("Bearer {}", token).as_str()) {
            return errors(StatusCode::UNAUTHORIZED, "Invalid user credentials.");
        }
    }

    if let Some((status, message)) = state.failures.get(&collection) {
        let status = StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        return errors(status, message);
    }

    let Some(items) = state.collections.get(&collection) else {
        return errors(
            StatusCode::FORBIDDEN,
            "You don't have permission to access this.",
        );
    };

    let filters: Vec<(&str, &str)> = params
        .iter()
        .filter_map(|(key, value)| {
            key.strip_prefix("filter[")
                .and_then(|rest| rest.strip_suffix("][_eq]"))
                .map(|field| (field, value.as_str()))
        })
        .collect();

    let limit = params
        .iter()
        .find(|(key, _)| key == "limit")
        .and_then(|(_, value)| value.parse::<i64>().ok())
        .filter(|limit| *limit >= 0)
        .map(|limit| limit as usize);

    let data: Vec<Value> = items
        .iter()
        .filter(|record| {
            filters
                .iter()
                .all(|(field, expected)| field_matches(record, field, expected))
        })
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect();

    (StatusCode::OK, Json(json!({ "data": data }))).into_response()
}
