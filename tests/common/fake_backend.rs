//! In-process stand-in for the platform backend
//!
//! Serves every collection the console manages from memory. Ids and
//! `createdAt` are assigned on create and preserved on update; an update
//! overlays the fields it carries. Everything except login needs
//! `Bearer fake-token`.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use serde_json::{json, Value};

pub const FAKE_TOKEN: &str = "fake-token";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "secret";

const LOGIN_PATH: &str = "/api/admin-users/login";

const COLLECTIONS: [&str; 7] = [
    "/api/developers",
    "/admin/project-cores",
    "/admin/leads",
    "/admin/invoices",
    "/api/admin-users",
    "/admin/countries",
    "/admin/amenities",
];

#[derive(Default)]
pub struct Store {
    collections: HashMap<&'static str, Vec<Value>>,
    next_id: i64,
    /// Every request seen, as `METHOD /path`
    pub requests: Vec<String>,
}

impl Store {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Clone)]
pub struct FakeBackend {
    pub base_url: String,
    store: Arc<Mutex<Store>>,
}

impl FakeBackend {
    /// Bind to an ephemeral port and serve in the background
    pub async fn start() -> Self {
        let store = Arc::new(Mutex::new(Store::default()));
        let app = Router::new().fallback(handle).with_state(store.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind fake backend");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("fake backend crashed");
        });

        Self {
            base_url: format!("http://{}", addr),
            store,
        }
    }

    /// Insert a record directly, keeping its id and createdAt
    pub fn seed(&self, collection: &str, record: Value) {
        let mut store = self.store.lock().unwrap();
        let id = record["id"].as_i64().unwrap_or(0);
        store.next_id = store.next_id.max(id);
        let key = collection_key(collection).expect("known collection");
        store.collections.entry(key).or_default().push(record);
    }

    pub fn records(&self, collection: &str) -> Vec<Value> {
        let store = self.store.lock().unwrap();
        let key = collection_key(collection).expect("known collection");
        store.collections.get(key).cloned().unwrap_or_default()
    }

    pub fn requests(&self) -> Vec<String> {
        self.store.lock().unwrap().requests.clone()
    }
}

fn collection_key(path: &str) -> Option<&'static str> {
    COLLECTIONS.iter().copied().find(|c| *c == path)
}

/// Split `/admin/leads/4` into (`/admin/leads`, Some(4))
fn resolve(path: &str) -> Option<(&'static str, Option<i64>)> {
    if let Some(key) = collection_key(path) {
        return Some((key, None));
    }
    let (head, tail) = path.rsplit_once('/')?;
    let key = collection_key(head)?;
    tail.parse().ok().map(|id| (key, Some(id)))
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

async fn handle(
    State(store): State<Arc<Mutex<Store>>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let path = uri.path().to_string();
    let mut store = store.lock().unwrap();
    store.requests.push(format!("{} {}", method, path));

    if method == Method::POST && path == LOGIN_PATH {
        let credentials: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
        if credentials["email"] == ADMIN_EMAIL && credentials["password"] == ADMIN_PASSWORD {
            return Json(json!({ "token": FAKE_TOKEN })).into_response();
        }
        return error(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }

    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(|v| v == format!("Bearer {}", FAKE_TOKEN))
        .unwrap_or(false);
    if !authorized {
        return error(StatusCode::UNAUTHORIZED, "Unauthorized");
    }

    let Some((key, id)) = resolve(&path) else {
        return error(StatusCode::NOT_FOUND, "Not found");
    };

    match id {
        None if method == Method::GET => {
            let records = store.collections.get(key).cloned().unwrap_or_default();
            Json(Value::Array(records)).into_response()
        }
        None if method == Method::POST => {
            let Ok(Value::Object(mut record)) = serde_json::from_str::<Value>(&body) else {
                return error(StatusCode::BAD_REQUEST, "Expected a JSON object");
            };
            let id = store.allocate_id();
            record.insert("id".to_string(), json!(id));
            record.insert(
                "createdAt".to_string(),
                json!(chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string()),
            );
            let record = Value::Object(record);
            store.collections.entry(key).or_default().push(record.clone());
            (StatusCode::CREATED, Json(record)).into_response()
        }
        Some(id) if method == Method::PUT => {
            let Ok(Value::Object(mut update)) = serde_json::from_str::<Value>(&body) else {
                return error(StatusCode::BAD_REQUEST, "Expected a JSON object");
            };
            let records = store.collections.entry(key).or_default();
            let Some(existing) = records.iter_mut().find(|r| r["id"] == json!(id)) else {
                return error(StatusCode::NOT_FOUND, "Record not found");
            };
            // Fields missing from the body keep their stored value.
            let created_at = existing["createdAt"].clone();
            if let Value::Object(fields) = &mut *existing {
                fields.append(&mut update);
                fields.insert("id".to_string(), json!(id));
                fields.insert("createdAt".to_string(), created_at);
            }
            Json(existing.clone()).into_response()
        }
        Some(id) if method == Method::DELETE => {
            let records = store.collections.entry(key).or_default();
            let before = records.len();
            records.retain(|r| r["id"] != json!(id));
            if records.len() == before {
                return error(StatusCode::NOT_FOUND, "Record not found");
            }
            StatusCode::NO_CONTENT.into_response()
        }
        _ => error(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed"),
    }
}
