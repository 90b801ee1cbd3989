#![allow(dead_code)]

//! In-process stand-in for the records backend.
//!
//! Serves the same paths and error bodies as the real server, keeps records
//! in memory, and counts every request so tests can assert on traffic.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::{Json, Router};
use rollcall::client::HttpClient;
use rollcall::rollcall_cache::{CacheConfig, MemoryCache};
use rollcall::rollcall_config::ApiConfig;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const CREATED_AT: &str = "2025-01-06 08:00:00";

#[derive(Default)]
struct Store {
    records: HashMap<String, Vec<Value>>,
    next_id: i64,
    calls: Vec<(String, String)>,
    rejection: Option<(StatusCode, String)>,
    plain_failure: Option<StatusCode>,
}

#[derive(Clone, Default)]
pub struct MockBackend {
    store: Arc<Mutex<Store>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preloads records; ids are taken as given.
    pub fn with_records(self, collection: &str, records: Vec<Value>) -> Self {
        {
            let mut store = self.store.lock().unwrap();
            let max_id = records
                .iter()
                .filter_map(|r| r["id"].as_i64())
                .max()
                .unwrap_or(0);
            store.next_id = store.next_id.max(max_id);
            store.records.insert(collection.to_string(), records);
        }
        self
    }

    /// The next POST fails with `{"error": message}`.
    pub fn reject_next_create(&self, status: StatusCode, message: &str) {
        self.store.lock().unwrap().rejection = Some((status, message.to_string()));
    }

    /// Every request fails with a bare status and no JSON body.
    pub fn fail_plainly(&self, status: StatusCode) {
        self.store.lock().unwrap().plain_failure = Some(status);
    }

    pub fn records(&self, collection: &str) -> Vec<Value> {
        self.store
            .lock()
            .unwrap()
            .records
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of requests with this method whose path starts with `prefix`.
    pub fn calls(&self, method: &str, prefix: &str) -> usize {
        self.store
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|(m, p)| m == method && p.starts_with(prefix))
            .count()
    }

    /// Paths of every POST, in arrival order.
    pub fn posts(&self) -> Vec<String> {
        self.store
            .lock()
            .unwrap()
            .calls
            .iter()
            .filter(|(m, _)| m == "POST")
            .map(|(_, p)| p.clone())
            .collect()
    }

    fn record_call(&self, method: &str, path: String) -> Option<StatusCode> {
        let mut store = self.store.lock().unwrap();
        store.calls.push((method.to_string(), path));
        store.plain_failure
    }

    fn router(self) -> Router {
        Router::new()
            .route("/{collection}", get(list_records).post(create_record))
            .route("/students/{id}", delete(delete_student))
            .with_state(self)
    }
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn list_records(
    State(backend): State<MockBackend>,
    Path(collection): Path<String>,
) -> Response {
    if let Some(status) = backend.record_call("GET", format!("/{}", collection)) {
        return status.into_response();
    }
    Json(Value::Array(backend.records(&collection))).into_response()
}

async fn create_record(
    State(backend): State<MockBackend>,
    Path(collection): Path<String>,
    Json(mut body): Json<Value>,
) -> Response {
    if let Some(status) = backend.record_call("POST", format!("/{}", collection)) {
        return status.into_response();
    }

    let mut store = backend.store.lock().unwrap();
    if let Some((status, message)) = store.rejection.take() {
        return error(status, &message);
    }

    let existing = store.records.get(&collection).cloned().unwrap_or_default();
    let duplicate = |field: &str| existing.iter().any(|r| r[field] == body[field]);
    match collection.as_str() {
        "students" | "teachers" if duplicate("email") => {
            return error(StatusCode::BAD_REQUEST, "Email already exists");
        }
        "courses" if duplicate("course_code") => {
            return error(StatusCode::BAD_REQUEST, "Course code already exists");
        }
        _ => {}
    }

    store.next_id += 1;
    body["id"] = json!(store.next_id);
    body["created_at"] = json!(CREATED_AT);

    let find = |collection: &str, id: &Value| {
        store
            .records
            .get(collection)
            .and_then(|rs| rs.iter().find(|r| &r["id"] == id).cloned())
    };
    match collection.as_str() {
        "courses" => {
            if let Some(teacher) = find("teachers", &body["teacher_id"]) {
                body["teacher"] = json!({"id": teacher["id"], "name": teacher["name"]});
            }
        }
        "assignments" => {
            if let Some(course) = find("courses", &body["course_id"]) {
                body["course"] = json!({"id": course["id"], "name": course["name"]});
            }
        }
        "enrollments" => {
            body["enrollment_date"] = json!(CREATED_AT);
            if let Some(student) = find("students", &body["student_id"]) {
                body["student"] = json!({"id": student["id"], "name": student["name"]});
            }
            if let Some(course) = find("courses", &body["course_id"]) {
                body["course"] = json!({"id": course["id"], "name": course["name"]});
            }
        }
        _ => {}
    }

    store
        .records
        .entry(collection)
        .or_default()
        .push(body.clone());
    (StatusCode::CREATED, Json(body)).into_response()
}

async fn delete_student(State(backend): State<MockBackend>, Path(id): Path<i64>) -> Response {
    if let Some(status) = backend.record_call("DELETE", format!("/students/{}", id)) {
        return status.into_response();
    }

    let mut store = backend.store.lock().unwrap();
    let students = store.records.entry("students".to_string()).or_default();
    let before = students.len();
    students.retain(|s| s["id"].as_i64() != Some(id));
    if students.len() == before {
        return error(StatusCode::NOT_FOUND, "Student not found");
    }
    StatusCode::NO_CONTENT.into_response()
}

/// Serves `backend` on an ephemeral local port and returns its base URL.
pub async fn spawn(backend: MockBackend) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = backend.router();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn client(base_url: &str) -> HttpClient {
    HttpClient::new(&ApiConfig::new(base_url)).unwrap()
}

pub fn cached_client(base_url: &str) -> HttpClient {
    let config = CacheConfig {
        enabled: true,
        ..CacheConfig::default()
    };
    client(base_url).with_cache(MemoryCache::new(&config))
}

/// A base URL nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn student(id: i64, name: &str, grade: i32) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "grade_level": grade,
        "created_at": CREATED_AT,
    })
}

pub fn teacher(id: i64, name: &str, department: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        "department": department,
    })
}

pub fn course(id: i64, name: &str, code: &str, teacher_id: i64) -> Value {
    json!({
        "id": id,
        "name": name,
        "course_code": code,
        "credits": 4,
        "teacher_id": teacher_id,
    })
}
