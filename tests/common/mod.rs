#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use rms_client::{ApiClient, ClientConfig};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// What the stub backend saw for one call
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

impl RecordedRequest {
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_query(&self, key: &str) -> bool {
        self.query_value(key).is_some()
    }
}

#[derive(Clone)]
struct StubState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    reply: Arc<Mutex<(StatusCode, String)>>,
}

/// In-process stand-in for the RMS backend: records every request and answers
/// with whatever status/body was scripted last.
pub struct StubBackend {
    pub base_url: String,
    state: StubState,
}

impl StubBackend {
    pub async fn start() -> Self {
        let state = StubState {
            requests: Arc::new(Mutex::new(Vec::new())),
            reply: Arc::new(Mutex::new((
                StatusCode::OK,
                r#"{"data":null,"success":"success"}"#.to_string(),
            ))),
        };

        let app = Router::new().fallback(record).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn reply_json(&self, status: StatusCode, body: Value) {
        *self.state.reply.lock().unwrap() = (status, body.to_string());
    }

    pub fn reply_raw(&self, status: StatusCode, body: &str) {
        *self.state.reply.lock().unwrap() = (status, body.to_string());
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request, got {:?}", requests);
        requests.into_iter().next().unwrap()
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(ClientConfig::new(self.base_url.clone())).unwrap()
    }

    pub fn client_with(&self, config: impl FnOnce(ClientConfig) -> ClientConfig) -> ApiClient {
        ApiClient::new(config(ClientConfig::new(self.base_url.clone()))).unwrap()
    }
}

async fn record(
    State(state): State<StubState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let query = uri
        .query()
        .map(|q| {
            q.split('&')
                .filter(|pair| !pair.is_empty())
                .map(|pair| match pair.split_once('=') {
                    Some((k, v)) => (k.to_string(), v.to_string()),
                    None => (pair.to_string(), String::new()),
                })
                .collect()
        })
        .unwrap_or_default();

    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice(&body).ok()
    };

    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: uri.path().to_string(),
        query,
        authorization,
        body,
    });

    let (status, reply) = state.reply.lock().unwrap().clone();
    (status, [(header::CONTENT_TYPE, "application/json")], reply)
}

pub fn shift_json(id: i64) -> Value {
    serde_json::json!({
        "id": id,
        "date": "2024-01-15T00:00:00Z",
        "start_time": "2024-01-15T08:00:00Z",
        "end_time": "2024-01-15T16:00:00Z",
        "role_id": 2,
        "role_name": "Cashier",
        "location": "Front store",
        "is_active": true,
        "created_at": "2024-01-10T09:30:00Z",
        "created_by": "admin@rms.test",
        "updated_at": null,
        "updated_by": null,
        "deleted_at": null,
        "deleted_by": null
    })
}

pub fn shift_request_json(id: i64, status: &str) -> Value {
    serde_json::json!({
        "id": id,
        "user_id": 3,
        "shift_id": 7,
        "shift_date": "2024-01-15T00:00:00Z",
        "shift_start_time": "2024-01-15T08:00:00Z",
        "shift_end_time": "2024-01-15T16:00:00Z",
        "shift_role_id": 2,
        "shift_role_name": "Cashier",
        "status": status,
        "requested_by": "ana@rms.test",
        "admin_actor": null,
        "rejection_reason": null,
        "created_at": "2024-01-12T10:00:00Z",
        "created_by": "ana@rms.test",
        "updated_at": null,
        "updated_by": null,
        "deleted_at": null,
        "deleted_by": null
    })
}

pub fn error_envelope(path: &str, status_code: u16, error: &str) -> Value {
    serde_json::json!({
        "metadata": {
            "path": path,
            "code": "RMS0034",
            "statusCode": status_code,
            "status": "Not Found",
            "message": format!("{} [{}]", path, status_code),
            "error": error,
            "timestamp": "2024-01-15T00:00:00Z"
        },
        "success": "false"
    })
}
