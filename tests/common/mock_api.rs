//! Mock users API for exercising the HTTP fetcher end to end.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Body;
use axum::extract::{RawQuery, State};
use axum::http::Response;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

/// A captured request for assertions.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub path: String,
    pub query: String,
}

/// A canned response to return instead of the default fixture.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: Vec<u8>,
    pub delay_ms: u64,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.as_bytes().to_vec(),
            delay_ms: 0,
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: format!(r#"{{"error": "{}"}}"#, message).into_bytes(),
            delay_ms: 0,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }
}

#[derive(Clone)]
struct MockState {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
}

/// Mock users API server.
///
/// Serves `GET /users` with a jsonplaceholder-shaped fixture honoring the
/// `_limit` query parameter, unless a scripted [`MockResponse`] is queued.
pub struct MockApi {
    pub addr: SocketAddr,
    state: MockState,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl MockApi {
    /// Start a new mock API server on an ephemeral port.
    pub async fn start() -> Self {
        let state = MockState {
            requests: Arc::new(Mutex::new(Vec::new())),
            responses: Arc::new(Mutex::new(VecDeque::new())),
        };

        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        let app = Router::new()
            .route("/users", get(handle_users))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Self {
            addr,
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Enqueue a response to be returned for the next request.
    pub async fn enqueue_response(&self, resp: MockResponse) {
        self.state.responses.lock().await.push_back(resp);
    }

    /// Get all captured requests.
    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.state.requests.lock().await.clone()
    }

    /// Get the base URL for this mock server.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

const FIXTURE_USERS: &[(u64, &str, &str)] = &[
    (1, "Leanne Graham", "leanne@example.com"),
    (2, "Ervin Howell", "ervin@example.com"),
    (3, "Clementine Bauch", "clementine@example.com"),
    (4, "Patricia Lebsack", "patricia@example.com"),
    (5, "Chelsey Dietrich", "chelsey@example.com"),
];

async fn handle_users(State(state): State<MockState>, RawQuery(query): RawQuery) -> Response<Body> {
    let query = query.unwrap_or_default();
    state.requests.lock().await.push(CapturedRequest {
        path: "/users".to_string(),
        query: query.clone(),
    });

    if let Some(scripted) = state.responses.lock().await.pop_front() {
        if scripted.delay_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(scripted.delay_ms)).await;
        }
        return Response::builder()
            .status(scripted.status)
            .header("content-type", "application/json")
            .body(Body::from(scripted.body))
            .unwrap();
    }

    let limit = query
        .split('&')
        .find_map(|pair| pair.strip_prefix("_limit="))
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(FIXTURE_USERS.len());

    let users: Vec<serde_json::Value> = FIXTURE_USERS
        .iter()
        .take(limit)
        .map(|(id, name, email)| {
            serde_json::json!({ "id": id, "name": name, "email": email })
        })
        .collect();

    Response::builder()
        .status(200)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::Value::Array(users).to_string()))
        .unwrap()
}
