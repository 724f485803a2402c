#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::get,
};
use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};
use tokio::net::TcpListener;

/// Headers seen by the fake REST endpoint, one entry per request
#[derive(Debug, Default)]
pub struct Seen {
    pub requests: Mutex<Vec<HeaderMap>>,
}

impl Seen {
    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn header(&self, index: usize, name: &str) -> Option<String> {
        self.requests
            .lock()
            .unwrap()
            .get(index)
            .and_then(|h| h.get(name))
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
    }
}

#[derive(Clone)]
struct AppState {
    status: StatusCode,
    seen: Arc<Seen>,
}

async fn rest_root(State(state): State<AppState>, headers: HeaderMap) -> StatusCode {
    state.seen.requests.lock().unwrap().push(headers);
    state.status
}

/// Serve `GET /rest/v1/` on a random local port, always answering `status`
pub async fn spawn_rest(status: u16) -> (String, Arc<Seen>) {
    let seen = Arc::new(Seen::default());
    let state = AppState {
        status: StatusCode::from_u16(status).unwrap(),
        seen: seen.clone(),
    };
    let app = Router::new()
        .route("/rest/v1/", get(rest_root))
        .with_state(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}"), seen)
}

/// Address of a port that nothing listens on
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

/// One target object as it appears in `SUPABASE_CONFIGS`
pub fn target_json(name: &str, url: &str, key: &str) -> String {
    format!(r#"{{"name":"{name}","url":"{url}","key":"{key}"}}"#)
}
