#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex, mpsc};
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

pub const API_PREFIX: &str = "/api/v1";

/// One request the mock backend received.
#[derive(Clone, Debug)]
pub struct Recorded {
    pub method: Method,
    /// Raw path below `/api/v1`, still percent-encoded.
    pub path: String,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap_or(serde_json::Value::Null)
    }
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

#[derive(Default)]
struct Backend {
    routes: Mutex<HashMap<(Method, String), Canned>>,
    seen: Mutex<Vec<Recorded>>,
}

/// An AMS-shaped backend on a loopback port, answering with canned bodies.
///
/// Unconfigured routes answer 404 with a JSON message.
pub struct MockServer {
    pub base_url: String,
    backend: Arc<Backend>,
    shutdown: Option<tokio::sync::oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl Drop for MockServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl MockServer {
    pub fn start() -> Result<Self> {
        let backend = Arc::new(Backend::default());
        let app = Router::new()
            .fallback(record_and_answer)
            .with_state(backend.clone());

        let (addr_tx, addr_rx) = mpsc::channel();
        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        let thread = thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(err) => {
                    let _ = addr_tx.send(Err(anyhow::anyhow!("build runtime: {err}")));
                    return;
                }
            };
            runtime.block_on(async move {
                let listener = match tokio::net::TcpListener::bind("127.0.0.1:0").await {
                    Ok(l) => l,
                    Err(err) => {
                        let _ = addr_tx.send(Err(anyhow::anyhow!("bind mock server: {err}")));
                        return;
                    }
                };
                let _ = addr_tx.send(listener.local_addr().context("local addr"));
                let _ = axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await;
            });
        });

        let addr = addr_rx.recv().context("mock server thread exited")??;
        Ok(Self {
            base_url: format!("http://{}{}", addr, API_PREFIX),
            backend,
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
        })
    }

    /// Answers `method path` with `status` and a JSON body.
    pub fn respond(&self, method: Method, path: &str, status: u16, body: serde_json::Value) {
        self.install(method, path, status, "application/json", body.to_string());
    }

    /// Answers `method path` with `status` and a plain-text body.
    pub fn respond_text(&self, method: Method, path: &str, status: u16, body: &str) {
        self.install(method, path, status, "text/plain", body.to_string());
    }

    fn install(&self, method: Method, path: &str, status: u16, content_type: &'static str, body: String) {
        let canned = Canned {
            status: StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            content_type,
            body,
        };
        self.backend
            .routes
            .lock()
            .unwrap()
            .insert((method, path.to_string()), canned);
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.backend.seen.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests()
            .pop()
            .expect("mock server saw no requests")
    }
}

async fn record_and_answer(
    State(backend): State<Arc<Backend>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri
        .path()
        .strip_prefix(API_PREFIX)
        .unwrap_or(uri.path())
        .to_string();
    backend.seen.lock().unwrap().push(Recorded {
        method: method.clone(),
        path: path.clone(),
        headers,
        body: body.to_vec(),
    });

    let canned = backend.routes.lock().unwrap().get(&(method, path)).cloned();
    match canned {
        Some(c) => (c.status, [(header::CONTENT_TYPE, c.content_type)], c.body).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            serde_json::json!({"message": "Resource not found"}).to_string(),
        )
            .into_response(),
    }
}

/// An unsigned token carrying `payload` as its claims.
pub fn make_token(payload: &serde_json::Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
    format!("{}.{}.signature", header, body)
}

pub fn admin_token() -> String {
    make_token(&serde_json::json!({
        "employeeId": 1,
        "name": "Root Admin",
        "sub": "admin@ams.test",
        "role": "ADMIN",
    }))
}

pub fn employee_token(employee_id: i64) -> String {
    make_token(&serde_json::json!({
        "employeeId": employee_id,
        "name": "Asha",
        "email": "asha@ams.test",
        "role": "EMPLOYEE",
    }))
}
