// src/test_utils/mock_json_server.rs
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Clone)]
struct MockServerState {
    status: StatusCode,
    body: Arc<String>,
    hits: Arc<AtomicUsize>,
}

async fn something_handler(State(state): State<MockServerState>) -> impl IntoResponse {
    state.hits.fetch_add(1, Ordering::SeqCst);
    log::debug!("Mock JSON server answering with {}", state.status);
    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.as_str().to_owned(),
    )
}

/// Serves one canned response on `GET /something`.
pub struct MockJsonServer {
    addr: SocketAddr,
    shutdown_tx: tokio::sync::oneshot::Sender<()>,
    hits: Arc<AtomicUsize>,
}

impl MockJsonServer {
    pub async fn start(status: StatusCode, body: &str) -> Self {
        let state = MockServerState {
            status,
            body: Arc::new(body.to_string()),
            hits: Arc::new(AtomicUsize::new(0)),
        };
        let hits = state.hits.clone();

        let app = Router::new()
            .route("/something", get(something_handler))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap_or_else(|e| {
            panic!("Failed to bind mock server to 127.0.0.1:0. Error: {}", e);
        });
        let addr = listener.local_addr().unwrap();
        log::info!("Mock JSON server listening on {}", addr);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap_or_else(|e| {
                    log::error!("Mock JSON server error: {}", e);
                });
        });

        MockJsonServer {
            addr,
            shutdown_tx,
            hits,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}/something", self.addr)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub async fn shutdown(self) {
        if self.shutdown_tx.send(()).is_err() {
            log::warn!("Mock JSON server shutdown signal already sent or receiver dropped.");
        }
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    }
}
