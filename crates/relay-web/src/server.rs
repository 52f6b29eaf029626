use crate::handlers;
use axum::{
    routing::{get, post},
    Router,
};
use relay_client::ConfigApiClient;
use tower_http::trace::TraceLayer;
use tracing::info;

/// State shared across requests: the one outbound API client, and with it the
/// transport's connection pool.
#[derive(Clone, Default)]
pub struct AppState {
    pub api: ConfigApiClient,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            api: ConfigApiClient::new(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/submit", post(handlers::submit))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub struct RelayServer {
    addr: String,
}

impl RelayServer {
    pub fn new(addr: impl Into<String>) -> Self {
        RelayServer { addr: addr.into() }
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let app = router(AppState::new());

        info!("Relay listening on {}", self.addr);

        let listener = tokio::net::TcpListener::bind(&self.addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
