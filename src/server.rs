//! HTTP endpoint layer for the sticker-mood service.
//!
//! ## Endpoints
//!
//! - `POST /detect_emotion` — free-form text in, composed search query
//!   out (the response field is named `detected_emotion` for caller
//!   compatibility even though it carries the full query)
//! - `POST /search_stickers` — sticker search, caller-chosen limit
//!   (default 3)
//! - `POST /search_stickers_dashboard` — same body, server-side limit
//!   forced to 9
//! - `GET /health` — liveness probe
//!
//! Query-building failures become HTTP 500 with a JSON `detail` body.
//! Sticker searches never 500 for provider problems: a degraded outcome
//! is rendered as exactly one placeholder result.

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use crate::query::QueryBuilder;
use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use giphy_search::{GiphyClient, StickerResult};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::info;

/// Server-side result limit for the dashboard endpoint, applied
/// regardless of the request body's `limit` field.
pub const DASHBOARD_LIMIT: usize = 9;

fn default_rating() -> String {
    "g".to_owned()
}

fn default_limit() -> usize {
    3
}

// ---------------------------------------------------------------------------
// Request/response types
// ---------------------------------------------------------------------------

/// Body of `POST /detect_emotion`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionRequest {
    /// Free-form input text.
    pub input_text: String,
}

/// Response of `POST /detect_emotion`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmotionResponse {
    /// The composed search query (emotion label plus top keyword).
    pub detected_emotion: String,
}

/// Body of the sticker search endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StickerRequest {
    /// Search query text.
    pub q: String,
    /// Content rating filter.
    #[serde(default = "default_rating")]
    pub rating: String,
    /// Maximum number of results (ignored by the dashboard endpoint).
    #[serde(default = "default_limit")]
    pub limit: usize,
}

// ---------------------------------------------------------------------------
// Router and handlers
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct AppState {
    builder: Arc<QueryBuilder>,
    giphy: Arc<GiphyClient>,
}

/// Build the service router over shared query-building and fetch state.
pub fn router(builder: Arc<QueryBuilder>, giphy: Arc<GiphyClient>) -> Router {
    let state = AppState { builder, giphy };
    Router::new()
        .route("/health", get(handle_health))
        .route("/detect_emotion", post(handle_detect_emotion))
        .route("/search_stickers", post(handle_search_stickers))
        .route(
            "/search_stickers_dashboard",
            post(handle_search_stickers_dashboard),
        )
        .with_state(state)
}

async fn handle_health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn handle_detect_emotion(
    State(state): State<AppState>,
    Json(request): Json<EmotionRequest>,
) -> Result<Json<EmotionResponse>, ServiceError> {
    let detected_emotion = state.builder.build_search_query(&request.input_text)?;
    tracing::debug!(query = %detected_emotion, "built search query");
    Ok(Json(EmotionResponse { detected_emotion }))
}

async fn handle_search_stickers(
    State(state): State<AppState>,
    Json(request): Json<StickerRequest>,
) -> Json<Vec<StickerResult>> {
    search(&state, &request.q, &request.rating, request.limit).await
}

async fn handle_search_stickers_dashboard(
    State(state): State<AppState>,
    Json(request): Json<StickerRequest>,
) -> Json<Vec<StickerResult>> {
    search(&state, &request.q, &request.rating, DASHBOARD_LIMIT).await
}

async fn search(state: &AppState, q: &str, rating: &str, limit: usize) -> Json<Vec<StickerResult>> {
    let outcome = state.giphy.search_stickers(q, rating, limit).await;
    if outcome.is_degraded() {
        tracing::warn!("sticker search degraded to placeholder result");
    }
    Json(outcome.into_results())
}

// ---------------------------------------------------------------------------
// Server lifecycle
// ---------------------------------------------------------------------------

/// Running HTTP server.
///
/// Holds the bound address and a handle to the background serve task.
pub struct StickerServer {
    /// The address the server is listening on.
    addr: SocketAddr,
    /// Handle to the background server task.
    handle: JoinHandle<()>,
}

impl StickerServer {
    /// Bind and start serving.
    ///
    /// Port 0 binds an ephemeral port; read it back via
    /// [`StickerServer::port`].
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Io`] if the listener cannot bind.
    pub async fn start(
        config: &ServiceConfig,
        builder: Arc<QueryBuilder>,
        giphy: Arc<GiphyClient>,
    ) -> crate::error::Result<Self> {
        let app = router(builder, giphy);

        let bind_addr = format!("{}:{}", config.host, config.port);
        let listener = TcpListener::bind(&bind_addr).await?;
        let addr = listener.local_addr()?;

        info!("sticker-mood listening on http://{addr}");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    /// Returns the address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Abort the server task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }

    /// Wait for the serve task to finish (it normally never does).
    pub async fn wait(self) {
        let _ = self.handle.await;
    }
}
