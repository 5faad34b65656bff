//! JSON HTTP server for the search page.
//!
//! Serves the same search behaviour as the CLI so a browser front-end can
//! render result cards without bundling the filter itself.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET`  | `/search?q=` | Run a query (or reuse the persisted one) |
//! | `GET`  | `/snippets/{id}` | Full snippet by id |
//! | `GET`  | `/state` | Current application state |
//! | `GET`  | `/health` | Health check (returns version) |
//!
//! # Error Contract
//!
//! ```json
//! { "error": { "code": "not_found", "message": "snippet not found: foo" } }
//! ```
//!
//! Error codes: `not_found` (404), `internal` (500).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use snippet_search_core::models::Snippet;
use snippet_search_core::session::SearchSession;
use snippet_search_core::state::{AppState, StateStore};

use crate::config::{Config, SiteConfig};
use crate::content;
use crate::get::find_snippet;
use crate::search::SearchResponse;
use crate::state_file;

/// Shared state passed to all route handlers via Axum's `State` extractor.
#[derive(Clone)]
struct ServerState {
    /// Loaded once at startup, read-only afterwards.
    snippets: Arc<[Snippet]>,
    store: Arc<dyn StateStore>,
    site: Arc<SiteConfig>,
}

/// Starts the HTTP server.
///
/// Loads content, opens the configured state store and binds to
/// `[server].bind`. Runs until the process is terminated.
pub async fn run_server(config: &Config) -> anyhow::Result<()> {
    let snippets: Arc<[Snippet]> = content::load_snippets(config)?.into();
    let store = state_file::open_store(config);
    let count = snippets.len();

    let site = Arc::new(config.site.clone());

    let app = router(ServerState {
        snippets,
        store,
        site,
    });

    let bind_addr = config.server.bind.clone();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(snippets = count, "listening on http://{}", bind_addr);
    println!("Search server listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: ServerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/search", get(handle_search))
        .route("/snippets/{id}", get(handle_get_snippet))
        .route("/state", get(handle_state))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state)
}

// ============ Error response ============

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: String,
    message: String,
}

/// Internal error type that converts into an Axum HTTP response.
struct AppError {
    status: StatusCode,
    code: String,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

fn not_found(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::NOT_FOUND,
        code: "not_found".to_string(),
        message: message.into(),
    }
}

fn internal(message: impl Into<String>) -> AppError {
    AppError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        code: "internal".to_string(),
        message: message.into(),
    }
}

// ============ GET /health ============

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============ GET /search ============

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
}

/// Handler for `GET /search`.
///
/// Each request is one page view: the navigation event is recorded, `q` (when
/// present) is persisted, and the filtered view is returned. Without `q` the
/// persisted query is used.
///
/// The state store may touch the filesystem, so the session runs on the
/// blocking pool.
async fn handle_search(
    State(state): State<ServerState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let response = tokio::task::spawn_blocking(move || {
        let mut session = SearchSession::new(state.snippets.clone(), state.store.clone());
        session.mount();
        if let Some(q) = params.q {
            session.set_query(&q);
        }
        SearchResponse::from_session(&session, &state.site)
    })
    .await
    .map_err(|e| internal(format!("search task failed: {}", e)))?;
    Ok(Json(response))
}

// ============ GET /snippets/{id} ============

async fn handle_get_snippet(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Snippet>, AppError> {
    find_snippet(&state.snippets, &id)
        .map(|s| Json(s.clone()))
        .map_err(|e| not_found(e.to_string()))
}

// ============ GET /state ============

async fn handle_state(State(state): State<ServerState>) -> Result<Json<AppState>, AppError> {
    let store = state.store.clone();
    tokio::task::spawn_blocking(move || store.snapshot())
        .await
        .map_err(|e| internal(format!("state task failed: {}", e)))?
        .map(Json)
        .map_err(|e| internal(format!("{:#}", e)))
}
