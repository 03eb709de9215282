//! Rolepanel admin UI server
//!
//! Hosts the index-permission panel in a browser against an in-memory draft.
//! Run with: cargo run --features server --bin rolepanel-server
//!
//! Endpoints:
//!   GET  /              - Panel page
//!   GET  /api/state     - Current entries plus summaries
//!   GET  /api/actions   - Allowed-action option universe
//!   POST /api/event     - Apply one panel event
//!   GET  /api/export    - Wire permissions a role submit would send
//!   POST /api/import    - Replace the draft from wire permissions

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::{Arc, Mutex};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use rolepanel::{
    apply, build_index_permission_state, unbuild_index_permission_state, IndexPermissionEntry,
    PanelEvent, WireIndexPermission, CLUSTER_ACTION_GROUPS, INDEX_ACTION_GROUPS,
};

// ============================================================================
// State
// ============================================================================

struct AppState {
    entries: Mutex<Vec<IndexPermissionEntry>>,
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    fn err(msg: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(msg.into()) }
    }
}

#[derive(Serialize)]
struct EntryInfo {
    summary: String,
    #[serde(flatten)]
    entry: IndexPermissionEntry,
}

#[derive(Serialize)]
struct ActionsRes {
    index: &'static [&'static str],
    cluster: &'static [&'static str],
}

// ============================================================================
// Handlers
// ============================================================================

fn entry_infos(entries: &[IndexPermissionEntry]) -> Vec<EntryInfo> {
    entries
        .iter()
        .map(|e| EntryInfo { summary: e.summary(), entry: e.clone() })
        .collect()
}

async fn index() -> Html<&'static str> {
    Html(include_str!("ui.html"))
}

async fn get_state(State(state): State<Arc<AppState>>) -> Json<ApiResponse<Vec<EntryInfo>>> {
    let entries = state.entries.lock().unwrap();
    Json(ApiResponse::ok(entry_infos(&entries)))
}

async fn get_actions() -> Json<ApiResponse<ActionsRes>> {
    Json(ApiResponse::ok(ActionsRes {
        index: INDEX_ACTION_GROUPS,
        cluster: CLUSTER_ACTION_GROUPS,
    }))
}

async fn post_event(
    State(state): State<Arc<AppState>>,
    Json(event): Json<PanelEvent>,
) -> (StatusCode, Json<ApiResponse<Vec<EntryInfo>>>) {
    let mut entries = state.entries.lock().unwrap();
    match apply(&mut entries, event) {
        Ok(()) => (StatusCode::OK, Json(ApiResponse::ok(entry_infos(&entries)))),
        Err(e) => (StatusCode::BAD_REQUEST, Json(ApiResponse::err(e.0))),
    }
}

async fn get_export(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Vec<WireIndexPermission>>> {
    let entries = state.entries.lock().unwrap();
    Json(ApiResponse::ok(unbuild_index_permission_state(&entries)))
}

async fn post_import(
    State(state): State<Arc<AppState>>,
    Json(perms): Json<Vec<WireIndexPermission>>,
) -> Json<ApiResponse<Vec<EntryInfo>>> {
    let mut entries = state.entries.lock().unwrap();
    *entries = build_index_permission_state(&perms);
    Json(ApiResponse::ok(entry_infos(&entries)))
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rolepanel_server=info,tower_http=info".into()),
        )
        .init();

    // CORS for the panel page
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = Arc::new(AppState { entries: Mutex::new(Vec::new()) });

    let app = Router::new()
        .route("/", get(index))
        .route("/api/state", get(get_state))
        .route("/api/actions", get(get_actions))
        .route("/api/event", post(post_event))
        .route("/api/export", get(get_export))
        .route("/api/import", post(post_import))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("rolepanel-server v{} listening on {}", env!("CARGO_PKG_VERSION"), addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
