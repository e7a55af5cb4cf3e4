mod store;

pub use store::{BlocklistStore, StoreError, StoredEntry};

use axum::{
    extract::{Json as AxumJson, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Json, Router,
};
use std::sync::Arc;
use tokio::sync::mpsc::Sender;

/// Shared state for the embedded blocklist API.
pub struct ApiState {
    pub store: Arc<BlocklistStore>,
    pub refresh_sender: Sender<()>,
}

pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/blocklist", get(get_blocklist).post(add_entry))
        .route("/blocklist/:id", delete(remove_entry))
        .route("/blocklist/check", post(check_url))
        .route("/refresh", post(trigger_refresh))
        .with_state(state)
}

pub async fn start_api_server(state: Arc<ApiState>, host: String, port: u16) {
    let app = router(state);

    let addr = format!("{}:{}", host, port);
    tracing::info!("Blocklist API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

async fn get_blocklist(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    Json(serde_json::json!({ "blocklist": state.store.list() }))
}

#[derive(serde::Deserialize)]
struct UrlRequest {
    url: Option<String>,
}

async fn add_entry(
    State(state): State<Arc<ApiState>>,
    AxumJson(payload): AxumJson<UrlRequest>,
) -> impl IntoResponse {
    let Some(url) = payload.url.filter(|u| !u.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "URL is required" })),
        );
    };

    match state.store.add(&url) {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(serde_json::json!({ "message": "URL added to blocklist", "url": entry.url })),
        ),
        Err(StoreError::DuplicateUrl) => (
            StatusCode::CONFLICT,
            Json(serde_json::json!({ "error": "URL already exists in blocklist" })),
        ),
        Err(StoreError::NotFound) => unreachable!("add never reports NotFound"),
    }
}

async fn remove_entry(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<u32>,
) -> impl IntoResponse {
    match state.store.remove(id) {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({ "message": "URL removed from blocklist", "id": id })),
        ),
        Err(_) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "Blocklist entry not found" })),
        ),
    }
}

async fn check_url(
    State(state): State<Arc<ApiState>>,
    AxumJson(payload): AxumJson<UrlRequest>,
) -> impl IntoResponse {
    let Some(url) = payload.url.filter(|u| !u.is_empty()) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "error": "URL is required" })),
        );
    };

    let message = if state.store.contains_url(&url) {
        "URL is blocked"
    } else {
        "URL is safe"
    };
    (
        StatusCode::OK,
        Json(serde_json::json!({ "message": message, "url": url })),
    )
}

async fn trigger_refresh(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    let _ = state.refresh_sender.try_send(());
    Json(serde_json::json!({ "status": "refresh_triggered" }))
}
