//! Demo widgets application the integration tests run the harness against.
//!
//! A deliberately small axum app: bearer-header auth (any well-formed token
//! is accepted, missing or malformed ones get 403), CRUD over a shared
//! [`MemoryStore`], and the status codes the harness defaults expect.

use std::sync::Arc;

use apitest::store::{MemoryStore, RecordStore, StoreError};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};

const KIND: &str = "widgets";

#[derive(Clone)]
struct AppState {
    store: Arc<MemoryStore>,
    allow_delete: bool,
}

/// Widgets app where deletion is permitted (answers 204).
pub fn widgets_app(store: Arc<MemoryStore>) -> Router {
    app(store, true)
}

/// Widgets app where deletion is forbidden (answers 403).
pub fn locked_widgets_app(store: Arc<MemoryStore>) -> Router {
    app(store, false)
}

fn app(store: Arc<MemoryStore>, allow_delete: bool) -> Router {
    Router::new()
        .route(
            "/api/widgets/",
            get(list_widgets).post(create_widget).options(describe_widgets),
        )
        .route(
            "/api/widgets/{id}/",
            get(read_widget).put(update_widget).delete(delete_widget),
        )
        .with_state(AppState {
            store,
            allow_delete,
        })
}

fn authorize(headers: &HeaderMap) -> Result<(), Response> {
    let authenticated = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .is_some_and(|token| !token.is_empty());

    if authenticated {
        Ok(())
    } else {
        Err((
            StatusCode::FORBIDDEN,
            Json(json!({"detail": "authentication required"})),
        )
            .into_response())
    }
}

fn store_error(err: StoreError) -> Response {
    let status = match err {
        StoreError::NotFound { .. } => StatusCode::NOT_FOUND,
        StoreError::AlreadyExists { .. } => StatusCode::CONFLICT,
        StoreError::Backend(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({"detail": err.to_string()}))).into_response()
}

async fn list_widgets(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Err(forbidden) = authorize(&headers) {
        return forbidden;
    }
    match state.store.list(KIND).await {
        Ok(records) => {
            let bodies: Vec<Value> = records.into_iter().map(|record| record.body).collect();
            Json(bodies).into_response()
        }
        Err(err) => store_error(err),
    }
}

async fn create_widget(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(forbidden) = authorize(&headers) {
        return forbidden;
    }
    match state.store.create(KIND, body).await {
        Ok(record) => (StatusCode::CREATED, Json(record.body)).into_response(),
        Err(err) => store_error(err),
    }
}

async fn describe_widgets(headers: HeaderMap) -> Response {
    if let Err(forbidden) = authorize(&headers) {
        return forbidden;
    }
    Json(json!({
        "name": "widgets",
        "allowed": ["GET", "POST", "PUT", "OPTIONS", "DELETE"],
    }))
    .into_response()
}

async fn read_widget(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(forbidden) = authorize(&headers) {
        return forbidden;
    }
    match state.store.find_by_id(KIND, &id).await {
        Ok(record) => Json(record.body).into_response(),
        Err(err) => store_error(err),
    }
}

async fn update_widget(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(forbidden) = authorize(&headers) {
        return forbidden;
    }
    match state.store.update(KIND, &id, body).await {
        Ok(record) => Json(record.body).into_response(),
        Err(err) => store_error(err),
    }
}

async fn delete_widget(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    if let Err(forbidden) = authorize(&headers) {
        return forbidden;
    }
    if !state.allow_delete {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({"detail": "deletion is not allowed"})),
        )
            .into_response();
    }
    match state.store.delete(KIND, &id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => store_error(err),
    }
}
