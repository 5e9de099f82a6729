//! HTTP handlers: thin adapters from axum extractors to the command layer.
//!
//! Error contract: validation failures are a 400 whose body is the per-field
//! error map, a missing id is a 404 with `{"detail": "not found"}`, and
//! anything else (an I/O failure during persist, for instance) is a logged
//! 500 with `{"detail": "internal error"}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use greenlogapp::commands::{create, delete, fetch, list, patch, replace};
use greenlogapp::GreenlogError;
use serde_json::{json, Value};
use tracing::{error, info};

use crate::AppState;

fn detail_response(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}

fn error_response(err: GreenlogError) -> Response {
    match err {
        GreenlogError::Validation(errors) => {
            (StatusCode::BAD_REQUEST, Json(errors)).into_response()
        }
        GreenlogError::ActionNotFound(_) => detail_response(StatusCode::NOT_FOUND, "not found"),
        err => {
            error!("request failed: {err}");
            detail_response(StatusCode::INTERNAL_SERVER_ERROR, "internal error")
        }
    }
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn list_actions(State(state): State<AppState>) -> Response {
    match list::run(state.store.as_ref()) {
        Ok(actions) => (StatusCode::OK, Json(actions)).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn create_action(State(state): State<AppState>, Json(payload): Json<Value>) -> Response {
    match create::run(state.store.as_ref(), &payload) {
        Ok(created) => {
            info!(id = created.id, "action created");
            (StatusCode::CREATED, Json(created)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub async fn get_action(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match fetch::run(state.store.as_ref(), id) {
        Ok(action) => (StatusCode::OK, Json(action)).into_response(),
        Err(err) => error_response(err),
    }
}

pub async fn replace_action(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<Value>,
) -> Response {
    match replace::run(state.store.as_ref(), id, &payload) {
        Ok(replaced) => {
            info!(id, "action replaced");
            (StatusCode::OK, Json(replaced)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub async fn patch_action(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(payload): Json<Value>,
) -> Response {
    match patch::run(state.store.as_ref(), id, &payload) {
        Ok(updated) => {
            info!(id, "action updated");
            (StatusCode::OK, Json(updated)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub async fn delete_action(State(state): State<AppState>, Path(id): Path<u64>) -> Response {
    match delete::run(state.store.as_ref(), id) {
        Ok(()) => {
            info!(id, "action deleted");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(err) => error_response(err),
    }
}
