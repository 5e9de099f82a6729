//! # greenlog
//!
//! The HTTP surface over [`greenlogapp`]: an axum router exposing CRUD on
//! the action collection, plus a liveness probe. Handlers stay thin; the
//! logic lives in `greenlogapp::commands`.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use greenlogapp::store::ActionStore;

pub mod config;
pub mod http;

/// Shared state handed to every handler: the injected storage backend.
///
/// Tests mount an `InMemoryStore` behind the same routes; production wires
/// up a `FileStore`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ActionStore + Send + Sync>,
}

impl AppState {
    pub fn new(store: Arc<dyn ActionStore + Send + Sync>) -> Self {
        Self { store }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(http::healthz))
        .route(
            "/api/actions/",
            get(http::list_actions).post(http::create_action),
        )
        .route(
            "/api/actions/:id/",
            get(http::get_action)
                .put(http::replace_action)
                .patch(http::patch_action)
                .delete(http::delete_action),
        )
        .with_state(state)
}
