//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes over the ledger store
//! - Envelope-rendering error responses
//! - Request extractors

pub mod error;
pub mod extractors;
pub mod routes;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderValue;
use pocketbook_db::{LedgerStore, MemoryStore};
use pocketbook_shared::CorsConfig;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Transaction and budget store.
    pub store: Arc<dyn LedgerStore>,
}

impl AppState {
    /// Creates state over an opened store.
    #[must_use]
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self { store }
    }

    /// State over a fresh in-memory store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .nest("/api", routes::api_routes())
        .fallback(routes::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
        .with_state(state)
}

/// Builds the CORS layer; an empty origin list allows any origin.
fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if config.allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}
