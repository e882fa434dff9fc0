//! API route definitions.

use axum::Router;

use crate::AppState;
use crate::error::ApiError;

pub mod analytics;
pub mod budgets;
pub mod health;
pub mod transactions;

/// Creates the router mounted under `/api`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(transactions::routes())
        .merge(budgets::routes())
        .merge(analytics::routes())
}

/// Fallback for unknown paths.
pub async fn not_found() -> ApiError {
    ApiError::not_found("Route")
}
