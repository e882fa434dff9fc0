//! HTTP error responses.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use pocketbook_core::ledger::LedgerError;
use pocketbook_db::StoreError;
use pocketbook_shared::AppError;
use pocketbook_shared::types::Envelope;
use tracing::error;

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// An [`AppError`] rendered as an error envelope.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// 404 for a missing resource.
    #[must_use]
    pub fn not_found(resource: &str) -> Self {
        Self(AppError::NotFound(resource.to_string()))
    }

    /// 400 with a message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self(AppError::Validation(message.into()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = if self.0.is_server_error() {
            error!(error = %self.0, code = self.0.error_code(), "Request failed");
            "An internal error occurred".to_string()
        } else {
            self.0.to_string()
        };

        (status, Json(Envelope::<()>::error(message))).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        Self(err.into())
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation(rejection.body_text())
    }
}
