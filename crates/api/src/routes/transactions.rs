//! Transaction routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use chrono::NaiveDate;
use pocketbook_core::ledger::{
    Category, LedgerError, Transaction, TransactionDraft, TransactionFilter, TransactionKind,
    validate_transaction,
};
use pocketbook_shared::types::{Envelope, TransactionId};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::extractors::{ApiJson, ApiPath, ApiQuery};

/// Creates the transaction routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/transactions",
            get(list_transactions).post(create_transaction),
        )
        .route(
            "/transactions/{id}",
            get(get_transaction)
                .put(update_transaction)
                .delete(delete_transaction),
        )
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for creating or replacing a transaction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    /// Positive amount.
    pub amount: Decimal,
    /// Description, 1-200 characters.
    pub description: String,
    /// Date; defaults to today.
    pub date: Option<NaiveDate>,
    /// `income` or `expense`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Category label from the kind's set.
    pub category: String,
}

impl TransactionRequest {
    /// Parses and validates the request into a draft.
    pub fn into_draft(self) -> Result<TransactionDraft, LedgerError> {
        let draft = TransactionDraft {
            kind: self.kind.parse()?,
            category: self.category.parse()?,
            amount: self.amount,
            description: self.description,
            date: self.date,
        };
        validate_transaction(&draft)?;
        Ok(draft)
    }
}

/// Query parameters for listing transactions.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionQuery {
    /// Exact category label.
    pub category: Option<String>,
    /// `income` or `expense`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Earliest date (inclusive).
    pub start_date: Option<NaiveDate>,
    /// Latest date (inclusive).
    pub end_date: Option<NaiveDate>,
}

impl TransactionQuery {
    fn into_filter(self) -> Result<TransactionFilter, LedgerError> {
        Ok(TransactionFilter {
            category: self
                .category
                .as_deref()
                .map(str::parse::<Category>)
                .transpose()?,
            kind: self
                .kind
                .as_deref()
                .map(str::parse::<TransactionKind>)
                .transpose()?,
            from: self.start_date,
            to: self.end_date,
            before: None,
        })
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/api/transactions` - List transactions, newest first.
async fn list_transactions(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TransactionQuery>,
) -> ApiResult<Json<Envelope<Vec<Transaction>>>> {
    let filter = query.into_filter()?;
    let transactions = state.store.list_transactions(&filter).await?;
    Ok(Json(Envelope::success(transactions)))
}

/// GET `/api/transactions/{id}` - Fetch one transaction.
async fn get_transaction(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<TransactionId>,
) -> ApiResult<Json<Envelope<Transaction>>> {
    let transaction = state
        .store
        .get_transaction(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Transaction"))?;
    Ok(Json(Envelope::success(transaction)))
}

/// POST `/api/transactions` - Record a transaction.
async fn create_transaction(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<TransactionRequest>,
) -> ApiResult<(StatusCode, Json<Envelope<Transaction>>)> {
    let draft = payload.into_draft()?;
    let transaction = state.store.create_transaction(draft).await?;
    info!(id = %transaction.id, kind = %transaction.kind, "Created transaction");
    Ok((StatusCode::CREATED, Json(Envelope::success(transaction))))
}

/// PUT `/api/transactions/{id}` - Replace a transaction.
async fn update_transaction(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<TransactionId>,
    ApiJson(payload): ApiJson<TransactionRequest>,
) -> ApiResult<Json<Envelope<Transaction>>> {
    let draft = payload.into_draft()?;
    let transaction = state
        .store
        .update_transaction(id, draft)
        .await?
        .ok_or_else(|| ApiError::not_found("Transaction"))?;
    info!(id = %id, "Updated transaction");
    Ok(Json(Envelope::success(transaction)))
}

/// DELETE `/api/transactions/{id}` - Delete a transaction.
async fn delete_transaction(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<TransactionId>,
) -> ApiResult<Json<Envelope<()>>> {
    if !state.store.delete_transaction(id).await? {
        return Err(ApiError::not_found("Transaction"));
    }
    info!(id = %id, "Deleted transaction");
    Ok(Json(Envelope::acknowledged("Transaction deleted")))
}
