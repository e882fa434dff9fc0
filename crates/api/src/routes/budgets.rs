//! Budget management routes.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use pocketbook_core::budget::{Budget, BudgetComparator, BudgetComparison, BudgetDraft};
use pocketbook_core::ledger::{LedgerError, TransactionFilter, YearMonth, validate_budget};
use pocketbook_db::BudgetFilter;
use pocketbook_shared::types::{BudgetId, Envelope};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use crate::AppState;
use crate::error::{ApiError, ApiResult};
use crate::extractors::{ApiJson, ApiPath, ApiQuery};

/// Creates the budget routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/budgets", get(list_budgets).post(create_budget))
        .route(
            "/budgets/{id}",
            get(get_budget).put(update_budget).delete(delete_budget),
        )
        .route("/budgets/month/{month}", get(list_month_budgets))
        .route("/budgets/comparison/{month}", get(compare_month))
}

// ============================================================================
// Request Types
// ============================================================================

/// Request body for creating or replacing a budget.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRequest {
    /// Expense category label.
    pub category: String,
    /// Positive monthly limit.
    pub monthly_limit: Decimal,
    /// `YYYY-MM`.
    pub month: String,
}

impl BudgetRequest {
    /// Parses and validates the request into a draft.
    pub fn into_draft(self) -> Result<BudgetDraft, LedgerError> {
        let draft = BudgetDraft {
            category: self.category.parse()?,
            monthly_limit: self.monthly_limit,
            month: self.month.parse()?,
        };
        validate_budget(&draft)?;
        Ok(draft)
    }
}

/// Query parameters for listing budgets.
#[derive(Debug, Default, Deserialize)]
pub struct BudgetQuery {
    /// Restrict to one month.
    pub month: Option<YearMonth>,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/api/budgets` - List budgets, newest month first.
async fn list_budgets(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<BudgetQuery>,
) -> ApiResult<Json<Envelope<Vec<Budget>>>> {
    let budgets = state
        .store
        .list_budgets(&BudgetFilter { month: query.month })
        .await?;
    Ok(Json(Envelope::success(budgets)))
}

/// GET `/api/budgets/month/{month}` - Budgets of one month.
async fn list_month_budgets(
    State(state): State<AppState>,
    ApiPath(month): ApiPath<YearMonth>,
) -> ApiResult<Json<Envelope<Vec<Budget>>>> {
    let budgets = state.store.list_budgets(&BudgetFilter::month(month)).await?;
    Ok(Json(Envelope::success(budgets)))
}

/// GET `/api/budgets/{id}` - Fetch one budget.
async fn get_budget(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<BudgetId>,
) -> ApiResult<Json<Envelope<Budget>>> {
    let budget = state
        .store
        .get_budget(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Budget"))?;
    Ok(Json(Envelope::success(budget)))
}

/// POST `/api/budgets` - Create a budget.
async fn create_budget(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<BudgetRequest>,
) -> ApiResult<(StatusCode, Json<Envelope<Budget>>)> {
    let draft = payload.into_draft()?;
    let budget = state.store.create_budget(draft).await?;
    info!(id = %budget.id, category = %budget.category, month = %budget.month, "Created budget");
    Ok((StatusCode::CREATED, Json(Envelope::success(budget))))
}

/// PUT `/api/budgets/{id}` - Replace a budget.
async fn update_budget(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<BudgetId>,
    ApiJson(payload): ApiJson<BudgetRequest>,
) -> ApiResult<Json<Envelope<Budget>>> {
    let draft = payload.into_draft()?;
    let budget = state
        .store
        .update_budget(id, draft)
        .await?
        .ok_or_else(|| ApiError::not_found("Budget"))?;
    info!(id = %id, "Updated budget");
    Ok(Json(Envelope::success(budget)))
}

/// DELETE `/api/budgets/{id}` - Delete a budget.
async fn delete_budget(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<BudgetId>,
) -> ApiResult<Json<Envelope<()>>> {
    if !state.store.delete_budget(id).await? {
        return Err(ApiError::not_found("Budget"));
    }
    info!(id = %id, "Deleted budget");
    Ok(Json(Envelope::acknowledged("Budget deleted")))
}

/// GET `/api/budgets/comparison/{month}` - Budget vs actual for one month.
async fn compare_month(
    State(state): State<AppState>,
    ApiPath(month): ApiPath<YearMonth>,
) -> ApiResult<Json<Envelope<Vec<BudgetComparison>>>> {
    let expenses = TransactionFilter::expenses().within(month.window());
    let budget_filter = BudgetFilter::month(month);
    let (budgets, transactions) = tokio::try_join!(
        state.store.list_budgets(&budget_filter),
        state.store.list_transactions(&expenses),
    )?;

    let comparisons = BudgetComparator::compare_all(&budgets, &transactions);
    Ok(Json(Envelope::success(comparisons)))
}
