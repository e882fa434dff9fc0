//! Analytics routes over the ledger snapshot.
//!
//! Each handler reads what it needs from the store and hands the snapshot
//! to the pure analytics in `pocketbook_core`.

use axum::{Json, Router, extract::State, routing::get};
use chrono::{Datelike, NaiveDate, Utc};
use pocketbook_core::aggregation::{
    Aggregator, CategoryTotal, DailyTotal, LedgerSummary, MonthCategoryTotal, MonthlyTrend,
    SortOrder,
};
use pocketbook_core::budget::{BudgetComparator, BudgetComparison};
use pocketbook_core::insights::{InsightDeriver, SpendingInsights};
use pocketbook_core::ledger::{LedgerError, TransactionFilter, YearMonth};
use pocketbook_db::BudgetFilter;
use pocketbook_shared::types::Envelope;
use serde::Deserialize;

use crate::AppState;
use crate::error::ApiResult;
use crate::extractors::ApiQuery;

/// Creates the analytics routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/analytics/spending-insights", get(spending_insights))
        .route("/analytics/category-breakdown", get(category_breakdown))
        .route("/analytics/monthly-trends", get(monthly_trends))
        .route("/analytics/budget-performance", get(budget_performance))
        .route("/analytics/insights", get(insights))
        .route("/analytics/daily-spending", get(daily_spending))
        .route("/analytics/summary", get(summary))
}

/// `?order=asc|desc`.
#[derive(Debug, Default, Deserialize)]
pub struct OrderQuery {
    /// Month ordering; each route has its own default.
    pub order: Option<SortOrder>,
}

/// `?month=YYYY-MM`.
#[derive(Debug, Default, Deserialize)]
pub struct MonthQuery {
    /// Restrict to one month.
    pub month: Option<YearMonth>,
}

/// `?asOf=YYYY-MM-DD`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsQuery {
    /// Reference date; defaults to today (UTC).
    pub as_of: Option<NaiveDate>,
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// GET `/api/analytics/spending-insights` - Expense totals per month and category.
async fn spending_insights(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<OrderQuery>,
) -> ApiResult<Json<Envelope<Vec<MonthCategoryTotal>>>> {
    let transactions = state
        .store
        .list_transactions(&TransactionFilter::expenses())
        .await?;
    let order = query.order.unwrap_or(SortOrder::Descending);
    Ok(Json(Envelope::success(Aggregator::by_month_and_category(
        &transactions,
        order,
    ))))
}

/// GET `/api/analytics/category-breakdown` - Expense totals per category.
async fn category_breakdown(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MonthQuery>,
) -> ApiResult<Json<Envelope<Vec<CategoryTotal>>>> {
    let mut filter = TransactionFilter::expenses();
    if let Some(month) = query.month {
        filter = filter.within(month.window());
    }
    let transactions = state.store.list_transactions(&filter).await?;
    Ok(Json(Envelope::success(Aggregator::by_category(&transactions))))
}

/// GET `/api/analytics/monthly-trends` - Income and expense per month.
async fn monthly_trends(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<OrderQuery>,
) -> ApiResult<Json<Envelope<Vec<MonthlyTrend>>>> {
    let transactions = state
        .store
        .list_transactions(&TransactionFilter::default())
        .await?;
    let order = query.order.unwrap_or(SortOrder::Ascending);
    Ok(Json(Envelope::success(Aggregator::monthly_trends(
        &transactions,
        order,
    ))))
}

/// GET `/api/analytics/budget-performance` - Budget vs actual for every budget.
async fn budget_performance(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MonthQuery>,
) -> ApiResult<Json<Envelope<Vec<BudgetComparison>>>> {
    let mut expenses = TransactionFilter::expenses();
    if let Some(month) = query.month {
        expenses = expenses.within(month.window());
    }
    let budget_filter = BudgetFilter { month: query.month };
    let (budgets, transactions) = tokio::try_join!(
        state.store.list_budgets(&budget_filter),
        state.store.list_transactions(&expenses),
    )?;

    Ok(Json(Envelope::success(BudgetComparator::compare_all(
        &budgets,
        &transactions,
    ))))
}

/// GET `/api/analytics/insights` - Month-to-date insights.
async fn insights(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<InsightsQuery>,
) -> ApiResult<Json<Envelope<SpendingInsights>>> {
    let as_of = query.as_of.unwrap_or_else(today);
    let month = YearMonth::new(as_of.year(), as_of.month())
        .ok_or(LedgerError::DateOutOfRange(as_of))?;
    let expenses = TransactionFilter {
        from: Some(month.previous().first_day()),
        before: Some(month.next().first_day()),
        ..TransactionFilter::expenses()
    };
    let budget_filter = BudgetFilter::month(month);
    let (budgets, transactions) = tokio::try_join!(
        state.store.list_budgets(&budget_filter),
        state.store.list_transactions(&expenses),
    )?;

    Ok(Json(Envelope::success(InsightDeriver::derive(
        &transactions,
        &budgets,
        as_of,
    ))))
}

/// GET `/api/analytics/daily-spending` - Spend per day of one month.
async fn daily_spending(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<MonthQuery>,
) -> ApiResult<Json<Envelope<Vec<DailyTotal>>>> {
    let month = query.month.unwrap_or_else(|| YearMonth::of(today()));
    let transactions = state
        .store
        .list_transactions(&TransactionFilter::expenses().within(month.window()))
        .await?;
    Ok(Json(Envelope::success(Aggregator::daily_expenses(
        &transactions,
        month,
    ))))
}

/// GET `/api/analytics/summary` - All-time income, expense and net totals.
async fn summary(State(state): State<AppState>) -> ApiResult<Json<Envelope<LedgerSummary>>> {
    let transactions = state
        .store
        .list_transactions(&TransactionFilter::default())
        .await?;
    Ok(Json(Envelope::success(Aggregator::summary(&transactions))))
}
