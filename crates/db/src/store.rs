//! Storage abstraction over transactions and budgets.

use async_trait::async_trait;
use pocketbook_core::budget::{Budget, BudgetDraft};
use pocketbook_core::ledger::{
    ExpenseCategory, Transaction, TransactionDraft, TransactionFilter, YearMonth,
};
use pocketbook_shared::AppError;
use pocketbook_shared::types::{BudgetId, TransactionId};
use sea_orm::DbErr;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Error types for store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A budget already exists for the category and month.
    #[error("Budget for {category} in {month} already exists")]
    DuplicateBudget {
        /// Budget category.
        category: ExpenseCategory,
        /// Budget month.
        month: YearMonth,
    },

    /// A stored row violates the data model.
    #[error("Corrupt record: {0}")]
    Corrupt(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateBudget { .. } => Self::Conflict(err.to_string()),
            StoreError::Corrupt(msg) => Self::Internal(msg),
            StoreError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Budget selection criteria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BudgetFilter {
    /// Exact month.
    pub month: Option<YearMonth>,
}

impl BudgetFilter {
    /// Budgets of one month.
    #[must_use]
    pub const fn month(month: YearMonth) -> Self {
        Self { month: Some(month) }
    }

    /// Returns true if the budget satisfies the filter.
    #[must_use]
    pub fn matches(&self, budget: &Budget) -> bool {
        self.month.is_none_or(|m| budget.month == m)
    }
}

/// Persistent collection of transactions and budgets.
///
/// Drafts are validated by the caller. Listing order is part of the
/// contract: transactions newest date first, budgets newest month first
/// then by category label.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    /// Short backend name for diagnostics.
    fn backend(&self) -> &'static str;

    /// Lists transactions matching the filter.
    async fn list_transactions(&self, filter: &TransactionFilter) -> StoreResult<Vec<Transaction>>;

    /// Fetches one transaction.
    async fn get_transaction(&self, id: TransactionId) -> StoreResult<Option<Transaction>>;

    /// Stores a new transaction.
    async fn create_transaction(&self, draft: TransactionDraft) -> StoreResult<Transaction>;

    /// Replaces a transaction's fields. Returns `None` if it does not exist.
    async fn update_transaction(
        &self,
        id: TransactionId,
        draft: TransactionDraft,
    ) -> StoreResult<Option<Transaction>>;

    /// Deletes a transaction. Returns false if it did not exist.
    async fn delete_transaction(&self, id: TransactionId) -> StoreResult<bool>;

    /// Lists budgets matching the filter.
    async fn list_budgets(&self, filter: &BudgetFilter) -> StoreResult<Vec<Budget>>;

    /// Fetches one budget.
    async fn get_budget(&self, id: BudgetId) -> StoreResult<Option<Budget>>;

    /// Stores a new budget.
    ///
    /// Fails with `StoreError::DuplicateBudget` if the (category, month)
    /// pair is taken.
    async fn create_budget(&self, draft: BudgetDraft) -> StoreResult<Budget>;

    /// Replaces a budget's fields. Returns `None` if it does not exist.
    async fn update_budget(&self, id: BudgetId, draft: BudgetDraft) -> StoreResult<Option<Budget>>;

    /// Deletes a budget. Returns false if it did not exist.
    async fn delete_budget(&self, id: BudgetId) -> StoreResult<bool>;
}

/// Sorts transactions newest date first, most recently created first on ties.
pub(crate) fn sort_transactions(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| {
        b.date
            .cmp(&a.date)
            .then_with(|| b.created_at.cmp(&a.created_at))
            .then_with(|| b.id.cmp(&a.id))
    });
}

/// Sorts budgets newest month first, then by category label.
pub(crate) fn sort_budgets(budgets: &mut [Budget]) {
    budgets.sort_by(|a, b| {
        b.month
            .cmp(&a.month)
            .then_with(|| a.category.label().cmp(b.category.label()))
    });
}
