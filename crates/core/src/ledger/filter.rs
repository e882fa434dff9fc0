//! Predicate used to select transactions from a store.

use chrono::NaiveDate;

use super::category::Category;
use super::period::MonthWindow;
use super::types::{Transaction, TransactionKind};

/// Transaction selection criteria. Every `None` field matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    /// Exact category.
    pub category: Option<Category>,
    /// Income or expense.
    pub kind: Option<TransactionKind>,
    /// Earliest date (inclusive).
    pub from: Option<NaiveDate>,
    /// Latest date (inclusive).
    pub to: Option<NaiveDate>,
    /// Exclusive upper bound on the date.
    pub before: Option<NaiveDate>,
}

impl TransactionFilter {
    /// Expenses only.
    #[must_use]
    pub fn expenses() -> Self {
        Self {
            kind: Some(TransactionKind::Expense),
            ..Self::default()
        }
    }

    /// Restricts the filter to a month window.
    #[must_use]
    pub fn within(mut self, window: MonthWindow) -> Self {
        self.from = Some(window.start);
        self.before = Some(window.end);
        self
    }

    /// Returns true if the transaction satisfies every criterion.
    #[must_use]
    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.category.is_none_or(|c| transaction.category == Some(c))
            && self.kind.is_none_or(|k| transaction.kind == k)
            && self.from.is_none_or(|d| transaction.date >= d)
            && self.to.is_none_or(|d| transaction.date <= d)
            && self.before.is_none_or(|d| transaction.date < d)
    }
}
