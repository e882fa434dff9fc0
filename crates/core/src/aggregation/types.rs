//! Aggregation result types.
//!
//! Totals are sums of signed amounts: expense totals are negative, income
//! totals positive. Callers negate for display.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{Category, YearMonth};

/// Chronological ordering of month-bucketed output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Oldest month first.
    #[serde(alias = "asc")]
    Ascending,
    /// Newest month first.
    #[serde(alias = "desc")]
    Descending,
}

impl SortOrder {
    /// Reorders an ascending sequence into this order.
    pub(crate) fn arrange<T>(self, ascending: &mut [T]) {
        if self == Self::Descending {
            ascending.reverse();
        }
    }
}

/// Expense total for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    /// Category (absent categories are reported as `Other`).
    pub category: Category,
    /// Signed total.
    pub total: Decimal,
}

/// Expense total for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthTotal {
    /// Calendar month.
    pub month: YearMonth,
    /// Signed total.
    pub total: Decimal,
}

/// Expense total for one (month, category) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCategoryTotal {
    /// Calendar month.
    pub month: YearMonth,
    /// Category.
    pub category: Category,
    /// Signed total.
    pub total: Decimal,
}

/// Income and expense totals for one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    /// Calendar month.
    pub month: YearMonth,
    /// Sum of income amounts (positive).
    pub income: Decimal,
    /// Sum of expense amounts (negative).
    pub expense: Decimal,
}

impl MonthlyTrend {
    /// Income plus (negative) expense.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.income + self.expense
    }
}

/// Expense magnitude spent on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotal {
    /// Calendar day.
    pub date: NaiveDate,
    /// Unsigned amount spent.
    pub spent: Decimal,
}

/// All-time income and expense totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    /// Sum of income magnitudes.
    pub total_income: Decimal,
    /// Sum of expense magnitudes.
    pub total_expenses: Decimal,
    /// `total_income - total_expenses`.
    pub net_balance: Decimal,
    /// Number of transactions counted.
    pub transaction_count: usize,
}
