//! Insight data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::BudgetComparison;
use crate::ledger::{Category, YearMonth};

/// Current-month category with the largest spend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopCategory {
    /// Category.
    pub category: Category,
    /// Unsigned amount spent this month.
    pub total: Decimal,
}

/// Derived observations about spending as of a reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingInsights {
    /// Month containing the reference date.
    pub month: YearMonth,
    /// Expense magnitude recorded this month.
    pub current_month_total: Decimal,
    /// Expense magnitude recorded the previous month.
    pub previous_month_total: Decimal,
    /// Percent change vs the previous month; 0 when the previous month is empty.
    pub monthly_change: Decimal,
    /// Largest spending category this month.
    pub top_category: Option<TopCategory>,
    /// This month's budgets at or above the warning threshold.
    pub budget_issues: Vec<BudgetComparison>,
    /// Spend per elapsed day of the month.
    pub average_daily_spending: Decimal,
    /// Linear extrapolation of the daily average to the whole month.
    pub projected_monthly_spending: Decimal,
}
