//! Budget data types.

use chrono::{DateTime, Utc};
use pocketbook_shared::types::BudgetId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{ExpenseCategory, MonthWindow, YearMonth};

/// A monthly spending limit for one expense category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Expense category the limit applies to.
    pub category: ExpenseCategory,
    /// Spending limit for the month.
    pub monthly_limit: Decimal,
    /// Month the budget covers.
    pub month: YearMonth,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Budget {
    /// Builds a new budget from a validated draft.
    #[must_use]
    pub fn from_draft(id: BudgetId, draft: BudgetDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            category: draft.category,
            monthly_limit: draft.monthly_limit,
            month: draft.month,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every user-editable field, keeping id and creation time.
    #[must_use]
    pub fn replaced_by(self, draft: BudgetDraft, now: DateTime<Utc>) -> Self {
        Self {
            created_at: self.created_at,
            ..Self::from_draft(self.id, draft, now)
        }
    }

    /// Date window the budget is compared against.
    #[must_use]
    pub fn window(&self) -> MonthWindow {
        self.month.window()
    }
}

/// User-supplied fields of a budget, for create and full replace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetDraft {
    /// Expense category.
    pub category: ExpenseCategory,
    /// Spending limit for the month.
    pub monthly_limit: Decimal,
    /// Month the budget covers.
    pub month: YearMonth,
}

/// Discrete classification of budget utilization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetStatus {
    /// Below the warning threshold.
    Good,
    /// At or above 80% of the limit.
    Warning,
    /// At or above 100% of the limit.
    Over,
}

impl BudgetStatus {
    /// Utilization percentage at which a budget turns `Warning`.
    pub const WARNING_THRESHOLD: Decimal = Decimal::from_parts(80, 0, 0, false, 0);
    /// Utilization percentage at which a budget turns `Over`.
    pub const OVER_THRESHOLD: Decimal = Decimal::ONE_HUNDRED;

    /// Classifies `spent` against `limit` on the exact ratio.
    ///
    /// Compares `spent * 100` with `limit * threshold` so rounding of the
    /// displayed percentage never moves a budget across a boundary. A
    /// non-positive limit is always `Good`.
    #[must_use]
    pub fn classify(spent: Decimal, limit: Decimal) -> Self {
        if limit <= Decimal::ZERO {
            return Self::Good;
        }
        let scaled = spent * Decimal::ONE_HUNDRED;
        if scaled >= limit * Self::OVER_THRESHOLD {
            Self::Over
        } else if scaled >= limit * Self::WARNING_THRESHOLD {
            Self::Warning
        } else {
            Self::Good
        }
    }
}

/// Budget vs actual for one budget's month window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetComparison {
    /// Budget ID.
    pub budget_id: BudgetId,
    /// Expense category.
    pub category: ExpenseCategory,
    /// Month compared.
    pub month: YearMonth,
    /// Spending limit.
    pub monthly_limit: Decimal,
    /// Sum of matching expense magnitudes (never negative).
    pub spent: Decimal,
    /// `monthly_limit - spent`; negative when over budget.
    pub remaining: Decimal,
    /// Unclamped utilization, `spent / monthly_limit * 100`, 2 dp.
    pub percentage: Decimal,
    /// Utilization clamped to 100, for progress bars.
    pub progress: Decimal,
    /// Utilization class.
    pub status: BudgetStatus,
}

impl BudgetComparison {
    /// Returns true when the budget should appear in the alert feed.
    #[must_use]
    pub fn needs_attention(&self) -> bool {
        self.status != BudgetStatus::Good
    }
}
