//! Budget vs actual comparison.

use rayon::prelude::*;
use rust_decimal::Decimal;

use super::types::{Budget, BudgetComparison, BudgetStatus};
use crate::aggregation::Aggregator;
use crate::ledger::{Category, Transaction, YearMonth};

/// Compares budgets with the expenses recorded against them.
pub struct BudgetComparator;

impl BudgetComparator {
    /// Compares one budget with a transaction snapshot.
    ///
    /// Spent is the sum of expense magnitudes whose category matches the
    /// budget's (absent categories count towards `Other`) and whose date
    /// falls in the budget's month.
    #[must_use]
    pub fn compare(budget: &Budget, transactions: &[Transaction]) -> BudgetComparison {
        let window = budget.window();
        let category = Category::from(budget.category);
        let spent = Aggregator::expense_magnitude(
            transactions
                .iter()
                .filter(|t| t.category_or_other() == category && window.contains(t.date)),
        );

        let limit = budget.monthly_limit;
        let percentage = if limit > Decimal::ZERO {
            (spent / limit * Decimal::ONE_HUNDRED).round_dp(2)
        } else {
            Decimal::ZERO
        };

        BudgetComparison {
            budget_id: budget.id,
            category: budget.category,
            month: budget.month,
            monthly_limit: limit,
            spent,
            remaining: limit - spent,
            percentage,
            progress: percentage.min(Decimal::ONE_HUNDRED),
            status: BudgetStatus::classify(spent, limit),
        }
    }

    /// Compares every budget, preserving input order.
    #[must_use]
    pub fn compare_all(budgets: &[Budget], transactions: &[Transaction]) -> Vec<BudgetComparison> {
        budgets
            .par_iter()
            .map(|budget| Self::compare(budget, transactions))
            .collect()
    }

    /// Compares the budgets that cover `month`.
    #[must_use]
    pub fn compare_month(
        budgets: &[Budget],
        transactions: &[Transaction],
        month: YearMonth,
    ) -> Vec<BudgetComparison> {
        let in_month: Vec<Budget> = budgets
            .iter()
            .filter(|b| b.month == month)
            .cloned()
            .collect();
        Self::compare_all(&in_month, transactions)
    }
}
