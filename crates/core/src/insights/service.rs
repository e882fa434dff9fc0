//! Insight derivation.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::types::{SpendingInsights, TopCategory};
use crate::aggregation::Aggregator;
use crate::budget::{Budget, BudgetComparator};
use crate::ledger::{Transaction, YearMonth};

/// Derives spending insights from a transaction and budget snapshot.
pub struct InsightDeriver;

impl InsightDeriver {
    /// Derives insights for the month containing `today`.
    ///
    /// The projection assumes spending continues at the month-to-date daily
    /// average; it ignores weekly patterns and one-off purchases.
    #[must_use]
    pub fn derive(
        transactions: &[Transaction],
        budgets: &[Budget],
        today: NaiveDate,
    ) -> SpendingInsights {
        let month = YearMonth::of(today);
        let current: Vec<Transaction> = Self::expenses_in(transactions, month);
        let current_total = Aggregator::expense_magnitude(&current);
        let previous_total =
            Aggregator::expense_magnitude(&Self::expenses_in(transactions, month.previous()));

        let elapsed_days = Decimal::from(today.day().max(1));
        let average_daily = current_total / elapsed_days;
        let projected = average_daily * Decimal::from(month.days_in_month());

        let budget_issues = BudgetComparator::compare_month(budgets, transactions, month)
            .into_iter()
            .filter(|c| c.needs_attention())
            .collect();

        SpendingInsights {
            month,
            current_month_total: current_total,
            previous_month_total: previous_total,
            monthly_change: Self::percent_change(previous_total, current_total),
            top_category: Self::top_category(&current),
            budget_issues,
            average_daily_spending: average_daily.round_dp(2),
            projected_monthly_spending: projected.round_dp(2),
        }
    }

    /// Percent change from `previous` to `current`, 2 dp.
    ///
    /// Returns 0 when `previous` is zero.
    #[must_use]
    pub fn percent_change(previous: Decimal, current: Decimal) -> Decimal {
        if previous.is_zero() {
            return Decimal::ZERO;
        }
        ((current - previous) / previous * Decimal::ONE_HUNDRED).round_dp(2)
    }

    fn expenses_in(transactions: &[Transaction], month: YearMonth) -> Vec<Transaction> {
        let window = month.window();
        transactions
            .iter()
            .filter(|t| t.is_expense() && window.contains(t.date))
            .cloned()
            .collect()
    }

    fn top_category(current: &[Transaction]) -> Option<TopCategory> {
        Aggregator::by_category(current)
            .into_iter()
            .next()
            .map(|top| TopCategory {
                category: top.category,
                total: -top.total,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::BudgetStatus;
    use crate::ledger::{Category, ExpenseCategory, IncomeCategory};
    use crate::test_support::{budget, date, expense, income};
    use rust_decimal_macros::dec;

    fn food() -> Category {
        ExpenseCategory::FoodAndDining.into()
    }

    fn shopping() -> Category {
        ExpenseCategory::Shopping.into()
    }

    #[test]
    fn test_empty_snapshot() {
        let insights = InsightDeriver::derive(&[], &[], date("2024-04-15"));

        assert_eq!(insights.month.to_string(), "2024-04");
        assert_eq!(insights.current_month_total, dec!(0));
        assert_eq!(insights.monthly_change, dec!(0));
        assert!(insights.top_category.is_none());
        assert!(insights.budget_issues.is_empty());
        assert_eq!(insights.average_daily_spending, dec!(0));
        assert_eq!(insights.projected_monthly_spending, dec!(0));
    }

    #[test]
    fn test_zero_previous_month_gives_zero_change() {
        let transactions = vec![expense(dec!(120), food(), "2024-04-02")];

        let insights = InsightDeriver::derive(&transactions, &[], date("2024-04-10"));

        assert_eq!(insights.previous_month_total, dec!(0));
        assert_eq!(insights.monthly_change, dec!(0));
    }

    #[test]
    fn test_monthly_change_percent() {
        let transactions = vec![
            expense(dec!(200), food(), "2024-03-20"),
            expense(dec!(250), food(), "2024-04-02"),
            income(dec!(5000), IncomeCategory::Salary, "2024-04-01"),
        ];

        let insights = InsightDeriver::derive(&transactions, &[], date("2024-04-10"));

        assert_eq!(insights.current_month_total, dec!(250));
        assert_eq!(insights.previous_month_total, dec!(200));
        assert_eq!(insights.monthly_change, dec!(25));
    }

    #[test]
    fn test_january_compares_with_previous_december() {
        let transactions = vec![
            expense(dec!(100), food(), "2023-12-31"),
            expense(dec!(50), food(), "2024-01-01"),
        ];

        let insights = InsightDeriver::derive(&transactions, &[], date("2024-01-05"));

        assert_eq!(insights.previous_month_total, dec!(100));
        assert_eq!(insights.monthly_change, dec!(-50));
    }

    #[test]
    fn test_projection_is_linear() {
        // 150 over 15 days of a 30-day month.
        let transactions = vec![
            expense(dec!(100), food(), "2024-06-03"),
            expense(dec!(50), shopping(), "2024-06-15"),
        ];

        let insights = InsightDeriver::derive(&transactions, &[], date("2024-06-15"));

        assert_eq!(insights.average_daily_spending, dec!(10));
        assert_eq!(insights.projected_monthly_spending, dec!(300));
    }

    #[test]
    fn test_projection_rounds_after_full_precision() {
        let transactions = vec![expense(dec!(100), food(), "2024-01-02")];

        let insights = InsightDeriver::derive(&transactions, &[], date("2024-01-03"));

        assert_eq!(insights.average_daily_spending, dec!(33.33));
        assert_eq!(insights.projected_monthly_spending, dec!(1033.33));
    }

    #[test]
    fn test_top_category_and_tie_break() {
        let transactions = vec![
            expense(dec!(40), shopping(), "2024-05-01"),
            expense(dec!(40), food(), "2024-05-02"),
            expense(dec!(500), shopping(), "2024-04-30"),
        ];

        let top = InsightDeriver::derive(&transactions, &[], date("2024-05-20"))
            .top_category
            .unwrap();

        assert_eq!(top.category, food());
        assert_eq!(top.total, dec!(40));
    }

    #[test]
    fn test_budget_issues_only_flag_current_month() {
        let budgets = vec![
            budget(ExpenseCategory::FoodAndDining, dec!(100), "2024-05"),
            budget(ExpenseCategory::Shopping, dec!(100), "2024-05"),
            budget(ExpenseCategory::FoodAndDining, dec!(10), "2024-04"),
        ];
        let transactions = vec![
            expense(dec!(85), food(), "2024-05-03"),
            expense(dec!(20), shopping(), "2024-05-04"),
            expense(dec!(90), food(), "2024-04-04"),
        ];

        let insights = InsightDeriver::derive(&transactions, &budgets, date("2024-05-20"));

        assert_eq!(insights.budget_issues.len(), 1);
        assert_eq!(insights.budget_issues[0].budget_id, budgets[0].id);
        assert_eq!(insights.budget_issues[0].status, BudgetStatus::Warning);
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(InsightDeriver::percent_change(dec!(0), dec!(10)), dec!(0));
        assert_eq!(InsightDeriver::percent_change(dec!(300), dec!(100)), dec!(-66.67));
    }
}
