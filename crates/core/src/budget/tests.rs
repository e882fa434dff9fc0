//! Property-based tests for budget comparison.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::BudgetComparator;
use super::types::{Budget, BudgetStatus};
use crate::ledger::{ExpenseCategory, Transaction};
use crate::test_support::{budget, expense, expense_on};

fn budgets_strategy() -> impl Strategy<Value = Vec<Budget>> {
    prop::collection::vec(
        (0usize..ExpenseCategory::ALL.len(), 1i64..10_000_000, 1u32..=12),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(category, cents, month)| {
                let month = format!("2024-{month:02}");
                budget(ExpenseCategory::ALL[category], Decimal::new(cents, 2), &month)
            })
            .collect()
    })
}

fn transactions_strategy() -> impl Strategy<Value = Vec<Transaction>> {
    prop::collection::vec(
        (1i64..1_000_000, 0usize..ExpenseCategory::ALL.len(), 0u64..366),
        0..80,
    )
    .prop_map(|rows| {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        rows.into_iter()
            .map(|(cents, category, offset)| {
                expense_on(
                    Decimal::new(cents, 2),
                    ExpenseCategory::ALL[category],
                    start + Days::new(offset),
                )
            })
            .collect()
    })
}

proptest! {
    /// Remaining plus spent always equals the limit.
    #[test]
    fn test_remaining_balances(
        limit in 1i64..10_000_000,
        amounts in prop::collection::vec(1i64..1_000_000, 0..20),
    ) {
        let b = budget(ExpenseCategory::Shopping, Decimal::new(limit, 2), "2024-05");
        let transactions: Vec<_> = amounts
            .iter()
            .map(|cents| {
                expense(Decimal::new(*cents, 2), ExpenseCategory::Shopping.into(), "2024-05-15")
            })
            .collect();

        let cmp = BudgetComparator::compare(&b, &transactions);

        prop_assert!(cmp.spent >= Decimal::ZERO);
        prop_assert_eq!(cmp.remaining + cmp.spent, cmp.monthly_limit);
        prop_assert!(cmp.progress <= Decimal::ONE_HUNDRED);
        prop_assert!(cmp.progress <= cmp.percentage || cmp.progress == Decimal::ONE_HUNDRED);
    }

    /// Parallel comparison is a pure function of its input.
    #[test]
    fn test_compare_all_idempotent(
        budgets in budgets_strategy(),
        transactions in transactions_strategy(),
    ) {
        let (budgets_before, transactions_before) = (budgets.clone(), transactions.clone());

        let first = BudgetComparator::compare_all(&budgets, &transactions);
        let second = BudgetComparator::compare_all(&budgets, &transactions);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.len(), budgets.len());
        prop_assert_eq!(budgets, budgets_before);
        prop_assert_eq!(transactions, transactions_before);
    }

    /// Status agrees with the exact utilization ratio.
    #[test]
    fn test_status_matches_ratio(limit in 1i64..1_000_000, spent in 0i64..2_000_000) {
        let limit = Decimal::new(limit, 2);
        let spent = Decimal::new(spent, 2);
        let status = BudgetStatus::classify(spent, limit);

        let ratio = spent / limit;
        let expected = if ratio >= Decimal::ONE {
            BudgetStatus::Over
        } else if ratio >= dec!(0.8) {
            BudgetStatus::Warning
        } else {
            BudgetStatus::Good
        };
        prop_assert_eq!(status, expected);
    }

    /// Status never improves as spending grows.
    #[test]
    fn test_status_monotonic(
        limit in 1i64..1_000_000,
        a in 0i64..2_000_000,
        b in 0i64..2_000_000,
    ) {
        let limit = Decimal::new(limit, 2);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let rank = |s: BudgetStatus| match s {
            BudgetStatus::Good => 0,
            BudgetStatus::Warning => 1,
            BudgetStatus::Over => 2,
        };

        let low = BudgetStatus::classify(Decimal::new(low, 2), limit);
        let high = BudgetStatus::classify(Decimal::new(high, 2), limit);
        prop_assert!(rank(low) <= rank(high));
    }
}

#[test]
fn test_threshold_boundaries_are_inclusive() {
    assert_eq!(BudgetStatus::classify(dec!(79.99), dec!(100)), BudgetStatus::Good);
    assert_eq!(BudgetStatus::classify(dec!(80), dec!(100)), BudgetStatus::Warning);
    assert_eq!(BudgetStatus::classify(dec!(99.999), dec!(100)), BudgetStatus::Warning);
    assert_eq!(BudgetStatus::classify(dec!(100), dec!(100)), BudgetStatus::Over);
}

#[test]
fn test_non_positive_limit_is_good() {
    assert_eq!(BudgetStatus::classify(dec!(10), Decimal::ZERO), BudgetStatus::Good);
}
