//! Grouping and summing of transactions.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use super::types::{
    CategoryTotal, DailyTotal, LedgerSummary, MonthCategoryTotal, MonthTotal, MonthlyTrend,
    SortOrder,
};
use crate::ledger::{Transaction, TransactionKind, YearMonth};

/// Pure aggregation functions over a transaction snapshot.
pub struct Aggregator;

impl Aggregator {
    /// Sums signed expense amounts per key.
    ///
    /// Income transactions are ignored. The map iterates in key order.
    pub fn group_by<K, F>(transactions: &[Transaction], key: F) -> BTreeMap<K, Decimal>
    where
        K: Ord,
        F: Fn(&Transaction) -> K,
    {
        let mut totals = BTreeMap::new();
        for transaction in transactions.iter().filter(|t| t.is_expense()) {
            *totals.entry(key(transaction)).or_insert(Decimal::ZERO) += transaction.signed_amount();
        }
        totals
    }

    /// Expense totals per category, largest spend first.
    ///
    /// Ties are broken by category label.
    #[must_use]
    pub fn by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
        let mut totals: Vec<CategoryTotal> =
            Self::group_by(transactions, Transaction::category_or_other)
                .into_iter()
                .map(|(category, total)| CategoryTotal { category, total })
                .collect();

        totals.sort_by(|a, b| {
            b.total
                .abs()
                .cmp(&a.total.abs())
                .then_with(|| a.category.cmp(&b.category))
        });
        totals
    }

    /// Expense totals per month, in the requested chronological order.
    #[must_use]
    pub fn by_month(transactions: &[Transaction], order: SortOrder) -> Vec<MonthTotal> {
        let mut totals: Vec<MonthTotal> = Self::group_by(transactions, |t| YearMonth::of(t.date))
            .into_iter()
            .map(|(month, total)| MonthTotal { month, total })
            .collect();

        order.arrange(&mut totals);
        totals
    }

    /// Expense totals per (month, category).
    ///
    /// Months follow `order`; within a month the largest spend comes first.
    #[must_use]
    pub fn by_month_and_category(
        transactions: &[Transaction],
        order: SortOrder,
    ) -> Vec<MonthCategoryTotal> {
        let mut totals: Vec<MonthCategoryTotal> = Self::group_by(transactions, |t| {
            (YearMonth::of(t.date), t.category_or_other())
        })
        .into_iter()
        .map(|((month, category), total)| MonthCategoryTotal {
            month,
            category,
            total,
        })
        .collect();

        totals.sort_by(|a, b| {
            let by_month = match order {
                SortOrder::Ascending => a.month.cmp(&b.month),
                SortOrder::Descending => b.month.cmp(&a.month),
            };
            by_month
                .then_with(|| b.total.abs().cmp(&a.total.abs()))
                .then_with(|| a.category.cmp(&b.category))
        });
        totals
    }

    /// Parallel income and expense sums per month.
    #[must_use]
    pub fn monthly_trends(transactions: &[Transaction], order: SortOrder) -> Vec<MonthlyTrend> {
        let mut months: BTreeMap<YearMonth, (Decimal, Decimal)> = BTreeMap::new();
        for transaction in transactions {
            let (income, expense) = months
                .entry(YearMonth::of(transaction.date))
                .or_insert((Decimal::ZERO, Decimal::ZERO));
            match transaction.kind {
                TransactionKind::Income => *income += transaction.signed_amount(),
                TransactionKind::Expense => *expense += transaction.signed_amount(),
            }
        }

        let mut trends: Vec<MonthlyTrend> = months
            .into_iter()
            .map(|(month, (income, expense))| MonthlyTrend {
                month,
                income,
                expense,
            })
            .collect();

        order.arrange(&mut trends);
        trends
    }

    /// Spend per calendar day of `month`, one entry per day in date order.
    ///
    /// Days without expenses are present with a zero amount.
    #[must_use]
    pub fn daily_expenses(transactions: &[Transaction], month: YearMonth) -> Vec<DailyTotal> {
        let window = month.window();
        let mut days: BTreeMap<chrono::NaiveDate, Decimal> = window
            .start
            .iter_days()
            .take_while(|day| window.contains(*day))
            .map(|day| (day, Decimal::ZERO))
            .collect();

        for transaction in transactions
            .iter()
            .filter(|t| t.is_expense() && window.contains(t.date))
        {
            if let Some(spent) = days.get_mut(&transaction.date) {
                *spent += transaction.amount;
            }
        }

        days.into_iter()
            .map(|(date, spent)| DailyTotal { date, spent })
            .collect()
    }

    /// All-time income, expense and net totals.
    #[must_use]
    pub fn summary(transactions: &[Transaction]) -> LedgerSummary {
        let total_income: Decimal = transactions
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .map(|t| t.amount)
            .sum();
        let total_expenses = Self::expense_magnitude(transactions);

        LedgerSummary {
            total_income,
            total_expenses,
            net_balance: total_income - total_expenses,
            transaction_count: transactions.len(),
        }
    }

    /// Sum of expense magnitudes (non-negative).
    #[must_use]
    pub fn expense_magnitude<'a, I>(transactions: I) -> Decimal
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        transactions
            .into_iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{Category, ExpenseCategory, IncomeCategory};
    use crate::test_support::{expense, income, uncategorized_expense};
    use rust_decimal_macros::dec;

    fn food() -> Category {
        ExpenseCategory::FoodAndDining.into()
    }

    fn travel() -> Category {
        ExpenseCategory::Travel.into()
    }

    #[test]
    fn test_empty_input() {
        assert!(Aggregator::by_category(&[]).is_empty());
        assert!(Aggregator::by_month(&[], SortOrder::Ascending).is_empty());
        assert!(Aggregator::by_month_and_category(&[], SortOrder::Descending).is_empty());
        assert!(Aggregator::monthly_trends(&[], SortOrder::Ascending).is_empty());
    }

    #[test]
    fn test_by_category_sums_signed_and_sorts_by_spend() {
        let transactions = vec![
            expense(dec!(20), food(), "2024-01-03"),
            expense(dec!(100), travel(), "2024-01-04"),
            expense(dec!(15), food(), "2024-02-01"),
            income(dec!(3000), IncomeCategory::Salary, "2024-01-01"),
        ];

        let totals = Aggregator::by_category(&transactions);

        assert_eq!(
            totals,
            vec![
                CategoryTotal {
                    category: travel(),
                    total: dec!(-100),
                },
                CategoryTotal {
                    category: food(),
                    total: dec!(-35),
                },
            ]
        );
    }

    #[test]
    fn test_absent_category_buckets_under_other() {
        let transactions = vec![
            uncategorized_expense(dec!(7), "2024-01-03"),
            expense(dec!(3), ExpenseCategory::Other.into(), "2024-01-04"),
        ];

        let totals = Aggregator::by_category(&transactions);

        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].category.label(), "Other");
        assert_eq!(totals[0].total, dec!(-10));
    }

    #[test]
    fn test_by_month_respects_order() {
        let transactions = vec![
            expense(dec!(10), food(), "2024-02-10"),
            expense(dec!(5), food(), "2023-12-31"),
            expense(dec!(1), food(), "2024-01-01"),
        ];

        let ascending: Vec<String> = Aggregator::by_month(&transactions, SortOrder::Ascending)
            .iter()
            .map(|m| m.month.to_string())
            .collect();
        assert_eq!(ascending, vec!["2023-12", "2024-01", "2024-02"]);

        let descending: Vec<String> = Aggregator::by_month(&transactions, SortOrder::Descending)
            .iter()
            .map(|m| m.month.to_string())
            .collect();
        assert_eq!(descending, vec!["2024-02", "2024-01", "2023-12"]);
    }

    #[test]
    fn test_by_month_and_category_ordering() {
        let transactions = vec![
            expense(dec!(10), food(), "2024-01-10"),
            expense(dec!(50), travel(), "2024-01-11"),
            expense(dec!(5), food(), "2024-02-01"),
        ];

        let totals = Aggregator::by_month_and_category(&transactions, SortOrder::Descending);

        let rows: Vec<(String, &str, Decimal)> = totals
            .iter()
            .map(|t| (t.month.to_string(), t.category.label(), t.total))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("2024-02".to_string(), "Food & Dining", dec!(-5)),
                ("2024-01".to_string(), "Travel", dec!(-50)),
                ("2024-01".to_string(), "Food & Dining", dec!(-10)),
            ]
        );
    }

    #[test]
    fn test_monthly_trends_parallel_sums() {
        let transactions = vec![
            income(dec!(3000), IncomeCategory::Salary, "2024-01-01"),
            expense(dec!(200), food(), "2024-01-15"),
            expense(dec!(50), travel(), "2024-02-02"),
        ];

        let trends = Aggregator::monthly_trends(&transactions, SortOrder::Ascending);

        assert_eq!(trends.len(), 2);
        assert_eq!(trends[0].income, dec!(3000));
        assert_eq!(trends[0].expense, dec!(-200));
        assert_eq!(trends[0].net(), dec!(2800));
        assert_eq!(trends[1].income, dec!(0));
        assert_eq!(trends[1].expense, dec!(-50));
    }

    #[test]
    fn test_expense_magnitude_ignores_income() {
        let transactions = vec![
            income(dec!(10), IncomeCategory::Gifts, "2024-01-01"),
            expense(dec!(4.25), food(), "2024-01-01"),
            expense(dec!(0.75), travel(), "2024-01-02"),
        ];
        assert_eq!(Aggregator::expense_magnitude(&transactions), dec!(5.00));
    }

    #[test]
    fn test_daily_expenses_covers_every_day() {
        let month: YearMonth = "2024-02".parse().unwrap();
        let transactions = vec![
            expense(dec!(12), food(), "2024-02-01"),
            expense(dec!(8), travel(), "2024-02-01"),
            expense(dec!(5), food(), "2024-02-29"),
            expense(dec!(99), food(), "2024-03-01"),
            income(dec!(500), IncomeCategory::Salary, "2024-02-10"),
        ];

        let daily = Aggregator::daily_expenses(&transactions, month);

        assert_eq!(daily.len(), 29);
        assert_eq!(daily[0].spent, dec!(20));
        assert_eq!(daily[9].spent, dec!(0));
        assert_eq!(daily[28].date.to_string(), "2024-02-29");
        assert_eq!(daily[28].spent, dec!(5));
    }

    #[test]
    fn test_summary_totals() {
        let transactions = vec![
            income(dec!(3000), IncomeCategory::Salary, "2024-01-01"),
            expense(dec!(200.50), food(), "2024-01-15"),
            uncategorized_expense(dec!(49.50), "2024-02-02"),
        ];

        let summary = Aggregator::summary(&transactions);

        assert_eq!(summary.total_income, dec!(3000));
        assert_eq!(summary.total_expenses, dec!(250.00));
        assert_eq!(summary.net_balance, dec!(2750.00));
        assert_eq!(summary.transaction_count, 3);
        assert_eq!(Aggregator::summary(&[]), LedgerSummary::default());
    }
}
