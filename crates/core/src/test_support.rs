//! Fixture builders shared by the unit and property tests.

use chrono::{NaiveDate, TimeZone, Utc};
use pocketbook_shared::types::{BudgetId, TransactionId};
use rust_decimal::Decimal;

use crate::budget::Budget;
use crate::ledger::{
    Category, ExpenseCategory, IncomeCategory, Transaction, TransactionKind, YearMonth,
};

pub fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

fn transaction(
    amount: Decimal,
    kind: TransactionKind,
    category: Option<Category>,
    on: NaiveDate,
) -> Transaction {
    let stamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Transaction {
        id: TransactionId::new(),
        amount,
        description: "fixture".to_string(),
        date: on,
        kind,
        category,
        created_at: stamp,
        updated_at: stamp,
    }
}

pub fn expense(amount: Decimal, category: Category, on: &str) -> Transaction {
    transaction(amount, TransactionKind::Expense, Some(category), date(on))
}

pub fn expense_on(amount: Decimal, category: ExpenseCategory, on: NaiveDate) -> Transaction {
    transaction(amount, TransactionKind::Expense, Some(category.into()), on)
}

pub fn uncategorized_expense(amount: Decimal, on: &str) -> Transaction {
    transaction(amount, TransactionKind::Expense, None, date(on))
}

pub fn income(amount: Decimal, category: IncomeCategory, on: &str) -> Transaction {
    transaction(amount, TransactionKind::Income, Some(category.into()), date(on))
}

pub fn budget(category: ExpenseCategory, limit: Decimal, month: &str) -> Budget {
    let stamp = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Budget {
        id: BudgetId::new(),
        category,
        monthly_limit: limit,
        month: month.parse::<YearMonth>().expect("valid test month"),
        created_at: stamp,
        updated_at: stamp,
    }
}
