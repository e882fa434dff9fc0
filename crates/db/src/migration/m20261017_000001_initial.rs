//! Initial database migration.
//!
//! Creates the transactions and budgets tables with their indexes.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(TRANSACTIONS_SQL).await?;
        db.execute_unprepared(BUDGETS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared("DROP TABLE IF EXISTS budgets CASCADE;")
            .await?;
        db.execute_unprepared("DROP TABLE IF EXISTS transactions CASCADE;")
            .await?;
        Ok(())
    }
}

const TRANSACTIONS_SQL: &str = r"
-- Signed amounts: expenses negative, income positive
CREATE TABLE transactions (
    id UUID PRIMARY KEY,
    amount NUMERIC(14, 2) NOT NULL,
    description VARCHAR(200) NOT NULL,
    date DATE NOT NULL,
    type VARCHAR(16) NOT NULL,
    category VARCHAR(32),
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_transactions_type CHECK (type IN ('income', 'expense')),
    CONSTRAINT chk_transactions_sign CHECK (
        (type = 'income' AND amount >= 0) OR (type = 'expense' AND amount <= 0)
    )
);

CREATE INDEX idx_transactions_date ON transactions(date DESC);
CREATE INDEX idx_transactions_category_date ON transactions(category, date DESC);
CREATE INDEX idx_transactions_type_date ON transactions(type, date DESC);
";

const BUDGETS_SQL: &str = r"
CREATE TABLE budgets (
    id UUID PRIMARY KEY,
    category VARCHAR(32) NOT NULL,
    monthly_limit NUMERIC(14, 2) NOT NULL,
    month CHAR(7) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_budgets_limit_positive CHECK (monthly_limit > 0),
    CONSTRAINT chk_budgets_month_format CHECK (month ~ '^[0-9]{4}-(0[1-9]|1[0-2])$'),
    CONSTRAINT uq_budgets_month_category UNIQUE (month, category)
);

CREATE INDEX idx_budgets_month ON budgets(month DESC);
";
