//! `SeaORM` store over Postgres.

use async_trait::async_trait;
use chrono::Utc;
use pocketbook_core::budget::{Budget, BudgetDraft};
use pocketbook_core::ledger::{
    Category, ExpenseCategory, Transaction, TransactionDraft, TransactionFilter, TransactionKind,
    YearMonth,
};
use pocketbook_shared::types::{BudgetId, TransactionId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter,
    QueryOrder, Set, SqlErr,
};
use tracing::debug;

use crate::entities::{budgets, transactions};
use crate::store::{BudgetFilter, LedgerStore, StoreError, StoreResult, sort_budgets};

/// Ledger store backed by a Postgres connection pool.
#[derive(Debug, Clone)]
pub struct PgStore {
    db: DatabaseConnection,
}

impl PgStore {
    /// Creates a store over an open connection.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

fn transaction_from_model(model: transactions::Model) -> StoreResult<Transaction> {
    let corrupt =
        |e: &dyn std::fmt::Display| StoreError::Corrupt(format!("transaction {}: {e}", model.id));
    let kind: TransactionKind = model.kind.parse().map_err(|e| corrupt(&e))?;
    let amount = kind.magnitude_of(model.amount).map_err(|e| corrupt(&e))?;
    // Unrecognized labels read back as uncategorized.
    let category = model
        .category
        .as_deref()
        .and_then(|label| label.parse::<Category>().ok());

    Ok(Transaction {
        id: TransactionId::from_uuid(model.id),
        amount,
        description: model.description,
        date: model.date,
        kind,
        category,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

fn transaction_to_active(transaction: &Transaction) -> transactions::ActiveModel {
    transactions::ActiveModel {
        id: Set(transaction.id.into_inner()),
        amount: Set(transaction.signed_amount()),
        description: Set(transaction.description.clone()),
        date: Set(transaction.date),
        kind: Set(transaction.kind.as_str().to_string()),
        category: Set(transaction.category.map(|c| c.label().to_string())),
        created_at: Set(transaction.created_at.into()),
        updated_at: Set(transaction.updated_at.into()),
    }
}

fn budget_from_model(model: budgets::Model) -> StoreResult<Budget> {
    let corrupt =
        |e: &dyn std::fmt::Display| StoreError::Corrupt(format!("budget {}: {e}", model.id));
    let category: ExpenseCategory = model.category.parse().map_err(|e| corrupt(&e))?;
    let month: YearMonth = model.month.parse().map_err(|e| corrupt(&e))?;

    Ok(Budget {
        id: BudgetId::from_uuid(model.id),
        category,
        monthly_limit: model.monthly_limit,
        month,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

fn budget_to_active(budget: &Budget) -> budgets::ActiveModel {
    budgets::ActiveModel {
        id: Set(budget.id.into_inner()),
        category: Set(budget.category.label().to_string()),
        monthly_limit: Set(budget.monthly_limit),
        month: Set(budget.month.to_string()),
        created_at: Set(budget.created_at.into()),
        updated_at: Set(budget.updated_at.into()),
    }
}

/// Maps a unique-index violation to `DuplicateBudget`.
fn budget_write_error(err: DbErr, draft: &BudgetDraft) -> StoreError {
    if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
        StoreError::DuplicateBudget {
            category: draft.category,
            month: draft.month,
        }
    } else {
        StoreError::Database(err)
    }
}

#[async_trait]
impl LedgerStore for PgStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn list_transactions(&self, filter: &TransactionFilter) -> StoreResult<Vec<Transaction>> {
        let mut condition = Condition::all();
        if let Some(category) = filter.category {
            condition = condition.add(transactions::Column::Category.eq(category.label()));
        }
        if let Some(kind) = filter.kind {
            condition = condition.add(transactions::Column::Kind.eq(kind.as_str()));
        }
        if let Some(from) = filter.from {
            condition = condition.add(transactions::Column::Date.gte(from));
        }
        if let Some(to) = filter.to {
            condition = condition.add(transactions::Column::Date.lte(to));
        }
        if let Some(before) = filter.before {
            condition = condition.add(transactions::Column::Date.lt(before));
        }

        let models = transactions::Entity::find()
            .filter(condition)
            .order_by_desc(transactions::Column::Date)
            .order_by_desc(transactions::Column::CreatedAt)
            .order_by_desc(transactions::Column::Id)
            .all(&self.db)
            .await?;

        models.into_iter().map(transaction_from_model).collect()
    }

    async fn get_transaction(&self, id: TransactionId) -> StoreResult<Option<Transaction>> {
        transactions::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .map(transaction_from_model)
            .transpose()
    }

    async fn create_transaction(&self, draft: TransactionDraft) -> StoreResult<Transaction> {
        let transaction = Transaction::from_draft(TransactionId::new(), draft, Utc::now());
        let model = transaction_to_active(&transaction).insert(&self.db).await?;
        debug!(id = %transaction.id, "Inserted transaction");
        transaction_from_model(model)
    }

    async fn update_transaction(
        &self,
        id: TransactionId,
        draft: TransactionDraft,
    ) -> StoreResult<Option<Transaction>> {
        let Some(existing) = self.get_transaction(id).await? else {
            return Ok(None);
        };
        let updated = existing.replaced_by(draft, Utc::now());
        let model = transaction_to_active(&updated).update(&self.db).await?;
        debug!(id = %id, "Updated transaction");
        transaction_from_model(model).map(Some)
    }

    async fn delete_transaction(&self, id: TransactionId) -> StoreResult<bool> {
        let result = transactions::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    async fn list_budgets(&self, filter: &BudgetFilter) -> StoreResult<Vec<Budget>> {
        let mut query = budgets::Entity::find();
        if let Some(month) = filter.month {
            query = query.filter(budgets::Column::Month.eq(month.to_string()));
        }

        let models = query.all(&self.db).await?;
        let mut budgets = models
            .into_iter()
            .map(budget_from_model)
            .collect::<StoreResult<Vec<_>>>()?;
        sort_budgets(&mut budgets);
        Ok(budgets)
    }

    async fn get_budget(&self, id: BudgetId) -> StoreResult<Option<Budget>> {
        budgets::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .map(budget_from_model)
            .transpose()
    }

    async fn create_budget(&self, draft: BudgetDraft) -> StoreResult<Budget> {
        let budget = Budget::from_draft(BudgetId::new(), draft.clone(), Utc::now());
        let model = budget_to_active(&budget)
            .insert(&self.db)
            .await
            .map_err(|e| budget_write_error(e, &draft))?;
        debug!(
            id = %budget.id,
            category = %budget.category,
            month = %budget.month,
            "Inserted budget"
        );
        budget_from_model(model)
    }

    async fn update_budget(&self, id: BudgetId, draft: BudgetDraft) -> StoreResult<Option<Budget>> {
        let Some(existing) = self.get_budget(id).await? else {
            return Ok(None);
        };
        let updated = existing.replaced_by(draft.clone(), Utc::now());
        let model = budget_to_active(&updated)
            .update(&self.db)
            .await
            .map_err(|e| budget_write_error(e, &draft))?;
        debug!(id = %id, "Updated budget");
        budget_from_model(model).map(Some)
    }

    async fn delete_budget(&self, id: BudgetId) -> StoreResult<bool> {
        let result = budgets::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
