//! PostgreSQL implementation of [TransactionStore].

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppError,
    models::transaction::{NewTransaction, Transaction, TransactionUpdate},
    stores::{TransactionQuery, TransactionStore},
};

const COLUMNS: &str = "id, amount, type, category, date, description, user_email";

/// Stores transactions in the `transactions` table.
#[derive(Debug, Clone)]
pub struct PgTransactionStore {
    pool: DbPool,
}

impl PgTransactionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TransactionStore for PgTransactionStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;

        Ok(())
    }

    async fn all(&self) -> Result<Vec<Transaction>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM transactions");

        let transactions = sqlx::query_as::<_, Transaction>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(transactions)
    }

    async fn list(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, AppError> {
        // Column and direction come from closed enums, never from the request text.
        // Insertion order breaks ties so equal keys come back in a stable order.
        let sql = format!(
            r#"
            SELECT {COLUMNS}
            FROM transactions
            WHERE ($1::TEXT IS NULL OR user_email = $1)
            ORDER BY {column} {direction}, created_at {direction}
            "#,
            column = query.sort_by.column(),
            direction = query.order.keyword(),
        );

        let transactions = sqlx::query_as::<_, Transaction>(&sql)
            .bind(query.user_email.as_deref())
            .fetch_all(&self.pool)
            .await?;

        Ok(transactions)
    }

    async fn insert(&self, transaction: NewTransaction) -> Result<Transaction, AppError> {
        let sql = format!(
            r#"
            INSERT INTO transactions (amount, type, category, date, description, user_email)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {COLUMNS}
            "#
        );

        let transaction = sqlx::query_as::<_, Transaction>(&sql)
            .bind(transaction.amount)
            .bind(transaction.kind)
            .bind(transaction.category)
            .bind(transaction.date)
            .bind(transaction.description)
            .bind(transaction.user_email)
            .fetch_one(&self.pool)
            .await?;

        Ok(transaction)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Transaction>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM transactions WHERE id = $1");

        let transaction = sqlx::query_as::<_, Transaction>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(transaction)
    }

    async fn update(&self, id: Uuid, update: &TransactionUpdate) -> Result<bool, AppError> {
        // Postgres counts matched rows, so an unchanged record still reports 1
        let updated_count = sqlx::query(
            r#"
            UPDATE transactions
            SET amount = COALESCE($2, amount),
                type = COALESCE($3, type),
                category = COALESCE($4, category),
                date = COALESCE($5, date),
                description = COALESCE($6, description),
                user_email = COALESCE($7, user_email)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(update.amount)
        .bind(update.kind.as_deref())
        .bind(update.category.as_deref())
        .bind(update.date.as_deref())
        .bind(update.description.as_deref())
        .bind(update.user_email.as_deref())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(updated_count > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let deleted_count = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted_count > 0)
    }
}
