//! Defines the transaction store trait and its implementations.
//!
//! Handlers receive a [SharedStore] through axum state, so the store is
//! constructed once at startup and injected rather than held globally.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::transaction::{NewTransaction, Transaction, TransactionUpdate},
};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgTransactionStore;

/// The store handle shared by every request.
pub type SharedStore = Arc<dyn TransactionStore>;

/// Handles the creation, retrieval and modification of transactions.
///
/// Each operation touches at most one record and is atomic on its own.
/// Nothing coordinates concurrent writes to the same record.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;

    /// Retrieve every stored transaction in no particular order.
    async fn all(&self) -> Result<Vec<Transaction>, AppError>;

    /// Retrieve transactions in the way defined by `query`.
    async fn list(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, AppError>;

    /// Store a new transaction and return it with its assigned id.
    async fn insert(&self, transaction: NewTransaction) -> Result<Transaction, AppError>;

    /// Retrieve a single transaction.
    async fn get(&self, id: Uuid) -> Result<Option<Transaction>, AppError>;

    /// Merge `update` into the transaction with `id`.
    ///
    /// Returns whether a transaction with `id` exists. An update that leaves
    /// every value unchanged still returns `true`.
    async fn update(&self, id: Uuid, update: &TransactionUpdate) -> Result<bool, AppError>;

    /// Delete the transaction with `id`, returning whether it existed.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}

/// Defines how transactions should be fetched from [TransactionStore::list].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionQuery {
    /// Only include transactions tagged with this email (exact match).
    pub user_email: Option<String>,
    pub sort_by: SortField,
    pub order: SortOrder,
}

impl TransactionQuery {
    /// All transactions belonging to `user_email`.
    pub fn for_user(user_email: &str) -> Self {
        Self {
            user_email: Some(user_email.to_string()),
            ..Default::default()
        }
    }
}

/// The field to sort transactions by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Date,
    Amount,
}

impl SortField {
    pub fn column(self) -> &'static str {
        match self {
            SortField::Date => "date",
            SortField::Amount => "amount",
        }
    }
}

/// The order to sort transactions in a [TransactionQuery].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Sort in order of increasing value.
    Asc,
    /// Sort in order of decreasing value.
    #[default]
    Desc,
}

impl SortOrder {
    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}
