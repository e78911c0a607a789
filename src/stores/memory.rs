//! An in-memory [TransactionStore] for exercising handlers without PostgreSQL.

use std::cmp::Ordering;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::AppError,
    models::transaction::{NewTransaction, Transaction, TransactionUpdate},
    stores::{SortField, SortOrder, TransactionQuery, TransactionStore},
};

/// Keeps transactions in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryTransactionStore {
    transactions: RwLock<Vec<Transaction>>,
}

impl InMemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn all(&self) -> Result<Vec<Transaction>, AppError> {
        Ok(self.transactions.read().await.clone())
    }

    async fn list(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, AppError> {
        let mut matching: Vec<Transaction> = self
            .transactions
            .read()
            .await
            .iter()
            .filter(|t| match &query.user_email {
                Some(email) => &t.user_email == email,
                None => true,
            })
            .cloned()
            .collect();

        // Stable sort, so ties keep insertion order like the SQL tie-breaker
        matching.sort_by(|a, b| {
            let ordering = match query.sort_by {
                SortField::Date => a.date.cmp(&b.date),
                SortField::Amount => a.amount.total_cmp(&b.amount),
            };

            match query.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        if query.order == SortOrder::Desc {
            reverse_ties(&mut matching, query.sort_by);
        }

        Ok(matching)
    }

    async fn insert(&self, transaction: NewTransaction) -> Result<Transaction, AppError> {
        let transaction = Transaction {
            id: Uuid::new_v4(),
            amount: transaction.amount,
            kind: transaction.kind,
            category: transaction.category,
            date: transaction.date,
            description: transaction.description,
            user_email: transaction.user_email,
        };

        self.transactions.write().await.push(transaction.clone());

        Ok(transaction)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Transaction>, AppError> {
        Ok(self
            .transactions
            .read()
            .await
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    async fn update(&self, id: Uuid, update: &TransactionUpdate) -> Result<bool, AppError> {
        let mut transactions = self.transactions.write().await;

        match transactions.iter_mut().find(|t| t.id == id) {
            Some(transaction) => {
                apply_update(transaction, update);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let mut transactions = self.transactions.write().await;
        let count_before = transactions.len();
        transactions.retain(|t| t.id != id);

        Ok(transactions.len() < count_before)
    }
}

/// Merge the present fields of `update`, like the COALESCE update in SQL.
fn apply_update(transaction: &mut Transaction, update: &TransactionUpdate) {
    if let Some(amount) = update.amount {
        transaction.amount = amount;
    }
    if let Some(kind) = &update.kind {
        transaction.kind = kind.clone();
    }
    if let Some(category) = &update.category {
        transaction.category = category.clone();
    }
    if let Some(date) = &update.date {
        transaction.date = date.clone();
    }
    if let Some(description) = &update.description {
        transaction.description = Some(description.clone());
    }
    if let Some(user_email) = &update.user_email {
        transaction.user_email = user_email.clone();
    }
}

/// Descending order in SQL also reverses the insertion-order tie-breaker.
fn reverse_ties(transactions: &mut [Transaction], sort_by: SortField) {
    let same_key = |a: &Transaction, b: &Transaction| match sort_by {
        SortField::Date => a.date == b.date,
        SortField::Amount => a.amount.total_cmp(&b.amount) == Ordering::Equal,
    };

    let mut start = 0;
    while start < transactions.len() {
        let mut end = start + 1;
        while end < transactions.len() && same_key(&transactions[start], &transactions[end]) {
            end += 1;
        }
        transactions[start..end].reverse();
        start = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_transaction(amount: f64, date: &str, user_email: &str) -> NewTransaction {
        NewTransaction {
            amount,
            kind: "Expense".to_string(),
            category: "Food".to_string(),
            date: date.to_string(),
            description: None,
            user_email: user_email.to_string(),
        }
    }

    async fn seeded_store() -> InMemoryTransactionStore {
        let store = InMemoryTransactionStore::new();
        for (amount, date, email) in [
            (30.0, "2024-01-10", "a@x.com"),
            (10.0, "2024-03-01", "a@x.com"),
            (20.0, "2024-02-15", "b@x.com"),
        ] {
            store
                .insert(new_transaction(amount, date, email))
                .await
                .unwrap();
        }
        store
    }

    #[tokio::test]
    async fn default_query_sorts_by_date_descending() {
        let store = seeded_store().await;

        let dates: Vec<String> = store
            .list(&TransactionQuery::default())
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.date)
            .collect();

        assert_eq!(dates, ["2024-03-01", "2024-02-15", "2024-01-10"]);
    }

    #[tokio::test]
    async fn filters_by_exact_user_email() {
        let store = seeded_store().await;

        let transactions = store
            .list(&TransactionQuery::for_user("a@x.com"))
            .await
            .unwrap();

        assert_eq!(transactions.len(), 2);
        assert!(transactions.iter().all(|t| t.user_email == "a@x.com"));
        assert!(
            store
                .list(&TransactionQuery::for_user("A@x.com"))
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn equal_keys_keep_insertion_order_ascending_and_reverse_descending() {
        let store = InMemoryTransactionStore::new();
        let first = store
            .insert(new_transaction(5.0, "2024-01-01", "a@x.com"))
            .await
            .unwrap();
        let second = store
            .insert(new_transaction(5.0, "2024-01-01", "a@x.com"))
            .await
            .unwrap();

        let ascending = store
            .list(&TransactionQuery {
                sort_by: SortField::Amount,
                order: SortOrder::Asc,
                ..Default::default()
            })
            .await
            .unwrap();
        let descending = store
            .list(&TransactionQuery {
                sort_by: SortField::Amount,
                order: SortOrder::Desc,
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(ascending[0].id, first.id);
        assert_eq!(descending[0].id, second.id);
    }

    #[tokio::test]
    async fn all_returns_every_owner() {
        let store = seeded_store().await;

        let mut amounts: Vec<f64> = store
            .all()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.amount)
            .collect();
        amounts.sort_by(f64::total_cmp);

        assert_eq!(amounts, [10.0, 20.0, 30.0]);
    }

    #[tokio::test]
    async fn update_changes_only_present_fields() {
        let store = InMemoryTransactionStore::new();
        let before = store
            .insert(new_transaction(10.0, "2024-02-01", "a@x.com"))
            .await
            .unwrap();

        let update = TransactionUpdate {
            amount: Some(12.0),
            description: Some("Lunch".to_string()),
            ..Default::default()
        };
        assert!(store.update(before.id, &update).await.unwrap());

        let after = store.get(before.id).await.unwrap().unwrap();
        assert_eq!(after.amount, 12.0);
        assert_eq!(after.description.as_deref(), Some("Lunch"));
        assert_eq!(after.category, before.category);
        assert_eq!(after.date, before.date);
        assert_eq!(after.user_email, before.user_email);
    }

    #[tokio::test]
    async fn update_and_delete_report_whether_the_record_exists() {
        let store = seeded_store().await;
        let id = store.list(&TransactionQuery::default()).await.unwrap()[0].id;

        assert!(store.update(id, &TransactionUpdate::default()).await.unwrap());
        assert!(store.delete(id).await.unwrap());
        assert!(!store.delete(id).await.unwrap());
        assert!(
            !store
                .update(id, &TransactionUpdate::default())
                .await
                .unwrap()
        );
        assert_eq!(store.get(id).await.unwrap(), None);
    }
}
