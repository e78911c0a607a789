//! Transaction service - validation and store access for single records.
//!
//! Every operation is one request against the store. Nothing is cached or
//! held between calls.

use uuid::Uuid;

use crate::{
    error::AppError,
    models::transaction::{
        CreateTransactionRequest, ListTransactionsQuery, Transaction, UpdateTransactionRequest,
    },
    stores::{TransactionQuery, TransactionStore},
};

/// Parse a path id.
///
/// A string that is not a valid id cannot match any record, so it is
/// reported as `TransactionNotFound` rather than a bad request.
pub fn parse_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::TransactionNotFound)
}

/// List transactions, optionally for one user, in the requested order.
///
/// Defaults to sorting by date, newest first. An empty `userEmail` means no filter.
pub async fn list_transactions(
    store: &dyn TransactionStore,
    query: ListTransactionsQuery,
) -> Result<Vec<Transaction>, AppError> {
    let query = TransactionQuery {
        user_email: query.user_email.filter(|email| !email.is_empty()),
        sort_by: query.sort_by.unwrap_or_default(),
        order: query.order.unwrap_or_default(),
    };

    store.list(&query).await
}

/// Validate and store a new transaction.
///
/// # Errors
///
/// - `MissingFields`: a required field is absent or empty
/// - `InvalidRequest`: the amount is not numeric
/// - `Database`: Database error occurred
pub async fn create_transaction(
    store: &dyn TransactionStore,
    request: CreateTransactionRequest,
) -> Result<Transaction, AppError> {
    let new_transaction = request.validate()?;
    let transaction = store.insert(new_transaction).await?;

    tracing::info!(id = %transaction.id, "Transaction added");

    Ok(transaction)
}

/// Get transaction by ID.
pub async fn get_transaction(
    store: &dyn TransactionStore,
    id: &str,
) -> Result<Transaction, AppError> {
    store
        .get(parse_id(id)?)
        .await?
        .ok_or(AppError::TransactionNotFound)
}

/// Merge the whitelisted fields of `request` into an existing transaction.
///
/// An update that changes nothing still succeeds as long as the record exists.
pub async fn update_transaction(
    store: &dyn TransactionStore,
    id: &str,
    request: UpdateTransactionRequest,
) -> Result<(), AppError> {
    let id = parse_id(id)?;
    let update = request.validate()?;

    if !store.update(id, &update).await? {
        return Err(AppError::TransactionNotFound);
    }

    tracing::info!(%id, "Transaction updated");

    Ok(())
}

/// Delete a transaction. Deleting an id that does not exist is `TransactionNotFound`.
pub async fn delete_transaction(store: &dyn TransactionStore, id: &str) -> Result<(), AppError> {
    let id = parse_id(id)?;

    if !store.delete(id).await? {
        return Err(AppError::TransactionNotFound);
    }

    tracing::info!(%id, "Transaction deleted");

    Ok(())
}
