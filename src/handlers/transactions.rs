//! Transaction HTTP handlers.
//!
//! This module implements the record-level API endpoints:
//! - GET /my-transactions - List transactions, optionally for one user
//! - POST /add-transactions - Add a transaction
//! - GET /transactions/{id} - Get transaction details
//! - PUT /transactions/update/{id} - Change some fields of a transaction
//! - DELETE /transactions/{id} - Delete a transaction

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    error::AppError,
    extract::{AppJson, AppQuery},
    models::transaction::{
        CreateTransactionRequest, CreatedResponse, ListTransactionsQuery, MessageResponse,
        Transaction, UpdateTransactionRequest,
    },
    services::transaction_service,
    stores::SharedStore,
};

/// List transactions.
///
/// # Query Parameters
///
/// - `sortBy` - `date` (default) or `amount`
/// - `order` - `asc` or `desc` (default)
/// - `userEmail` - only return transactions tagged with this email
///
/// # Response (200)
///
/// A JSON array of every matching transaction. There is no pagination.
pub async fn list_transactions(
    State(store): State<SharedStore>,
    AppQuery(query): AppQuery<ListTransactionsQuery>,
) -> Result<Json<Vec<Transaction>>, AppError> {
    let transactions = transaction_service::list_transactions(store.as_ref(), query).await?;

    Ok(Json(transactions))
}

/// Add a transaction.
///
/// # Request Body
///
/// ```json
/// {
///   "amount": 100,
///   "type": "Income",
///   "category": "Salary",
///   "date": "2024-01-05",
///   "description": "January pay",
///   "userEmail": "a@x.com"
/// }
/// ```
///
/// `amount` may also be a numeric string. `description` is optional.
///
/// # Response (200)
///
/// ```json
/// {
///   "message": "Transaction added successfully",
///   "insertedId": "770e8400-..."
/// }
/// ```
///
/// - **Error (400)**: a required field is missing, the amount is not a number,
///   or the body is not JSON of this shape
pub async fn add_transaction(
    State(store): State<SharedStore>,
    AppJson(request): AppJson<CreateTransactionRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let transaction = transaction_service::create_transaction(store.as_ref(), request).await?;

    Ok(Json(CreatedResponse {
        message: "Transaction added successfully".to_string(),
        inserted_id: transaction.id,
    }))
}

/// Get transaction by ID.
///
/// - **Error (404)**: no transaction has this id
pub async fn get_transaction(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, AppError> {
    let transaction = transaction_service::get_transaction(store.as_ref(), &id).await?;

    Ok(Json(transaction))
}

/// Update some fields of a transaction.
///
/// Only `amount`, `type`, `category`, `date`, `description` and `userEmail`
/// are applied. Other keys in the body are ignored.
///
/// - **Error (400)**: a field is set to an empty string or a non-numeric amount
/// - **Error (404)**: no transaction has this id
pub async fn update_transaction(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    AppJson(request): AppJson<UpdateTransactionRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    transaction_service::update_transaction(store.as_ref(), &id, request).await?;

    Ok(Json(MessageResponse::new("Transaction updated successfully")))
}

/// Delete a transaction.
///
/// - **Error (404)**: no transaction has this id
pub async fn delete_transaction(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    transaction_service::delete_transaction(store.as_ref(), &id).await?;

    Ok(Json(MessageResponse::new("Transaction deleted successfully")))
}
