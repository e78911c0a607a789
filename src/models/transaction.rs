//! Transaction data models and API request/response types.
//!
//! This module defines:
//! - `Transaction`: a stored income or expense record
//! - `CreateTransactionRequest` / `NewTransaction`: the create payload before and after validation
//! - `UpdateTransactionRequest` / `TransactionUpdate`: the whitelisted partial update
//! - Query and message types used by the HTTP handlers

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::{
    error::AppError,
    stores::{SortField, SortOrder},
};

/// A transaction record from the database.
///
/// # JSON Example
///
/// ```json
/// {
///   "_id": "550e8400-e29b-41d4-a716-446655440000",
///   "amount": 100.0,
///   "type": "Income",
///   "category": "Salary",
///   "date": "2024-01-05",
///   "description": "January pay",
///   "userEmail": "a@x.com"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Transaction {
    /// Assigned by the store on insert, never changes afterwards
    #[serde(rename = "_id")]
    pub id: Uuid,

    pub amount: f64,

    /// Free-form on write. Only "Income" and "Expense" count towards totals.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,

    pub category: String,

    /// `YYYY-MM-DD...`, compared as text for sorting and month filtering
    pub date: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Unverified ownership tag supplied by the client
    #[serde(rename = "userEmail")]
    pub user_email: String,
}

/// A validated transaction that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    pub amount: f64,
    pub kind: String,
    pub category: String,
    pub date: String,
    pub description: Option<String>,
    pub user_email: String,
}

/// Request body for `POST /add-transactions`.
///
/// Every field is optional here so that a missing field is answered with
/// "Missing required fields" rather than a deserialization rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransactionRequest {
    /// A JSON number or a numeric string
    pub amount: Option<Value>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub user_email: Option<String>,
}

impl CreateTransactionRequest {
    /// Check that every required field is present and turn the request into a [NewTransaction].
    ///
    /// Required strings must be non-empty. The amount must be numeric; zero is accepted.
    ///
    /// # Errors
    ///
    /// - `MissingFields` if a required field is absent, null or empty
    /// - `InvalidRequest` if the amount is present but not a number
    pub fn validate(self) -> Result<NewTransaction, AppError> {
        let (Some(amount), Some(kind), Some(category), Some(date), Some(user_email)) = (
            self.amount,
            non_empty(self.kind),
            non_empty(self.category),
            non_empty(self.date),
            non_empty(self.user_email),
        ) else {
            return Err(AppError::MissingFields);
        };

        Ok(NewTransaction {
            amount: parse_amount(&amount)?,
            kind,
            category,
            date,
            description: self.description,
            user_email,
        })
    }
}

/// Request body for `PUT /transactions/update/{id}`.
///
/// Only the declared fields can be changed. Any other key in the body,
/// including `_id`, is ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTransactionRequest {
    pub amount: Option<Value>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub user_email: Option<String>,
}

impl UpdateTransactionRequest {
    /// Validate the fields that are present.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRequest` if a required field is set to an empty string
    /// or the amount is not a number.
    pub fn validate(self) -> Result<TransactionUpdate, AppError> {
        let amount = self.amount.as_ref().map(parse_amount).transpose()?;

        for (name, value) in [
            ("type", &self.kind),
            ("category", &self.category),
            ("date", &self.date),
            ("userEmail", &self.user_email),
        ] {
            if value.as_deref() == Some("") {
                return Err(AppError::InvalidRequest(format!(
                    "Invalid field value: {name} cannot be empty"
                )));
            }
        }

        Ok(TransactionUpdate {
            amount,
            kind: self.kind,
            category: self.category,
            date: self.date,
            description: self.description,
            user_email: self.user_email,
        })
    }
}

/// A validated partial update. `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionUpdate {
    pub amount: Option<f64>,
    pub kind: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub user_email: Option<String>,
}

/// Query string for `GET /my-transactions`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTransactionsQuery {
    pub sort_by: Option<SortField>,
    pub order: Option<SortOrder>,
    pub user_email: Option<String>,
}

/// Body returned by write endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Body returned by `POST /add-transactions`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedResponse {
    pub message: String,
    pub inserted_id: Uuid,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Coerce a JSON number or numeric string into an amount.
fn parse_amount(value: &Value) -> Result<f64, AppError> {
    let amount = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    amount.filter(|a| a.is_finite()).ok_or_else(|| {
        AppError::InvalidRequest("Invalid field value: amount must be a number".to_string())
    })
}
