//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use uuid::Uuid;

/// Application-wide error type.
///
/// # Error Categories
///
/// - **Client errors**: missing or invalid request data (400)
/// - **Resource errors**: the addressed transaction does not exist (404)
/// - **Internal errors**: store failures and malformed stored data (500)
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A required field was absent from a create request.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Missing required fields")]
    MissingFields,

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("{0}")]
    InvalidRequest(String),

    /// The request body was not JSON of the expected shape.
    ///
    /// Returns HTTP 400 Bad Request with axum's description of the problem.
    #[error("{}", .0.body_text())]
    InvalidJson(#[from] JsonRejection),

    /// The query string could not be parsed.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("{}", .0.body_text())]
    InvalidQuery(#[from] QueryRejection),

    /// No transaction matches the requested id.
    ///
    /// Returns HTTP 404 Not Found.
    #[error("Transaction not found")]
    TransactionNotFound,

    /// A stored transaction has a date that cannot be grouped by month.
    ///
    /// Returns HTTP 500; the record id and date are only logged.
    #[error("Transaction {id} has malformed date {date:?}")]
    MalformedDate { id: Uuid, date: String },

    /// A sum over stored amounts overflowed to infinity.
    ///
    /// Returns HTTP 500. JSON has no encoding for non-finite numbers.
    #[error("{0} is not a finite number")]
    NonFiniteTotal(&'static str),
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// {
///   "code": "transaction_not_found",
///   "message": "Transaction not found"
/// }
/// ```
///
/// Internal errors are logged here and answered with a generic
/// `"Server error"` message so no detail leaks to the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AppError::MissingFields => {
                (StatusCode::BAD_REQUEST, "missing_fields", self.to_string())
            }
            AppError::InvalidRequest(ref msg) => {
                (StatusCode::BAD_REQUEST, "invalid_request", msg.clone())
            }
            AppError::InvalidJson(_) | AppError::InvalidQuery(_) => {
                (StatusCode::BAD_REQUEST, "invalid_request", self.to_string())
            }
            AppError::TransactionNotFound => (
                StatusCode::NOT_FOUND,
                "transaction_not_found",
                self.to_string(),
            ),
            AppError::Database(_)
            | AppError::MalformedDate { .. }
            | AppError::NonFiniteTotal(_) => {
                tracing::error!("{self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "Server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "code": code,
            "message": message
        }));

        (status, body).into_response()
    }
}
