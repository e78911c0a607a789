//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, query string)
//! 2. Calls a service with the shared store
//! 3. Returns HTTP response (JSON, status code)

/// Liveness and health endpoints
pub mod health;
/// Overview and per-user reports
pub mod reports;
/// Transaction CRUD endpoints
pub mod transactions;
