//! Business logic services.
//!
//! Services sit between the HTTP handlers and the store. They validate
//! input, call the store and aggregate results.

pub mod report_service;
pub mod transaction_service;
