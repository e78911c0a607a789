//! Data models representing stored records and API payloads.

/// Income and expense records
pub mod transaction;
/// Overview and report responses
pub mod report;
