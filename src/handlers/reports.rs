//! Summary and report HTTP handlers.
//!
//! - GET /overview - Income, expense and balance totals over all transactions
//! - GET /reports/{email} - Totals and breakdowns for one user

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    error::AppError,
    extract::AppQuery,
    models::report::{Overview, Report, ReportQuery},
    services::report_service,
    stores::SharedStore,
};

/// Totals over every stored transaction.
///
/// Ownership is not considered: all users' transactions are included.
///
/// # Response (200)
///
/// ```json
/// { "totalIncome": 100.0, "totalExpenses": 0.0, "totalBalance": 100.0 }
/// ```
pub async fn get_overview(State(store): State<SharedStore>) -> Result<Json<Overview>, AppError> {
    let overview = report_service::overview(store.as_ref()).await?;

    Ok(Json(overview))
}

/// Report for the transactions tagged with `email`.
///
/// # Query Parameters
///
/// - `month` - optional `YYYY-MM`; only transactions whose date starts with it are included
///
/// # Response (200)
///
/// ```json
/// {
///   "totalIncome": 1000.0,
///   "totalExpenses": 250.0,
///   "totalBalance": 750.0,
///   "categorySummary": { "Rent": 250.0, "Salary": 1000.0 },
///   "monthlySummary": { "2024-01": 1250.0 }
/// }
/// ```
///
/// - **Error (400)**: `month` is not `YYYY-MM`
/// - **Error (500)**: a transaction in scope has a date that cannot be grouped by month
pub async fn get_report(
    State(store): State<SharedStore>,
    Path(email): Path<String>,
    AppQuery(query): AppQuery<ReportQuery>,
) -> Result<Json<Report>, AppError> {
    let report =
        report_service::user_report(store.as_ref(), &email, query.month.as_deref()).await?;

    Ok(Json(report))
}
