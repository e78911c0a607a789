//! Summary and report response types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Income, expense and balance totals.
///
/// # JSON Example
///
/// ```json
/// { "totalIncome": 100.0, "totalExpenses": 40.0, "totalBalance": 60.0 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_income: f64,
    pub total_expenses: f64,
    /// Always `total_income - total_expenses`
    pub total_balance: f64,
}

/// Per-user report, optionally restricted to one month.
///
/// Category and month sums include every transaction in the filtered set,
/// whatever its type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    #[serde(flatten)]
    pub totals: Overview,
    pub category_summary: BTreeMap<String, f64>,
    /// Keyed by `YYYY-MM`
    pub monthly_summary: BTreeMap<String, f64>,
}

/// Query string for `GET /reports/{email}`.
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    /// `YYYY-MM`
    pub month: Option<String>,
}
