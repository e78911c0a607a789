//! Report service - in-memory aggregation over fetched transactions.
//!
//! Totals only count the exact (case-sensitive) types "Income" and "Expense".
//! Category and month summaries add up every transaction in the set.
//! A sum that overflows to infinity is reported as `NonFiniteTotal`.

use std::{collections::BTreeMap, str::FromStr};

use chrono::NaiveDate;

use crate::{
    error::AppError,
    models::{
        report::{Overview, Report},
        transaction::Transaction,
    },
    stores::{TransactionQuery, TransactionStore},
};

/// How a transaction's `type` contributes to the totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
    /// Any other value. Counted in category and month summaries only.
    Other,
}

impl TransactionKind {
    pub fn from_type(kind: &str) -> Self {
        match kind {
            "Income" => TransactionKind::Income,
            "Expense" => TransactionKind::Expense,
            _ => TransactionKind::Other,
        }
    }
}

/// A calendar month given as `YYYY-MM`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Month(String);

impl Month {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `date` falls within this month, by text prefix.
    pub fn contains(&self, date: &str) -> bool {
        date.starts_with(self.as_str())
    }
}

impl FromStr for Month {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if is_year_month(s) {
            Ok(Month(s.to_string()))
        } else {
            Err(AppError::InvalidRequest(format!(
                "Invalid month {s:?}, expected YYYY-MM"
            )))
        }
    }
}

/// Totals over every stored transaction, regardless of owner.
pub async fn overview(store: &dyn TransactionStore) -> Result<Overview, AppError> {
    let transactions = store.all().await?;

    totals(&transactions)
}

/// Report for one user's transactions, optionally restricted to a `YYYY-MM` month.
///
/// # Errors
///
/// - `InvalidRequest`: `month` is not `YYYY-MM`
/// - `MalformedDate`: a stored date in scope cannot be grouped by month
/// - `Database`: Database error occurred
pub async fn user_report(
    store: &dyn TransactionStore,
    user_email: &str,
    month: Option<&str>,
) -> Result<Report, AppError> {
    let month = month
        .filter(|m| !m.is_empty())
        .map(str::parse::<Month>)
        .transpose()?;
    let transactions = store.list(&TransactionQuery::for_user(user_email)).await?;

    build_report(&transactions, month.as_ref())
}

/// Sum income and expenses and derive the balance.
///
/// # Errors
///
/// Returns `NonFiniteTotal` naming the first figure that overflowed.
pub fn totals<'a, I>(transactions: I) -> Result<Overview, AppError>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut overview = Overview::default();

    for transaction in transactions {
        match TransactionKind::from_type(&transaction.kind) {
            TransactionKind::Income => overview.total_income += transaction.amount,
            TransactionKind::Expense => overview.total_expenses += transaction.amount,
            TransactionKind::Other => {}
        }
    }

    overview.total_balance = overview.total_income - overview.total_expenses;

    finite("totalIncome", overview.total_income)?;
    finite("totalExpenses", overview.total_expenses)?;
    finite("totalBalance", overview.total_balance)?;
    Ok(overview)
}

fn finite(name: &'static str, value: f64) -> Result<(), AppError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AppError::NonFiniteTotal(name))
    }
}

/// The `YYYY-MM` prefix of a transaction's date.
///
/// # Errors
///
/// Returns `MalformedDate` if the date does not start with a valid year and month.
pub fn month_key(transaction: &Transaction) -> Result<&str, AppError> {
    transaction
        .date
        .get(..7)
        .filter(|prefix| is_year_month(prefix))
        .ok_or_else(|| AppError::MalformedDate {
            id: transaction.id,
            date: transaction.date.clone(),
        })
}

/// Build a report over `transactions`, keeping only those in `month` when given.
///
/// # Errors
///
/// Returns `MalformedDate` if a transaction in the filtered set has a date
/// that cannot be grouped by month, and `NonFiniteTotal` if any sum overflows.
pub fn build_report(
    transactions: &[Transaction],
    month: Option<&Month>,
) -> Result<Report, AppError> {
    let in_scope: Vec<&Transaction> = transactions
        .iter()
        .filter(|t| month.is_none_or(|m| m.contains(&t.date)))
        .collect();

    let mut category_summary = BTreeMap::new();
    let mut monthly_summary = BTreeMap::new();

    for transaction in &in_scope {
        *category_summary
            .entry(transaction.category.clone())
            .or_insert(0.0) += transaction.amount;
        *monthly_summary
            .entry(month_key(transaction)?.to_string())
            .or_insert(0.0) += transaction.amount;
    }

    for sum in category_summary.values() {
        finite("categorySummary", *sum)?;
    }
    for sum in monthly_summary.values() {
        finite("monthlySummary", *sum)?;
    }

    Ok(Report {
        totals: totals(in_scope)?,
        category_summary,
        monthly_summary,
    })
}

fn is_year_month(s: &str) -> bool {
    s.len() == 7 && NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").is_ok()
}
