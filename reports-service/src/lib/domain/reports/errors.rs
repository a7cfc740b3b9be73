use thiserror::Error;

/// Error for report period parsing failures.
///
/// An unparseable path segment addresses no resource, so these surface as
/// 404s rather than validation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReportPeriodError {
    #[error("'{0}' is not a valid year")]
    InvalidYear(String),

    #[error("'{0}' is not a valid month")]
    InvalidMonth(String),
}

/// Error for report retrieval operations
#[derive(Debug, Clone, Error)]
pub enum ReportsError {
    #[error("No report exists for the requested period")]
    NotFound,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Reports store unavailable: {0}")]
    Unavailable(String),
}
