use async_trait::async_trait;

use crate::domain::reports::errors::ReportsError;
use crate::domain::reports::models::Report;
use crate::domain::reports::models::ReportPeriod;
use crate::domain::user::models::UserId;

/// Reports retrieval collaborator.
///
/// Consumed by gate-guarded handlers only: the `user_id` has always been
/// established by token verification before a call reaches this port.
#[async_trait]
pub trait ReportsStore: Send + Sync + 'static {
    /// Retrieve the income and expense collections for one user and period.
    ///
    /// A period with no recorded entries yields empty collections, not an
    /// error.
    ///
    /// # Errors
    /// * `NotFound` - Store signals the period addresses no report
    /// * `Database` - Query failed
    /// * `Unavailable` - Store could not be reached in time
    async fn report_for(
        &self,
        user_id: UserId,
        period: &ReportPeriod,
    ) -> Result<Report, ReportsError>;
}
