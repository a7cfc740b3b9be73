use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ReportResponseData;
use crate::domain::auth::models::AuthenticatedIdentity;
use crate::domain::reports::models::ReportPeriod;
use crate::domain::reports::ports::ReportsStore;
use crate::domain::user::ports::UserStore;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// `GET /api/reports`
///
/// All recorded incomes and expenses for the authenticated user.
pub async fn get_reports<US: UserStore, RS: ReportsStore>(
    State(state): State<AppState<US, RS>>,
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> Result<Json<ReportResponseData>, ApiError> {
    let report = state
        .reports
        .report_for(identity.user_id, &ReportPeriod::all())
        .await?;

    Ok(Json(report.into()))
}
