use axum::extract::Path;
use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ReportResponseData;
use crate::domain::auth::models::AuthenticatedIdentity;
use crate::domain::reports::models::ReportPeriod;
use crate::domain::reports::models::Year;
use crate::domain::reports::ports::ReportsStore;
use crate::domain::user::ports::UserStore;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// `GET /api/reports/:year`
///
/// An unparseable `:year` addresses no resource and is a 404, not a
/// validation error.
pub async fn get_reports_for_year<US: UserStore, RS: ReportsStore>(
    State(state): State<AppState<US, RS>>,
    Extension(identity): Extension<AuthenticatedIdentity>,
    Path(year): Path<String>,
) -> Result<Json<ReportResponseData>, ApiError> {
    let year = Year::parse(&year).map_err(|e| ApiError::NotFound(e.to_string()))?;

    let report = state
        .reports
        .report_for(identity.user_id, &ReportPeriod::for_year(year))
        .await?;

    Ok(Json(report.into()))
}
