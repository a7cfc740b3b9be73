use axum::extract::State;
use axum::Extension;
use axum::Json;

use super::ApiError;
use super::TokenResponse;
use crate::domain::auth::models::AuthenticatedIdentity;
use crate::domain::reports::ports::ReportsStore;
use crate::domain::user::ports::UserStore;
use crate::inbound::http::router::AppState;

/// `GET /api/refresh`
///
/// Sliding-session renewal: reissues a token from the identity the gate
/// attached to this request, with a fresh expiry window.
pub async fn refresh<US: UserStore, RS: ReportsStore>(
    State(state): State<AppState<US, RS>>,
    Extension(identity): Extension<AuthenticatedIdentity>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state.auth_service.refresh(&identity)?;

    Ok(Json(TokenResponse { token }))
}
