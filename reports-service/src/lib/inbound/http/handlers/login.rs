use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use super::ApiError;
use super::TokenResponse;
use crate::domain::auth::models::LoginCredentials;
use crate::domain::reports::ports::ReportsStore;
use crate::domain::user::ports::UserStore;
use crate::inbound::http::router::AppState;

/// `POST /api/login`
///
/// Verifies credentials and returns a freshly issued session token.
/// Both missing fields and bad credentials come back as 400.
pub async fn login<US: UserStore, RS: ReportsStore>(
    State(state): State<AppState<US, RS>>,
    Json(body): Json<LoginRequestBody>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state
        .auth_service
        .login(LoginCredentials {
            email_address: body.email_address,
            password: body.password,
        })
        .await?;

    Ok(Json(TokenResponse { token }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    #[serde(default)]
    email_address: Option<String>,
    #[serde(default)]
    password: Option<String>,
}
