use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::auth::models::AuthenticatedIdentity;
use crate::domain::reports::ports::ReportsStore;
use crate::domain::user::ports::UserStore;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Token gate applied to every protected route.
///
/// Verifies the bearer token and attaches the resulting identity to the
/// request extensions. Every failure mode collapses into the same 401 body;
/// which step failed is logged, never surfaced, so responses cannot be used
/// as a validation oracle.
pub async fn require_auth<US: UserStore, RS: ReportsStore>(
    State(state): State<AppState<US, RS>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let claims = state.authenticator.verify_token(token).map_err(|e| {
        tracing::warn!(reason = %e, "Rejected bearer token");
        ApiError::Unauthorized.into_response()
    })?;

    req.extensions_mut()
        .insert(AuthenticatedIdentity::from_claims(&claims));

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::Unauthorized.into_response()
        })?;

    let auth_str = auth_header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid UTF-8");
        ApiError::Unauthorized.into_response()
    })?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Authorization header does not use the Bearer scheme");
        ApiError::Unauthorized.into_response()
    })
}
