use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::auth::errors::AuthError;
use crate::domain::reports::errors::ReportsError;
use crate::domain::user::errors::UserStoreError;

pub mod login;
pub mod refresh;
pub mod reports;

/// Body returned by both login and refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Error body shared by every failing response: `{"errors": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub errors: Vec<String>,
}

/// HTTP boundary error.
///
/// Owns the translation of domain failures into status codes and the
/// uniform `{"errors": [...]}` body. Login failures are 400 and gate
/// failures are 401; the asymmetry is observable contract and kept as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 400 with one message per offending field
    Validation(Vec<String>),
    /// 400 with a single generic message
    BadRequest(String),
    /// 401, always rendered as the same generic message
    Unauthorized,
    /// 404 for path segments that address no resource
    NotFound(String),
    InternalServerError(String),
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, errors) = match self {
            ApiError::Validation(errors) => (StatusCode::BAD_REQUEST, errors),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, vec![msg]),
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                vec!["Unauthorized request".to_string()],
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, vec![msg]),
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    vec!["Internal server error".to_string()],
                )
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!(error = %msg, "Service unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    vec!["Service unavailable".to_string()],
                )
            }
        };

        (status, Json(ErrorBody { errors })).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingFields(errors) => ApiError::Validation(errors),
            // Bad credentials are a 400 here, not a 401; the token gate owns 401s
            AuthError::InvalidCredentials => ApiError::BadRequest(err.to_string()),
            AuthError::Password(e) => ApiError::InternalServerError(e.to_string()),
            AuthError::Token(e) => ApiError::InternalServerError(e.to_string()),
            AuthError::Store(UserStoreError::Database(e)) => ApiError::InternalServerError(e),
            AuthError::Store(UserStoreError::Unavailable(e)) => ApiError::ServiceUnavailable(e),
        }
    }
}

impl From<ReportsError> for ApiError {
    fn from(err: ReportsError) -> Self {
        match err {
            ReportsError::NotFound => ApiError::NotFound(err.to_string()),
            ReportsError::Database(e) => ApiError::InternalServerError(e),
            ReportsError::Unavailable(e) => ApiError::ServiceUnavailable(e),
        }
    }
}
