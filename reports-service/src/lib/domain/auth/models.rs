use crate::domain::user::models::UserId;

/// Credentials submitted with a login request.
///
/// Fields are optional because the request body may omit or null them; the
/// service reports each missing field by name. The plaintext password lives
/// only for the duration of the request and is never persisted or logged.
#[derive(Debug)]
pub struct LoginCredentials {
    pub email_address: Option<String>,
    pub password: Option<String>,
}

/// Identity established by the auth gate for one request.
///
/// A pure projection of verified token claims; valid only for the request it
/// was attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedIdentity {
    pub user_id: UserId,
    pub full_name: String,
}

impl AuthenticatedIdentity {
    pub fn from_claims(claims: &auth::Claims) -> Self {
        Self {
            user_id: UserId(claims.user_id),
            full_name: claims.full_name.clone(),
        }
    }
}
