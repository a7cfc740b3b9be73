use thiserror::Error;

use crate::domain::user::errors::UserStoreError;

/// Top-level error for login and refresh operations
#[derive(Debug, Error)]
pub enum AuthError {
    /// One `"<field> is required"` message per absent field, in encounter order
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// Deliberately identical for unknown email and wrong password
    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Password verification error: {0}")]
    Password(#[from] auth::PasswordError),

    #[error("Token issuance failed: {0}")]
    Token(#[from] auth::JwtError),

    #[error(transparent)]
    Store(#[from] UserStoreError),
}
