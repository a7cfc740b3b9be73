use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for credential store operations
#[derive(Debug, Clone, Error)]
pub enum UserStoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Credential store unavailable: {0}")]
    Unavailable(String),
}
