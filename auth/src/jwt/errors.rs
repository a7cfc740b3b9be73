use thiserror::Error;

/// Error type for JWT operations.
///
/// Decoding failures stay distinguishable here so callers can log the exact
/// cause; collapsing them into a uniform rejection is the HTTP boundary's job.
#[derive(Debug, Clone, Error)]
pub enum JwtError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token claims are malformed: {0}")]
    Malformed(String),
}
