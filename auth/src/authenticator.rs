use thiserror::Error;

use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Minimum signing-secret length for HS256, per RFC 2104 recommendations.
const MIN_SECRET_BYTES: usize = 32;

/// Authentication coordinator combining password verification and token issuance.
///
/// Immutable after construction; share it behind an `Arc` and call it from
/// any number of concurrent requests.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed session token
    pub access_token: String,
}

/// Startup misconfiguration of the signing secret.
///
/// Raised only from [`Authenticator::new`]; a process that cannot construct
/// its authenticator must not serve traffic.
#[derive(Debug, Clone, Error)]
#[error("Signing secret must be at least {MIN_SECRET_BYTES} bytes, got {actual}")]
pub struct SigningError {
    pub actual: usize,
}

/// Authentication operation errors.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator from the process-wide signing secret.
    ///
    /// # Errors
    /// * `SigningError` - Secret is too short to sign with; treat as fatal
    pub fn new(jwt_secret: &[u8]) -> Result<Self, SigningError> {
        if jwt_secret.len() < MIN_SECRET_BYTES {
            return Err(SigningError {
                actual: jwt_secret.len(),
            });
        }

        Ok(Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret),
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a session token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match the stored hash
    /// * `PasswordError` - Stored hash is malformed or verification faulted
    /// * `JwtError` - Token issuance failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        claims: &Claims,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.jwt_handler.encode(claims)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a session token without password verification.
    ///
    /// Used by the refresh flow, where the gate has already established the
    /// caller's identity on this request.
    ///
    /// # Errors
    /// * `JwtError` - Token issuance failed
    pub fn issue_token(&self, claims: &Claims) -> Result<String, JwtError> {
        self.jwt_handler.encode(claims)
    }

    /// Validate a session token and return its claims.
    ///
    /// # Errors
    /// * `JwtError` - Signature invalid, claims malformed, or token expired
    pub fn verify_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.decode(token)
    }
}
