use std::sync::Arc;

use auth::Authenticator;
use auth::Claims;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::models::AuthenticatedIdentity;
use crate::domain::auth::models::LoginCredentials;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::ports::UserStore;

/// Request body fields the login operation requires, in reporting order.
const REQUIRED_FIELDS: [&str; 2] = ["email_address", "password"];

/// Login and refresh façade.
///
/// Composes the credential store, password verification, and token issuance.
/// Holds no mutable state; concurrent requests share one instance freely.
pub struct AuthService<US>
where
    US: UserStore,
{
    users: Arc<US>,
    authenticator: Arc<Authenticator>,
    token_lifetime_hours: i64,
}

impl<US> AuthService<US>
where
    US: UserStore,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `users` - Credential store implementation
    /// * `authenticator` - Password verification and token signing
    /// * `token_lifetime_hours` - Validity window for issued tokens
    pub fn new(users: Arc<US>, authenticator: Arc<Authenticator>, token_lifetime_hours: i64) -> Self {
        Self {
            users,
            authenticator,
            token_lifetime_hours,
        }
    }

    /// Verify credentials and issue a session token.
    ///
    /// Unknown email, unparseable email, and wrong password all surface as
    /// the same `InvalidCredentials` error so responses reveal nothing about
    /// account existence.
    ///
    /// # Errors
    /// * `MissingFields` - One or both credential fields absent
    /// * `InvalidCredentials` - No such account or password mismatch
    /// * `Store` - Credential store lookup failed
    /// * `Token` - Token issuance failed
    pub async fn login(&self, credentials: LoginCredentials) -> Result<String, AuthError> {
        let missing = Self::missing_fields(&credentials);
        if !missing.is_empty() {
            return Err(AuthError::MissingFields(missing));
        }

        // Presence was checked above
        let email_address = credentials.email_address.unwrap_or_default();
        let password = credentials.password.unwrap_or_default();

        let email =
            EmailAddress::new(email_address).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // Claims come from the stored record, never from client input
        let claims = self.claims_for(&user);

        let result = self
            .authenticator
            .authenticate(&password, &user.password_hash, &claims)
            .map_err(|e| match e {
                auth::AuthenticationError::InvalidCredentials => AuthError::InvalidCredentials,
                auth::AuthenticationError::PasswordError(err) => AuthError::Password(err),
                auth::AuthenticationError::JwtError(err) => AuthError::Token(err),
            })?;

        Ok(result.access_token)
    }

    /// Reissue a token for an identity the gate already verified.
    ///
    /// Sliding-session renewal: a fresh issuance/expiry window, no credential
    /// re-check.
    ///
    /// # Errors
    /// * `Token` - Token issuance failed
    pub fn refresh(&self, identity: &AuthenticatedIdentity) -> Result<String, AuthError> {
        let claims = Claims::for_identity(
            identity.user_id.0,
            identity.full_name.clone(),
            self.token_lifetime_hours,
        );

        Ok(self.authenticator.issue_token(&claims)?)
    }

    fn claims_for(&self, user: &User) -> Claims {
        Claims::for_identity(user.id.0, user.full_name.clone(), self.token_lifetime_hours)
    }

    fn missing_fields(credentials: &LoginCredentials) -> Vec<String> {
        let provided = [
            credentials.email_address.is_some(),
            credentials.password.is_some(),
        ];

        REQUIRED_FIELDS
            .iter()
            .zip(provided)
            .filter(|(_, present)| !present)
            .map(|(field, _)| format!("{} is required", field))
            .collect()
    }
}
