use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Signed token payload.
///
/// Carries the authenticated identity plus its validity window. Claims are
/// never mutated after construction; renewal means building a new value with
/// a fresh window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Identifier of the user the token was issued to
    pub user_id: i64,

    /// Display name of the user, carried so handlers need no extra lookup
    pub full_name: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp), always `iat` plus the configured lifetime
    pub exp: i64,
}

impl Claims {
    /// Build claims for an identity with an expiry derived from now.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `full_name` - User display name
    /// * `lifetime_hours` - Hours until the token expires
    pub fn for_identity(user_id: i64, full_name: impl Into<String>, lifetime_hours: i64) -> Self {
        let now = Utc::now();
        let expiration = now + Duration::hours(lifetime_hours);

        Self {
            user_id,
            full_name: full_name.into(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Check whether the claims have expired at the given Unix timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
