use async_trait::async_trait;

use crate::domain::user::errors::UserStoreError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;

/// Credential store adapter.
///
/// The only stateful dependency of the auth subsystem. Implementations own
/// their concurrency and timeout discipline; callers just await the lookup.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Retrieve a user record by email address.
    ///
    /// # Returns
    /// Optional user entity (None if no account uses this address)
    ///
    /// # Errors
    /// * `Database` - Query failed
    /// * `Unavailable` - Store could not be reached in time
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserStoreError>;
}
