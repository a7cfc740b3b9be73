use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::user::errors::UserStoreError;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserStore;

pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct UserRow {
    id: i64,
    full_name: String,
    email: String,
    password_hash: String,
}

impl UserRow {
    fn into_user(self) -> Result<User, UserStoreError> {
        let email = EmailAddress::new(self.email)
            .map_err(|e| UserStoreError::Database(format!("Stored email is invalid: {}", e)))?;

        Ok(User {
            id: UserId(self.id),
            full_name: self.full_name,
            email,
            password_hash: self.password_hash,
        })
    }
}

fn map_sqlx_error(e: sqlx::Error) -> UserStoreError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => UserStoreError::Unavailable(e.to_string()),
        _ => UserStoreError::Database(e.to_string()),
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, full_name, email, password_hash
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.map(UserRow::into_user).transpose()
    }
}
