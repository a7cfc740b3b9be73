//! Authentication building blocks for the reports API
//!
//! Provides the pieces the HTTP service composes into its security boundary:
//! - Password verification against stored Argon2id hashes
//! - Signed, time-limited session tokens (JWT, HS256)
//! - An [`Authenticator`] façade combining both for login and refresh flows
//!
//! The service defines its own ports and identity types and adapts these
//! implementations; nothing in here touches the network or the database.
//!
//! # Examples
//!
//! ## Password verification
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! assert!(!hasher.verify("not_my_password", &hash).unwrap());
//! ```
//!
//! ## Session tokens
//! ```
//! use auth::{Claims, JwtHandler};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_identity(1, "Jane Doe", 3);
//! let token = handler.encode(&claims).unwrap();
//! let decoded = handler.decode(&token).unwrap();
//! assert_eq!(decoded.user_id, 1);
//! ```
//!
//! ## Login flow
//! ```
//! use auth::{Authenticator, Claims};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!").unwrap();
//! let hash = auth.hash_password("password123").unwrap();
//!
//! let claims = Claims::for_identity(1, "Jane Doe", 3);
//! let result = auth.authenticate("password123", &hash, &claims).unwrap();
//!
//! let decoded = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(decoded.full_name, "Jane Doe");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use authenticator::SigningError;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
