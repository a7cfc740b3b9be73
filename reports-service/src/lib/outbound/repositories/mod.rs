pub mod reports;
pub mod user;

pub use reports::PostgresReportsStore;
pub use user::PostgresUserStore;
