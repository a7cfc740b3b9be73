use std::sync::Arc;

use auth::Authenticator;
use reports_service::config::Config;
use reports_service::domain::auth::service::AuthService;
use reports_service::inbound::http::router::create_router;
use reports_service::outbound::repositories::PostgresReportsStore;
use reports_service::outbound::repositories::PostgresUserStore;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reports_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "reports-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    // The signing secret is deliberately absent here
    tracing::info!(
        http_port = config.server.http_port,
        token_lifetime_hours = config.jwt.expiration_hours,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    // A misconfigured secret must stop the process before it serves traffic
    let authenticator = Arc::new(Authenticator::new(config.jwt.secret.as_bytes())?);

    let user_store = Arc::new(PostgresUserStore::new(pg_pool.clone()));
    let reports_store = Arc::new(PostgresReportsStore::new(pg_pool));

    let auth_service = Arc::new(AuthService::new(
        user_store,
        Arc::clone(&authenticator),
        config.jwt.expiration_hours,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(auth_service, reports_store, authenticator);
    axum::serve(http_listener, http_application).await?;

    Ok(())
}
