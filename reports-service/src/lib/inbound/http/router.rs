use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::login::login;
use super::handlers::refresh::refresh;
use super::handlers::reports::get_reports;
use super::handlers::reports::get_reports_for_month;
use super::handlers::reports::get_reports_for_year;
use super::middleware::require_auth;
use crate::domain::auth::service::AuthService;
use crate::domain::reports::ports::ReportsStore;
use crate::domain::user::ports::UserStore;

pub struct AppState<US, RS>
where
    US: UserStore,
    RS: ReportsStore,
{
    pub auth_service: Arc<AuthService<US>>,
    pub reports: Arc<RS>,
    pub authenticator: Arc<Authenticator>,
}

impl<US, RS> Clone for AppState<US, RS>
where
    US: UserStore,
    RS: ReportsStore,
{
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            reports: Arc::clone(&self.reports),
            authenticator: Arc::clone(&self.authenticator),
        }
    }
}

pub fn create_router<US, RS>(
    auth_service: Arc<AuthService<US>>,
    reports: Arc<RS>,
    authenticator: Arc<Authenticator>,
) -> Router
where
    US: UserStore,
    RS: ReportsStore,
{
    let state = AppState {
        auth_service,
        reports,
        authenticator,
    };

    let public_routes = Router::new().route("/api/login", post(login::<US, RS>));

    let protected_routes = Router::new()
        .route("/api/refresh", get(refresh::<US, RS>))
        .route("/api/reports", get(get_reports::<US, RS>))
        .route("/api/reports/:year", get(get_reports_for_year::<US, RS>))
        .route(
            "/api/reports/:year/:month",
            get(get_reports_for_month::<US, RS>),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_auth::<US, RS>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
