//! Account signup service: validates a request, hashes the credential and
//! persists the account.
#![forbid(unsafe_code)]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod presentation;
mod router;
pub mod telemetry;
pub mod usecases;

#[cfg(test)]
mod testing;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{Method, StatusCode, header};
use axum::routing::{get, post};
use axum::{Router, middleware as AxumMiddleware};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;
use tower_http::LatencyUnit;
use tower_http::cors::{Any, CorsLayer};
use tower_http::sensitive_headers::SetSensitiveHeadersLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};

use adapters::argon2::Argon2Hasher;
use adapters::email::EmailValidatorAdapter;
use adapters::persistence::{MemoryAccountStore, PgAccountStore};
use ports::outbound::AccountStore;
use presentation::{Controller, SignupBody, SignupController};
use usecases::CreateAccountUseCase;

/// MUST NEVER be used in production.
#[cfg(test)]
pub async fn make_request(
    app: Router,
    method: Method,
    path: &str,
    body: String,
) -> axum::http::Response<axum::body::Body> {
    use axum::extract::Request;
    use tower::util::ServiceExt;

    app.oneshot(
        Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// State wired with real adapters, cheap Argon2 and an in-memory store.
#[cfg(test)]
pub fn test_state() -> AppState {
    let create_account = CreateAccountUseCase::new(
        Box::new(Argon2Hasher::new(1024 * 8, 1, 1).unwrap()),
        Box::new(MemoryAccountStore::default()),
    );

    AppState {
        config: Arc::new(config::Configuration::default()),
        signup: Arc::new(SignupController::new(
            Box::new(EmailValidatorAdapter),
            Box::new(create_account),
        )),
        metrics: None,
    }
}

/// State sharing between routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<config::Configuration>,
    pub signup: Arc<dyn Controller<SignupBody>>,
    pub metrics: Option<PrometheusHandle>,
}

/// Create router.
pub fn app(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        // Add high level tracing/logging to all requests.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().include_headers(true).level(tracing::Level::INFO))
                .on_request(DefaultOnRequest::new())
                .on_response(DefaultOnResponse::new().include_headers(true).latency_unit(LatencyUnit::Micros)),
        )
        // Set a timeout.
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, Duration::from_secs(10)))
        // Remove senstive headers from trace.
        .layer(SetSensitiveHeadersLayer::new([header::AUTHORIZATION, header::COOKIE]))
        // Add CORS preflight support.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers(Any),
        );

    Router::new()
        // `GET /status.json` goes to `status`.
        .route("/status.json", get(router::status::status))
        .route("/metrics", get(router::metrics::handler))
        // `POST /signup` goes to `signup`.
        .route("/signup", post(router::signup::handler))
        .with_state(state)
        .route_layer(AxumMiddleware::from_fn(telemetry::track))
        .layer(middleware)
}

/// Initialize the application state.
pub async fn initialize_state(
    config: Arc<config::Configuration>,
    metrics: Option<PrometheusHandle>,
) -> Result<AppState, Box<dyn std::error::Error>> {
    let hasher =
        Argon2Hasher::from_config(&config.argon2.clone().unwrap_or_default())?;

    let account_store: Box<dyn AccountStore> = match &config.postgres {
        Some(postgres) => Box::new(PgAccountStore::connect(postgres).await?),
        None => {
            tracing::warn!(
                "missing `postgres` entry on configuration, accounts are kept in memory"
            );
            Box::new(MemoryAccountStore::default())
        },
    };

    let create_account =
        CreateAccountUseCase::new(Box::new(hasher), account_store);
    let signup = SignupController::new(
        Box::new(EmailValidatorAdapter),
        Box::new(create_account),
    );

    Ok(AppState {
        config,
        signup: Arc::new(signup),
        metrics,
    })
}
