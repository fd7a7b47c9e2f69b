//! Cartera - client & supplier directory.
//!
//! This binary serves the REST API and the static front end on `PORT`
//! (default 3000).
//!
//! # Architecture
//!
//! - Axum web framework
//! - `PostgreSQL` via sqlx for clients, contacts, and suppliers
//! - Static single-page front end served from `crates/server/public/`
//!
//! # Startup
//!
//! Pending schema migrations are applied before the listener binds, retried
//! up to [`MIGRATION_MAX_ATTEMPTS`] times with a fixed delay (managed
//! databases routinely lag a fresh deploy). If every attempt fails the
//! server starts anyway and the readiness probe reports the broken state.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Router, routing::get};
use sqlx::PgPool;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cartera_server::config::ServerConfig;
use cartera_server::db;
use cartera_server::routes;
use cartera_server::state::AppState;

/// How many times to attempt schema migrations before giving up.
const MIGRATION_MAX_ATTEMPTS: u32 = 5;
/// Fixed delay between migration attempts.
const MIGRATION_RETRY_DELAY: Duration = Duration::from_secs(15);

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cartera_server=info,tower_http=debug".into());

    // Use JSON format on hosted environments for structured log parsing,
    // text format locally
    let is_hosted = std::env::var("WEBSITE_SITE_NAME").is_ok();
    let json_layer = is_hosted.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!is_hosted).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    // Initialize database connection pool
    let pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");
    tracing::info!("Database pool created");

    // Apply pending migrations before accepting traffic
    run_migrations_with_retry(&pool).await;

    // Build application state
    let state = AppState::new(config, pool);
    let addr = state.config().socket_addr();

    // Build router: API first, static front end as the fallback
    let static_dir = state.config().static_dir.clone();
    let index = format!("{static_dir}/index.html");
    let app = Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes::routes())
        .fallback_service(ServeDir::new(&static_dir).fallback(ServeFile::new(index)))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record("latency_ms", latency.as_millis() as u64);
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state);

    // Start server
    tracing::info!("cartera listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Apply pending schema migrations, retrying on failure.
///
/// On a fresh deploy the database is often not reachable yet, so failures
/// are retried with a fixed delay. After the final failure the server is
/// allowed to start; `/health/ready` exposes the unhealthy database.
async fn run_migrations_with_retry(pool: &PgPool) {
    let migrator = sqlx::migrate!("./migrations");

    for attempt in 1..=MIGRATION_MAX_ATTEMPTS {
        match migrator.run(pool).await {
            Ok(()) => {
                tracing::info!("Migrations applied");
                return;
            }
            Err(e) => {
                tracing::warn!(
                    attempt,
                    max_attempts = MIGRATION_MAX_ATTEMPTS,
                    error = %e,
                    "Migration attempt failed"
                );
                if attempt < MIGRATION_MAX_ATTEMPTS {
                    tokio::time::sleep(MIGRATION_RETRY_DELAY).await;
                }
            }
        }
    }

    tracing::error!("All migration attempts failed; starting server anyway");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Verifies database connectivity before returning OK.
/// Returns 503 Service Unavailable if the database is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match sqlx::query("SELECT 1").fetch_one(state.pool()).await {
        Ok(_) => StatusCode::OK,
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
