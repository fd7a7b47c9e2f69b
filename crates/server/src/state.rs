//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`; holds the database pool and configuration.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    pool: PgPool,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: ServerConfig, pool: PgPool) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, pool }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;
    use sqlx::postgres::PgPoolOptions;

    use super::*;

    #[tokio::test]
    async fn state_exposes_config_and_pool() {
        let config = ServerConfig {
            database_url: SecretString::from("postgres://localhost/cartera"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            static_dir: "crates/server/public".to_owned(),
        };
        // connect_lazy defers I/O, so no database is needed here
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://localhost/cartera")
            .unwrap();

        let state = AppState::new(config, pool);
        assert_eq!(state.config().port, 3000);
        assert_eq!(state.config().static_dir, "crates/server/public");
        assert!(!state.pool().is_closed());
    }
}
