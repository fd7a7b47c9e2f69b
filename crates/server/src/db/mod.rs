//! Database operations for the directory `PostgreSQL` schema.
//!
//! # Tables
//!
//! - `client` - Clients, including their portal credentials
//! - `contact` - Contacts, exclusively owned by a client (cascade delete)
//! - `supplier` - Suppliers, independent of clients
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and are applied on
//! server startup (with retry) or explicitly via:
//! ```bash
//! cargo run -p cartera-cli -- migrate
//! ```

pub mod clients;
pub mod contacts;
pub mod suppliers;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use clients::ClientRepository;
pub use contacts::ContactRepository;
pub use suppliers::SupplierRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
