//! Supplier repository for database operations.

use sqlx::PgPool;

use cartera_core::SupplierId;

use super::RepositoryError;
use crate::models::{NewSupplier, Supplier, SupplierUpdate};

const SUPPLIER_COLUMNS: &str =
    "id, name, portal_url, portal_user, portal_pass, observations, created_at";

/// Repository for supplier database operations.
pub struct SupplierRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> SupplierRepository<'a> {
    /// Create a new supplier repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all suppliers ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<Supplier>, RepositoryError> {
        let rows = sqlx::query_as::<_, Supplier>(&format!(
            "SELECT {SUPPLIER_COLUMNS} FROM supplier ORDER BY name ASC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a supplier by id.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, id: SupplierId) -> Result<Option<Supplier>, RepositoryError> {
        let row = sqlx::query_as::<_, Supplier>(&format!(
            "SELECT {SUPPLIER_COLUMNS} FROM supplier WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Create a supplier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, new: &NewSupplier, name: &str) -> Result<Supplier, RepositoryError> {
        let row = sqlx::query_as::<_, Supplier>(&format!(
            r"
            INSERT INTO supplier (name, portal_url, portal_user, portal_pass, observations)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {SUPPLIER_COLUMNS}
            "
        ))
        .bind(name)
        .bind(&new.portal.portal_url)
        .bind(&new.portal.portal_user)
        .bind(&new.portal.portal_pass)
        .bind(&new.observations)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Replace a supplier's mutable fields (same semantics as clients:
    /// full-replace except the NOT NULL name, which persists when absent).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such supplier exists, or
    /// `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: SupplierId,
        update: &SupplierUpdate,
    ) -> Result<Supplier, RepositoryError> {
        let row = sqlx::query_as::<_, Supplier>(&format!(
            r"
            UPDATE supplier
            SET name = COALESCE($2, name),
                portal_url = $3,
                portal_user = $4,
                portal_pass = $5,
                observations = $6
            WHERE id = $1
            RETURNING {SUPPLIER_COLUMNS}
            "
        ))
        .bind(id)
        .bind(&update.name)
        .bind(&update.portal.portal_url)
        .bind(&update.portal.portal_user)
        .bind(&update.portal.portal_pass)
        .bind(&update.observations)
        .fetch_optional(self.pool)
        .await?;

        row.ok_or(RepositoryError::NotFound)
    }

    /// Delete a supplier.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such supplier existed, or
    /// `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: SupplierId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM supplier WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
