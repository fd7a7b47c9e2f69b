//! Contact repository for database operations.

use sqlx::PgPool;

use cartera_core::{ClientId, ContactId};

use super::RepositoryError;
use crate::models::{Contact, ContactUpdate, NewContact};

const CONTACT_COLUMNS: &str =
    "id, client_id, name, email, department, phone, observations, created_at";

/// Repository for contact database operations.
pub struct ContactRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ContactRepository<'a> {
    /// Create a new contact repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Add a contact to a client.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails, including
    /// when the client does not exist (foreign key violation).
    pub async fn create(
        &self,
        client_id: ClientId,
        new: &NewContact,
    ) -> Result<Contact, RepositoryError> {
        let row = sqlx::query_as::<_, Contact>(&format!(
            r"
            INSERT INTO contact (client_id, name, email, department, phone, observations)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {CONTACT_COLUMNS}
            "
        ))
        .bind(client_id)
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.department)
        .bind(&new.phone)
        .bind(&new.observations)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Replace every mutable field of a contact. Ownership never changes.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such contact exists, or
    /// `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: ContactId,
        update: &ContactUpdate,
    ) -> Result<Contact, RepositoryError> {
        let row = sqlx::query_as::<_, Contact>(&format!(
            r"
            UPDATE contact
            SET name = $2, email = $3, department = $4, phone = $5, observations = $6
            WHERE id = $1
            RETURNING {CONTACT_COLUMNS}
            "
        ))
        .bind(id)
        .bind(&update.name)
        .bind(&update.email)
        .bind(&update.department)
        .bind(&update.phone)
        .bind(&update.observations)
        .fetch_optional(self.pool)
        .await?;

        row.ok_or(RepositoryError::NotFound)
    }

    /// Delete a contact.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such contact existed, or
    /// `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ContactId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM contact WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
