//! Client repository for database operations.

use sqlx::PgPool;

use cartera_core::ClientId;

use super::RepositoryError;
use crate::models::{Client, ClientDetail, ClientSummary, ClientUpdate, Contact, NewClient};

const CLIENT_COLUMNS: &str = "id, name, has_portal, portal_url, portal_user, portal_pass, created_at";

/// Repository for client database operations.
pub struct ClientRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ClientRepository<'a> {
    /// Create a new client repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all clients ordered by name, each annotated with its contact count.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self) -> Result<Vec<ClientSummary>, RepositoryError> {
        let rows = sqlx::query_as::<_, ClientSummary>(
            r"
            SELECT c.id, c.name, c.has_portal, c.portal_url, c.portal_user,
                   c.portal_pass, c.created_at,
                   COUNT(ct.id) AS contact_count
            FROM client c
            LEFT JOIN contact ct ON ct.client_id = c.id
            GROUP BY c.id
            ORDER BY c.name ASC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    /// Get a client with its contacts, newest contact first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get(&self, id: ClientId) -> Result<Option<ClientDetail>, RepositoryError> {
        let client = sqlx::query_as::<_, Client>(&format!(
            "SELECT {CLIENT_COLUMNS} FROM client WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        let Some(client) = client else {
            return Ok(None);
        };

        let contacts = sqlx::query_as::<_, Contact>(
            r"
            SELECT id, client_id, name, email, department, phone, observations, created_at
            FROM contact
            WHERE client_id = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(Some(ClientDetail { client, contacts }))
    }

    /// Create a client, optionally with nested contacts.
    ///
    /// The client row and all contact rows are written in one transaction:
    /// either the client exists with all its contacts or nothing exists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any statement fails.
    pub async fn create(&self, new: &NewClient, name: &str) -> Result<ClientDetail, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let client = sqlx::query_as::<_, Client>(&format!(
            r"
            INSERT INTO client (name, has_portal, portal_url, portal_user, portal_pass)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {CLIENT_COLUMNS}
            "
        ))
        .bind(name)
        .bind(new.has_portal)
        .bind(&new.portal.portal_url)
        .bind(&new.portal.portal_user)
        .bind(&new.portal.portal_pass)
        .fetch_one(&mut *tx)
        .await?;

        let mut contacts = Vec::with_capacity(new.contacts.len());
        for contact in &new.contacts {
            let row = sqlx::query_as::<_, Contact>(
                r"
                INSERT INTO contact (client_id, name, email, department, phone, observations)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING id, client_id, name, email, department, phone, observations, created_at
                ",
            )
            .bind(client.id)
            .bind(&contact.name)
            .bind(&contact.email)
            .bind(&contact.department)
            .bind(&contact.phone)
            .bind(&contact.observations)
            .fetch_one(&mut *tx)
            .await?;
            contacts.push(row);
        }

        tx.commit().await?;

        Ok(ClientDetail { client, contacts })
    }

    /// Replace a client's mutable fields.
    ///
    /// Portal fields and `has_portal` are written exactly as given (absent
    /// payload fields arrive here as `None`/`false`); the name only changes
    /// when one was supplied.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such client exists, or
    /// `RepositoryError::Database` if the query fails.
    pub async fn update(
        &self,
        id: ClientId,
        update: &ClientUpdate,
    ) -> Result<Client, RepositoryError> {
        let row = sqlx::query_as::<_, Client>(&format!(
            r"
            UPDATE client
            SET name = COALESCE($2, name),
                has_portal = $3,
                portal_url = $4,
                portal_user = $5,
                portal_pass = $6
            WHERE id = $1
            RETURNING {CLIENT_COLUMNS}
            "
        ))
        .bind(id)
        .bind(&update.name)
        .bind(update.has_portal)
        .bind(&update.portal.portal_url)
        .bind(&update.portal.portal_user)
        .bind(&update.portal.portal_pass)
        .fetch_optional(self.pool)
        .await?;

        row.ok_or(RepositoryError::NotFound)
    }

    /// Delete a client. Contacts go with it via `ON DELETE CASCADE`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no such client existed, or
    /// `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: ClientId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM client WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
