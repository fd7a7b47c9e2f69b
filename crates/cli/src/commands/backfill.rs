//! One-off legacy portal backfill.
//!
//! Portal credentials used to be recorded per contact. They now live on the
//! client, and this command copies them over for databases that predate the
//! move: every contact still flagged `has_portal = true` contributes its
//! credentials to its owning client.
//!
//! A client can have several such contacts; which one wins is an explicit
//! policy (`--conflicts first|latest`) rather than an accident of row order.
//! Every discarded duplicate is logged. The command is a dry run unless
//! `--apply` is passed.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use sqlx::PgPool;
use thiserror::Error;

use cartera_core::{ClientId, PortalCredentials};

/// Which contact's credentials win when a client has several with portal data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConflictPolicy {
    /// Keep the first contact encountered (lowest id) - the legacy behavior.
    First,
    /// Keep the most recently created contact.
    Latest,
}

/// Errors that can occur during the backfill.
#[derive(Debug, Error)]
pub enum BackfillError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// A contact row carrying legacy portal data, joined with its client.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LegacyPortalContact {
    pub client_id: ClientId,
    pub client_name: String,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub portal_url: Option<String>,
    pub portal_user: Option<String>,
    pub portal_pass: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LegacyPortalContact {
    /// Human-readable label for log lines: name, else email, else "Unknown".
    fn source_label(&self) -> &str {
        self.contact_name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.contact_email.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or("Unknown")
    }

    fn credentials(&self) -> PortalCredentials {
        PortalCredentials::new(
            self.portal_url.clone(),
            self.portal_user.clone(),
            self.portal_pass.clone(),
        )
    }
}

/// One planned client update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackfillEntry {
    pub client_id: ClientId,
    pub client_name: String,
    pub source_contact: String,
    pub credentials: PortalCredentials,
}

/// Group legacy portal contacts by client under the given conflict policy.
///
/// Returns the planned updates (in first-encountered client order) and a
/// warning line for every contact whose credentials were discarded.
#[must_use]
pub fn plan_backfill(
    rows: &[LegacyPortalContact],
    policy: ConflictPolicy,
) -> (Vec<BackfillEntry>, Vec<String>) {
    let mut winners: Vec<&LegacyPortalContact> = Vec::new();
    let mut warnings = Vec::new();

    for row in rows {
        match winners.iter().position(|w| w.client_id == row.client_id) {
            None => winners.push(row),
            Some(idx) => {
                let keep_new = match policy {
                    ConflictPolicy::First => false,
                    ConflictPolicy::Latest => row.created_at > winners[idx].created_at,
                };
                let discarded = if keep_new {
                    std::mem::replace(&mut winners[idx], row)
                } else {
                    row
                };
                warnings.push(format!(
                    "client \"{}\" has multiple contacts with portal info; ignoring contact: {}",
                    row.client_name,
                    discarded.source_label()
                ));
            }
        }
    }

    let plan = winners
        .into_iter()
        .map(|row| BackfillEntry {
            client_id: row.client_id,
            client_name: row.client_name.clone(),
            source_contact: row.source_label().to_owned(),
            credentials: row.credentials(),
        })
        .collect();

    (plan, warnings)
}

/// Run the backfill.
///
/// # Errors
///
/// Returns `BackfillError` if `DATABASE_URL` is unset or a query fails.
pub async fn run(apply: bool, policy: ConflictPolicy) -> Result<(), BackfillError> {
    dotenvy::dotenv().ok();

    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| BackfillError::MissingEnvVar("DATABASE_URL"))?;
    let pool = PgPool::connect(&database_url).await?;

    let rows = fetch_legacy_portal_contacts(&pool).await?;
    tracing::info!(count = rows.len(), "contacts with legacy portal data");

    if rows.is_empty() {
        tracing::info!("No portal data to backfill");
        return Ok(());
    }

    let (plan, warnings) = plan_backfill(&rows, policy);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }
    for entry in &plan {
        tracing::info!(
            client = %entry.client_name,
            url = entry.credentials.portal_url.as_deref().unwrap_or("-"),
            from_contact = %entry.source_contact,
            "planned update"
        );
    }

    if !apply {
        tracing::info!(
            clients = plan.len(),
            "dry run complete; re-run with --apply to write"
        );
        return Ok(());
    }

    for entry in &plan {
        sqlx::query(
            r"
            UPDATE client
            SET has_portal = TRUE, portal_url = $2, portal_user = $3, portal_pass = $4
            WHERE id = $1
            ",
        )
        .bind(entry.client_id)
        .bind(&entry.credentials.portal_url)
        .bind(&entry.credentials.portal_user)
        .bind(&entry.credentials.portal_pass)
        .execute(&pool)
        .await?;
        tracing::info!(client_id = %entry.client_id, "client updated");
    }

    tracing::info!(clients = plan.len(), "backfill complete");
    Ok(())
}

async fn fetch_legacy_portal_contacts(
    pool: &PgPool,
) -> Result<Vec<LegacyPortalContact>, sqlx::Error> {
    sqlx::query_as::<_, LegacyPortalContact>(
        r"
        SELECT ct.client_id, c.name AS client_name,
               ct.name AS contact_name, ct.email AS contact_email,
               ct.portal_url, ct.portal_user, ct.portal_pass, ct.created_at
        FROM contact ct
        JOIN client c ON c.id = ct.client_id
        WHERE ct.has_portal = TRUE
        ORDER BY ct.id ASC
        ",
    )
    .fetch_all(pool)
    .await
}
