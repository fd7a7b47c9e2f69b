//! Supplier models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cartera_core::{PortalCredentials, SupplierId};

/// A supplier row as served by the API. No relationship to clients.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub portal: PortalCredentials,
    pub observations: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for `POST /api/suppliers`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSupplier {
    pub name: Option<String>,
    #[serde(flatten)]
    pub portal: PortalCredentials,
    pub observations: Option<String>,
}

/// Payload for `PUT /api/suppliers/:id`.
///
/// Full-replace: omitted portal fields and observations become NULL; an
/// omitted `name` leaves the stored name unchanged (NOT NULL column).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierUpdate {
    pub name: Option<String>,
    #[serde(flatten)]
    pub portal: PortalCredentials,
    pub observations: Option<String>,
}
