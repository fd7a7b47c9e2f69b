//! Contact route handlers.
//!
//! Creation is nested under the owning client
//! (`POST /api/clients/{id}/contacts`); updates and deletes address the
//! contact directly.

use axum::{Json, extract::State};

use cartera_core::{ClientId, ContactId};

use super::{DeleteResponse, PathId};
use crate::db::ContactRepository;
use crate::error::AppError;
use crate::models::{Contact, ContactUpdate, NewContact};
use crate::state::AppState;

/// `POST /api/clients/{id}/contacts` - add a contact to a client.
pub async fn create(
    State(state): State<AppState>,
    PathId(client_id): PathId<ClientId>,
    Json(payload): Json<NewContact>,
) -> Result<Json<Contact>, AppError> {
    let contact = ContactRepository::new(state.pool())
        .create(client_id, &payload)
        .await?;

    tracing::info!(contact_id = %contact.id, client_id = %client_id, "contact created");
    Ok(Json(contact))
}

/// `PUT /api/contacts/{id}` - replace every contact field.
///
/// A missing row is a server error, not a 404.
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId<ContactId>,
    Json(payload): Json<ContactUpdate>,
) -> Result<Json<Contact>, AppError> {
    let updated = ContactRepository::new(state.pool())
        .update(id, &payload)
        .await?;

    Ok(Json(updated))
}

/// `DELETE /api/contacts/{id}` - delete a contact.
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId<ContactId>,
) -> Result<Json<DeleteResponse>, AppError> {
    ContactRepository::new(state.pool()).delete(id).await?;

    Ok(Json(DeleteResponse {
        message: "Contact deleted",
    }))
}
