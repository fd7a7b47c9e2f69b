//! Client route handlers.

use axum::{Json, extract::State};

use cartera_core::ClientId;

use super::{DeleteResponse, PathId, required_name};
use crate::db::ClientRepository;
use crate::error::AppError;
use crate::models::{Client, ClientDetail, ClientSummary, ClientUpdate, NewClient};
use crate::state::AppState;

/// `GET /api/clients` - list all clients with contact counts, name order.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ClientSummary>>, AppError> {
    let clients = ClientRepository::new(state.pool()).list().await?;
    Ok(Json(clients))
}

/// `POST /api/clients` - create a client, optionally with nested contacts.
///
/// The client and its contacts are written in a single transaction; the
/// response includes the created contact rows.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<NewClient>,
) -> Result<Json<ClientDetail>, AppError> {
    let name = required_name(payload.name.as_deref())?.to_owned();

    let created = ClientRepository::new(state.pool())
        .create(&payload, &name)
        .await?;

    tracing::info!(client_id = %created.client.id, contacts = created.contacts.len(), "client created");
    Ok(Json(created))
}

/// `GET /api/clients/{id}` - one client with contacts, newest first.
pub async fn detail(
    State(state): State<AppState>,
    PathId(id): PathId<ClientId>,
) -> Result<Json<ClientDetail>, AppError> {
    let detail = ClientRepository::new(state.pool())
        .get(id)
        .await?
        .ok_or(AppError::NotFound("Client"))?;

    Ok(Json(detail))
}

/// `PUT /api/clients/{id}` - replace the client's mutable fields.
///
/// Full-replace semantics: portal fields omitted from the body are cleared.
/// A missing row is a server error, not a 404.
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId<ClientId>,
    Json(payload): Json<ClientUpdate>,
) -> Result<Json<Client>, AppError> {
    let updated = ClientRepository::new(state.pool())
        .update(id, &payload)
        .await?;

    Ok(Json(updated))
}

/// `DELETE /api/clients/{id}` - delete the client and, by cascade, its contacts.
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId<ClientId>,
) -> Result<Json<DeleteResponse>, AppError> {
    ClientRepository::new(state.pool()).delete(id).await?;

    tracing::info!(client_id = %id, "client deleted");
    Ok(Json(DeleteResponse {
        message: "Client deleted",
    }))
}
