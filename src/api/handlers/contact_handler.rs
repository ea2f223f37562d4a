//! Contact handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{delete, get},
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::extractors::{ContactId, ValidatedJson};
use crate::api::AppState;
use crate::domain::{ContactForm, ContactSummary};
use crate::errors::{AppError, AppResult};
use crate::types::ApiResponse;

/// Id of a saved contact
#[derive(Debug, Serialize, ToSchema)]
pub struct SavedContact {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
}

/// Create contact routes
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_contacts).post(save_contact))
        .route("/new", get(new_contact))
        .route("/:id/edit", get(edit_contact))
        .route("/:id", delete(delete_contact))
}

/// List all contacts ordered by first name
#[utoipa::path(
    get,
    path = "/contacts",
    tag = "Contacts",
    responses(
        (status = 200, description = "Contact list", body = Vec<ContactSummary>),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_contacts(State(state): State<AppState>) -> AppResult<Json<Vec<ContactSummary>>> {
    let contacts = state.contact_service.list_contacts().await?;
    Ok(Json(contacts.into_iter().map(ContactSummary::from).collect()))
}

/// Empty edit model for a new contact
#[utoipa::path(
    get,
    path = "/contacts/new",
    tag = "Contacts",
    responses(
        (status = 200, description = "Empty contact form", body = ContactForm)
    )
)]
pub async fn new_contact() -> Json<ContactForm> {
    Json(ContactForm::empty())
}

/// Edit model of an existing contact
#[utoipa::path(
    get,
    path = "/contacts/{id}/edit",
    tag = "Contacts",
    params(
        ("id" = Uuid, Path, description = "Contact ID")
    ),
    responses(
        (status = 200, description = "Contact form", body = ContactForm),
        (status = 404, description = "Contact not found or id is not a UUID")
    )
)]
pub async fn edit_contact(
    State(state): State<AppState>,
    ContactId(id): ContactId,
) -> AppResult<Json<ContactForm>> {
    let contact = state.contact_service.get_contact(id).await?;
    Ok(Json(ContactForm::from(contact)))
}

/// Create or update a contact
///
/// A nil, null or missing `id` creates a new contact. Otherwise the contact is
/// updated and its emails and addresses are replaced by the submitted ones.
#[utoipa::path(
    post,
    path = "/contacts",
    tag = "Contacts",
    request_body = ContactForm,
    responses(
        (status = 200, description = "Contact saved", body = SavedContact),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Contact not found")
    )
)]
pub async fn save_contact(
    State(state): State<AppState>,
    ValidatedJson(form): ValidatedJson<ContactForm>,
) -> AppResult<Json<ApiResponse<SavedContact>>> {
    let id = state.contact_service.save_contact(form).await?;
    Ok(Json(ApiResponse::success(SavedContact { id })))
}

/// Delete a contact with its emails and addresses
#[utoipa::path(
    delete,
    path = "/contacts/{id}",
    tag = "Contacts",
    params(
        ("id" = Uuid, Path, description = "Contact ID")
    ),
    responses(
        (status = 200, description = "Contact deleted"),
        (status = 400, description = "Contact does not exist or id is not a UUID")
    )
)]
pub async fn delete_contact(
    State(state): State<AppState>,
    id: Result<ContactId, AppError>,
) -> AppResult<Json<ApiResponse<()>>> {
    let ContactId(id) = id.map_err(|_| AppError::bad_request("Contact id is not a valid UUID"))?;
    state.contact_service.delete_contact(id).await?;
    Ok(Json(ApiResponse::message("Contact deleted")))
}
