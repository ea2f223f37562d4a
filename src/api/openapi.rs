//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{contact_handler, event_handler};
use crate::domain::{AddressForm, ContactForm, ContactSummary, EmailForm};

/// OpenAPI documentation for the contact manager
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contact Manager",
        version = "0.1.0",
        description = "Contacts with email and postal addresses, pushed live to every open page"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        contact_handler::get_contacts,
        contact_handler::new_contact,
        contact_handler::edit_contact,
        contact_handler::save_contact,
        contact_handler::delete_contact,
        event_handler::subscribe,
    ),
    components(
        schemas(
            ContactSummary,
            ContactForm,
            EmailForm,
            AddressForm,
            contact_handler::SavedContact,
        )
    ),
    tags(
        (name = "Contacts", description = "Contact list and edit form operations"),
        (name = "Events", description = "Realtime change notifications")
    )
)]
pub struct ApiDoc;
