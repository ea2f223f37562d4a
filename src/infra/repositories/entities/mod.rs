//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod address;
pub mod contact;
pub mod email_address;

use crate::domain::Contact;

/// Assemble the domain aggregate from a contact row and its child rows.
pub fn into_contact(
    model: contact::Model,
    emails: Vec<email_address::Model>,
    addresses: Vec<address::Model>,
) -> Contact {
    Contact {
        id: model.id,
        title: model.title,
        first_name: model.first_name,
        last_name: model.last_name,
        date_of_birth: model.date_of_birth,
        primary_email: model.primary_email,
        emails: emails.into_iter().map(Into::into).collect(),
        addresses: addresses.into_iter().map(Into::into).collect(),
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
