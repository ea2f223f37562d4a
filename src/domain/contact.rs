//! Contact domain entity and its owned collections.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// Contact aggregate: a person with the email addresses and postal
/// addresses it owns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contact {
    pub id: Uuid,
    pub title: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    /// Null whenever `emails` is empty
    pub primary_email: Option<String>,
    pub emails: Vec<EmailAddress>,
    pub addresses: Vec<Address>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Email address owned by a contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailAddress {
    pub id: Uuid,
    pub email_type: String,
    pub email: String,
}

/// Postal address owned by a contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    pub id: Uuid,
    pub street1: String,
    pub street2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub address_type: String,
}

/// Row of the contact list
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactSummary {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    #[schema(example = "Dr")]
    pub title: Option<String>,
    #[schema(example = "Ana")]
    pub first_name: String,
    #[schema(example = "Lee")]
    pub last_name: String,
    #[schema(example = "a@x.com")]
    pub primary_email: Option<String>,
    /// Every email address of the contact
    pub emails: Vec<String>,
}

impl From<Contact> for ContactSummary {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            title: contact.title,
            first_name: contact.first_name,
            last_name: contact.last_name,
            primary_email: contact.primary_email,
            emails: contact.emails.into_iter().map(|e| e.email).collect(),
        }
    }
}
