//! Contact edit form.
//!
//! The same shape serves as the edit view model returned to the client and
//! as the payload of a save request. A nil (or absent) id means "create".

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::contact::{Address, Contact, EmailAddress};

/// Contact edit model / save payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    /// Contact id; nil, null or absent creates a new contact
    #[serde(default, deserialize_with = "nil_if_null")]
    #[schema(example = "00000000-0000-0000-0000-000000000000")]
    pub id: Uuid,
    #[serde(default)]
    #[validate(length(max = 100, message = "Title is too long"))]
    #[schema(example = "Dr")]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 100, message = "First name is required"))]
    #[schema(example = "Ana")]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(max = 100, message = "Last name is too long"))]
    #[schema(example = "Lee")]
    pub last_name: String,
    #[serde(default)]
    #[schema(value_type = Option<String>, format = Date, example = "1990-04-01")]
    pub date_of_birth: Option<NaiveDate>,
    /// Designated default email; dropped when `emails` is empty
    #[serde(default)]
    #[schema(example = "a@x.com")]
    pub primary_email: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub emails: Vec<EmailForm>,
    #[serde(default)]
    #[validate(nested)]
    pub addresses: Vec<AddressForm>,
}

/// Email entry of the edit form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct EmailForm {
    #[serde(rename = "type", default)]
    #[validate(length(max = 255, message = "Email type is too long"))]
    #[schema(example = "home")]
    pub email_type: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "a@x.com")]
    pub email: String,
}

/// Address entry of the edit form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddressForm {
    #[serde(default)]
    #[validate(length(max = 255, message = "Street is too long"))]
    #[schema(example = "1 Main St")]
    pub street1: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "Street is too long"))]
    pub street2: Option<String>,
    #[serde(default)]
    #[validate(length(max = 255, message = "City is too long"))]
    #[schema(example = "Springfield")]
    pub city: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "State is too long"))]
    #[schema(example = "IL")]
    pub state: String,
    #[serde(default)]
    #[validate(length(max = 255, message = "Zip is too long"))]
    #[schema(example = "62701")]
    pub zip: String,
    #[serde(rename = "type", default)]
    #[validate(length(max = 255, message = "Address type is too long"))]
    #[schema(example = "home")]
    pub address_type: String,
}

impl ContactForm {
    /// Empty form for a contact that does not exist yet.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Id of the contact being edited, `None` when the form creates one.
    pub fn existing_id(&self) -> Option<Uuid> {
        if self.id.is_nil() {
            None
        } else {
            Some(self.id)
        }
    }

    /// Primary email to persist: null when no email addresses are submitted,
    /// otherwise the submitted value as-is.
    pub fn resolved_primary_email(&self) -> Option<String> {
        if self.emails.is_empty() {
            None
        } else {
            self.primary_email.clone()
        }
    }
}

fn nil_if_null<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Uuid>::deserialize(deserializer)?.unwrap_or_else(Uuid::nil))
}

impl From<Contact> for ContactForm {
    fn from(contact: Contact) -> Self {
        Self {
            id: contact.id,
            title: contact.title,
            first_name: contact.first_name,
            last_name: contact.last_name,
            date_of_birth: contact.date_of_birth,
            primary_email: contact.primary_email,
            emails: contact.emails.into_iter().map(EmailForm::from).collect(),
            addresses: contact.addresses.into_iter().map(AddressForm::from).collect(),
        }
    }
}

impl From<EmailAddress> for EmailForm {
    fn from(email: EmailAddress) -> Self {
        Self {
            email_type: email.email_type,
            email: email.email,
        }
    }
}

impl From<Address> for AddressForm {
    fn from(address: Address) -> Self {
        Self {
            street1: address.street1,
            street2: address.street2,
            city: address.city,
            state: address.state,
            zip: address.zip,
            address_type: address.address_type,
        }
    }
}
