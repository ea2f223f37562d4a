//! Contact repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, LoaderTrait, ModelTrait, QueryOrder,
};
use uuid::Uuid;

use super::entities::{
    self, address,
    contact::{self, Entity as ContactEntity},
    email_address,
};
use crate::domain::Contact;
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Read-side contact repository trait for dependency injection.
///
/// Writes go through the unit of work so that a save or delete commits
/// as a single transaction.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// List every contact with its email addresses, ordered by first name
    async fn list_with_emails(&self) -> AppResult<Vec<Contact>>;

    /// Find a contact with its email addresses and postal addresses
    async fn find_with_details(&self, id: Uuid) -> AppResult<Option<Contact>>;
}

/// Concrete implementation of ContactRepository
pub struct ContactStore {
    db: DatabaseConnection,
}

impl ContactStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactStore {
    async fn list_with_emails(&self) -> AppResult<Vec<Contact>> {
        Ok(list_with_emails(&self.db).await?)
    }

    async fn find_with_details(&self, id: Uuid) -> AppResult<Option<Contact>> {
        Ok(find_with_details(&self.db, id).await?)
    }
}

/// Contacts ordered by first name, each with its emails (addresses are not
/// loaded for the list).
async fn list_with_emails<C: ConnectionTrait>(db: &C) -> Result<Vec<Contact>, DbErr> {
    let contacts = ContactEntity::find()
        .order_by_asc(contact::Column::FirstName)
        .order_by_asc(contact::Column::LastName)
        .all(db)
        .await?;

    let emails = contacts.load_many(email_address::Entity, db).await?;

    Ok(contacts
        .into_iter()
        .zip(emails)
        .map(|(model, emails)| entities::into_contact(model, emails, Vec::new()))
        .collect())
}

/// One contact with both child collections.
async fn find_with_details<C: ConnectionTrait>(
    db: &C,
    id: Uuid,
) -> Result<Option<Contact>, DbErr> {
    let Some(model) = ContactEntity::find_by_id(id).one(db).await? else {
        return Ok(None);
    };

    let emails = model.find_related(email_address::Entity).all(db).await?;
    let addresses = model.find_related(address::Entity).all(db).await?;

    Ok(Some(entities::into_contact(model, emails, addresses)))
}
