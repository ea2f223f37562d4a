//! Contact service - create, edit, list and delete contacts.
//!
//! Each mutation runs as one unit of work. After a successful commit every
//! connected client is told that data changed, and when mail alerts are
//! enabled the configured recipient gets an email. Neither notification can
//! change the outcome of the request.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Contact, ContactEvent, ContactForm};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{ChangeNotifier, MailNotifier, UnitOfWork};
use crate::with_transaction;

/// Contact service trait for dependency injection.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// All contacts with their email addresses, ordered by first name
    async fn list_contacts(&self) -> AppResult<Vec<Contact>>;

    /// One contact with emails and addresses; `NotFound` if absent
    async fn get_contact(&self, id: Uuid) -> AppResult<Contact>;

    /// Create (nil id) or update a contact, replacing all of its email
    /// addresses and postal addresses with the submitted ones.
    ///
    /// Returns the id of the saved contact. `NotFound` if an update
    /// targets an unknown id.
    async fn save_contact(&self, form: ContactForm) -> AppResult<Uuid>;

    /// Delete a contact and its child rows; `BadRequest` if absent
    async fn delete_contact(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of ContactService using Unit of Work.
pub struct ContactManager<U: UnitOfWork> {
    uow: Arc<U>,
    notifier: Arc<dyn ChangeNotifier>,
    mailer: Option<Arc<dyn MailNotifier>>,
}

impl<U: UnitOfWork> ContactManager<U> {
    /// Create new contact service instance.
    ///
    /// `mailer` is `None` when change alerts are disabled.
    pub fn new(
        uow: Arc<U>,
        notifier: Arc<dyn ChangeNotifier>,
        mailer: Option<Arc<dyn MailNotifier>>,
    ) -> Self {
        Self {
            uow,
            notifier,
            mailer,
        }
    }

    /// Broadcast the change and send the optional alert.
    async fn publish_change(&self, contact_id: Uuid) {
        self.notifier.notify_all(ContactEvent::Update).await;

        if let Some(mailer) = &self.mailer {
            if let Err(e) = mailer.contact_changed(contact_id).await {
                tracing::warn!(%contact_id, "Change alert failed: {}", e);
            }
        }
    }
}

#[async_trait]
impl<U: UnitOfWork> ContactService for ContactManager<U> {
    async fn list_contacts(&self) -> AppResult<Vec<Contact>> {
        self.uow.contacts().list_with_emails().await
    }

    async fn get_contact(&self, id: Uuid) -> AppResult<Contact> {
        self.uow
            .contacts()
            .find_with_details(id)
            .await?
            .ok_or_not_found()
    }

    async fn save_contact(&self, form: ContactForm) -> AppResult<Uuid> {
        let existing = form.existing_id();
        let email_count = form.emails.len();
        let address_count = form.addresses.len();

        let contact_id = with_transaction!(self.uow, |ctx| {
            let contacts = ctx.contacts();

            let id = match existing {
                None => contacts.insert(&form).await?,
                Some(id) => {
                    if !contacts.exists(id).await? {
                        return Err(AppError::NotFound);
                    }
                    contacts.update(id, &form).await?;
                    contacts.delete_children(id).await?;
                    id
                }
            };

            contacts
                .insert_children(id, &form.emails, &form.addresses)
                .await?;
            Ok::<_, AppError>(id)
        })?;

        tracing::info!(
            %contact_id,
            created = existing.is_none(),
            emails = email_count,
            addresses = address_count,
            "Contact saved"
        );

        self.publish_change(contact_id).await;
        Ok(contact_id)
    }

    async fn delete_contact(&self, id: Uuid) -> AppResult<()> {
        with_transaction!(self.uow, |ctx| {
            let contacts = ctx.contacts();

            if !contacts.exists(id).await? {
                return Err(AppError::bad_request(format!("Contact {} does not exist", id)));
            }

            contacts.delete_children(id).await?;
            contacts.delete(id).await
        })?;

        tracing::info!(contact_id = %id, "Contact deleted");

        self.publish_change(id).await;
        Ok(())
    }
}
