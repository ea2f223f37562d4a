//! Unit of Work pattern implementation.
//!
//! Every save or delete runs inside one database transaction: the contact row
//! and its child rows are written together or not at all.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    AccessMode, ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, IsolationLevel, PaginatorTrait, QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::repositories::entities::{address, contact, email_address};
use super::repositories::{ContactRepository, ContactStore};
use crate::domain::{AddressForm, ContactForm, EmailForm};
use crate::errors::{AppError, AppResult, OptionExt};

/// Boxed closure run inside a transaction.
pub type TransactionFuture<'a, T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Provides read access to contacts and transaction management.
/// Note: This trait is not mockable directly due to the generic method.
/// For testing, mock the repository or run against an in-memory database.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get contact repository (reads outside a transaction)
    fn contacts(&self) -> Arc<dyn ContactRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success or rolled back on error.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TransactionFuture<'a, T> + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get contact repository for this transaction
    pub fn contacts(&self) -> TxContactRepository<'a> {
        TxContactRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    contact_repo: Arc<ContactStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let contact_repo = Arc::new(ContactStore::new(db.clone()));
        Self { db, contact_repo }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn contacts(&self) -> Arc<dyn ContactRepository> {
        self.contact_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TransactionFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await?;

        match f(TransactionContext::new(&txn)).await {
            Ok(result) => {
                txn.commit().await?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware contact repository.
///
/// All writes of a save or delete go through one instance so they share
/// the surrounding transaction.
pub struct TxContactRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxContactRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Whether a contact row exists
    pub async fn exists(&self, id: Uuid) -> AppResult<bool> {
        let count = contact::Entity::find_by_id(id).count(self.txn).await?;
        Ok(count > 0)
    }

    /// Insert a new contact row from the form's scalar fields, returning the
    /// freshly generated id.
    pub async fn insert(&self, form: &ContactForm) -> AppResult<Uuid> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let active_model = contact::ActiveModel {
            id: Set(id),
            title: Set(form.title.clone()),
            first_name: Set(form.first_name.clone()),
            last_name: Set(form.last_name.clone()),
            date_of_birth: Set(form.date_of_birth),
            primary_email: Set(form.resolved_primary_email()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        contact::Entity::insert(active_model).exec(self.txn).await?;
        Ok(id)
    }

    /// Overwrite the scalar fields of an existing contact
    pub async fn update(&self, id: Uuid, form: &ContactForm) -> AppResult<()> {
        let model = contact::Entity::find_by_id(id)
            .one(self.txn)
            .await?
            .ok_or_not_found()?;

        let mut active: contact::ActiveModel = model.into();
        active.title = Set(form.title.clone());
        active.first_name = Set(form.first_name.clone());
        active.last_name = Set(form.last_name.clone());
        active.date_of_birth = Set(form.date_of_birth);
        active.primary_email = Set(form.resolved_primary_email());
        active.updated_at = Set(Utc::now());

        active.update(self.txn).await?;
        Ok(())
    }

    /// Delete every email address and postal address of a contact
    pub async fn delete_children(&self, id: Uuid) -> AppResult<()> {
        email_address::Entity::delete_many()
            .filter(email_address::Column::ContactId.eq(id))
            .exec(self.txn)
            .await?;

        address::Entity::delete_many()
            .filter(address::Column::ContactId.eq(id))
            .exec(self.txn)
            .await?;

        Ok(())
    }

    /// Insert the submitted email addresses and postal addresses
    pub async fn insert_children(
        &self,
        id: Uuid,
        emails: &[EmailForm],
        addresses: &[AddressForm],
    ) -> AppResult<()> {
        // insert_many rejects an empty batch
        if !emails.is_empty() {
            let rows = emails.iter().map(|e| email_address::ActiveModel {
                id: Set(Uuid::new_v4()),
                contact_id: Set(id),
                email_type: Set(e.email_type.clone()),
                email: Set(e.email.clone()),
            });
            email_address::Entity::insert_many(rows)
                .exec(self.txn)
                .await?;
        }

        if !addresses.is_empty() {
            let rows = addresses.iter().map(|a| address::ActiveModel {
                id: Set(Uuid::new_v4()),
                contact_id: Set(id),
                street1: Set(a.street1.clone()),
                street2: Set(a.street2.clone()),
                city: Set(a.city.clone()),
                state: Set(a.state.clone()),
                zip: Set(a.zip.clone()),
                address_type: Set(a.address_type.clone()),
            });
            address::Entity::insert_many(rows).exec(self.txn).await?;
        }

        Ok(())
    }

    /// Delete the contact row itself
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = contact::Entity::delete_by_id(id).exec(self.txn).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}

/// Simpler API for executing transactional operations.
///
/// This helper macro reduces boilerplate when using transactions.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
