//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections, migrations and repositories
//! - Unit of Work for transaction management
//! - Realtime broadcast of change events
//! - SMTP change alerts

pub mod db;
pub mod mailer;
pub mod realtime;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use mailer::{mail_notifier, EmailMessage, LogMailer, MailNotifier, SmtpMailer};
pub use realtime::{ChangeNotifier, EventHub};
pub use repositories::{ContactRepository, ContactStore};
pub use unit_of_work::{
    Persistence, TransactionContext, TransactionFuture, TxContactRepository, UnitOfWork,
};

#[cfg(any(test, feature = "test-utils"))]
pub use mailer::MockMailNotifier;
#[cfg(any(test, feature = "test-utils"))]
pub use realtime::MockChangeNotifier;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockContactRepository;
