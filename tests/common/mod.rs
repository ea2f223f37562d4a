//! Shared fixtures for integration tests.
//!
//! Every test gets its own in-memory SQLite database with all migrations
//! applied. The pool is capped at one connection so the database lives as
//! long as the pool does.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use contact_manager::config::Config;
use contact_manager::domain::{AddressForm, ContactEvent, ContactForm, EmailForm};
use contact_manager::errors::{AppError, AppResult};
use contact_manager::infra::{ChangeNotifier, Database, MailNotifier, Persistence};
use contact_manager::services::ContactManager;

pub fn sqlite_config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        database_max_connections: 1,
        ..Config::default()
    }
}

pub async fn setup_database() -> Database {
    Database::connect(&sqlite_config())
        .await
        .expect("in-memory database")
}

/// Counts every broadcast event
#[derive(Default)]
pub struct RecordingNotifier {
    events: AtomicUsize,
}

impl RecordingNotifier {
    pub fn count(&self) -> usize {
        self.events.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChangeNotifier for RecordingNotifier {
    async fn notify_all(&self, event: ContactEvent) {
        assert_eq!(event, ContactEvent::Update);
        self.events.fetch_add(1, Ordering::SeqCst);
    }
}

/// Records the contacts it was alerted about; optionally fails every send
#[derive(Default)]
pub struct RecordingMailer {
    contacts: Mutex<Vec<Uuid>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn contacts(&self) -> Vec<Uuid> {
        self.contacts.lock().unwrap().clone()
    }
}

#[async_trait]
impl MailNotifier for RecordingMailer {
    async fn contact_changed(&self, contact_id: Uuid) -> AppResult<()> {
        self.contacts.lock().unwrap().push(contact_id);
        if self.fail {
            return Err(AppError::internal("relay unavailable"));
        }
        Ok(())
    }
}

pub fn contact_service(
    db: &Database,
    notifier: Arc<RecordingNotifier>,
    mailer: Option<Arc<RecordingMailer>>,
) -> ContactManager<Persistence> {
    ContactManager::new(
        Arc::new(Persistence::new(db.get_connection())),
        notifier,
        mailer.map(|m| m as Arc<dyn MailNotifier>),
    )
}

pub fn email(email_type: &str, address: &str) -> EmailForm {
    EmailForm {
        email_type: email_type.to_string(),
        email: address.to_string(),
    }
}

pub fn address(street1: &str, city: &str, address_type: &str) -> AddressForm {
    AddressForm {
        street1: street1.to_string(),
        street2: None,
        city: city.to_string(),
        state: "IL".to_string(),
        zip: "62701".to_string(),
        address_type: address_type.to_string(),
    }
}

/// New-contact form with one email and one address
pub fn ana_lee() -> ContactForm {
    ContactForm {
        title: Some("Dr".to_string()),
        first_name: "Ana".to_string(),
        last_name: "Lee".to_string(),
        primary_email: Some("a@x.com".to_string()),
        emails: vec![email("home", "a@x.com")],
        addresses: vec![address("1 Main St", "Springfield", "home")],
        ..ContactForm::empty()
    }
}

pub fn named(first_name: &str) -> ContactForm {
    ContactForm {
        first_name: first_name.to_string(),
        last_name: "Test".to_string(),
        ..ContactForm::empty()
    }
}
