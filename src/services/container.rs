//! Service Container - Centralized service access.
//!
//! Wires the unit of work, realtime hub and optional mailer into the
//! application services once at startup.

use std::sync::Arc;

use super::{ContactManager, ContactService};
use crate::config::Config;
use crate::infra::{mail_notifier, EventHub, Persistence};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get contact service
    fn contacts(&self) -> Arc<dyn ContactService>;

    /// Get realtime event hub
    fn events(&self) -> Arc<EventHub>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    contact_service: Arc<dyn ContactService>,
    events: Arc<EventHub>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: &Config) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let events = Arc::new(EventHub::new(config.event_channel_capacity));
        let mailer = mail_notifier(&config.mail);

        let contact_service = Arc::new(ContactManager::new(uow, events.clone(), mailer));

        Self {
            contact_service,
            events,
        }
    }
}

impl ServiceContainer for Services {
    fn contacts(&self) -> Arc<dyn ContactService> {
        self.contact_service.clone()
    }

    fn events(&self) -> Arc<EventHub> {
        self.events.clone()
    }
}
