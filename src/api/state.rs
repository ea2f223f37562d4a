//! Application state - Dependency injection container.
//!
//! Provides handlers with the contact service, the realtime hub and the
//! database handle used by the health check.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, EventHub};
use crate::services::{ContactService, ServiceContainer, Services};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Contact service
    pub contact_service: Arc<dyn ContactService>,
    /// Realtime hub clients subscribe to
    pub events: Arc<EventHub>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);

        Self {
            contact_service: container.contacts(),
            events: container.events(),
            database,
        }
    }
}
