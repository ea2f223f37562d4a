//! Change events pushed to connected clients.

use serde::Serialize;

use crate::config::EVENT_UPDATE;

/// Realtime notification sent after contact data changes.
///
/// Carries no payload; clients re-fetch what they display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ContactEvent {
    Update,
}

impl ContactEvent {
    /// Wire name of the event
    pub fn name(&self) -> &'static str {
        match self {
            ContactEvent::Update => EVENT_UPDATE,
        }
    }
}

impl std::fmt::Display for ContactEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
