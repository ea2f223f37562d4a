//! HTTP request handlers.

pub mod contact_handler;
pub mod event_handler;

pub use contact_handler::contact_routes;
pub use event_handler::event_routes;
