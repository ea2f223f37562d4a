//! Contact manager - contacts with email and postal addresses
//!
//! Every save or delete is broadcast to all open pages as an `Update`
//! server-sent event, and can optionally send an email alert.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Contact aggregate, edit form and change events
//! - **services**: Contact use cases
//! - **infra**: Database, unit of work, realtime hub and mailer
//! - **api**: HTTP handlers and routes
//! - **types**: Shared response types
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Contact, ContactEvent, ContactForm};
pub use errors::{AppError, AppResult};
