//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! All writes use the Unit of Work pattern for transaction management.

mod contact_service;
pub mod container;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use contact_service::{ContactManager, ContactService};
