//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod contact_repository;
pub(crate) mod entities;

pub use contact_repository::{ContactRepository, ContactStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use contact_repository::MockContactRepository;
