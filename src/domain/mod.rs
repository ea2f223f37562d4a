//! Domain layer - Core business entities and logic
//!
//! Contact aggregate, the edit form used to create and update it, and the
//! change event broadcast to clients. No infrastructure dependencies.

pub mod contact;
pub mod contact_form;
pub mod event;

pub use contact::{Address, Contact, ContactSummary, EmailAddress};
pub use contact_form::{AddressForm, ContactForm, EmailForm};
pub use event::ContactEvent;
