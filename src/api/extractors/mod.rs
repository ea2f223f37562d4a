//! Custom request extractors.

mod contact_id;
mod validated_json;

pub use contact_id::ContactId;
pub use validated_json::ValidatedJson;
