//! Refusal system for iconset errors

pub mod codes;
pub mod envelope;

pub use codes::RefusalCode;
pub use envelope::{RefusalDetail, RefusalEnvelope, ENVELOPE_VERSION};
