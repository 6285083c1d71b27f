//! Artifact persistence

pub mod writer;

pub use writer::{write_artifacts, WriteError, WriteRecord};
