//! Build reporting: platform classification and summaries

pub mod build;
pub mod classify;

pub use build::{BuildReport, FileEntry};
pub use classify::{classify_platform, PlatformLabel};
