//! Output path normalization and member-name safety checks

pub mod normalize;

pub use normalize::{is_safe_relative_path, normalize_location, normalize_path};
