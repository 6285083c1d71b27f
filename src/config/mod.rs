//! `iconset.toml` configuration

pub mod loader;
pub mod model;

pub use loader::{config_path, load_config, load_config_file, ConfigError, CONFIG_ENV, CONFIG_FILE_NAME};
pub use model::{IconToggle, IconToggles, IconsetConfig};
