use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::IconsetConfig;
use crate::refusal::{RefusalCode, RefusalEnvelope};

/// Config file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "iconset.toml";

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "ICONSET_CONFIG";

/// Configuration loading errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn to_refusal(&self) -> RefusalEnvelope {
        let path = match self {
            ConfigError::Io { path, .. } | ConfigError::Parse { path, .. } => path,
        };
        RefusalEnvelope::new(
            RefusalCode::Config,
            Some(self.to_string()),
            Some(serde_json::json!({ "path": path.display().to_string() })),
        )
    }
}

/// Determine which config file to read, if any.
///
/// Priority:
/// 1. explicit `--config` path
/// 2. `ICONSET_CONFIG` env var
/// 3. `./iconset.toml` when it exists
pub fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    let local = PathBuf::from(CONFIG_FILE_NAME);
    local.is_file().then_some(local)
}

/// Load configuration, falling back to defaults when no file is found.
pub fn load_config(explicit: Option<&Path>) -> Result<IconsetConfig, ConfigError> {
    match config_path(explicit) {
        Some(path) => load_config_file(&path),
        None => {
            debug!("no config file found; using defaults");
            Ok(IconsetConfig::default())
        }
    }
}

/// Read and parse one config file. Relative paths inside it resolve against
/// the file's directory.
pub fn load_config_file(path: &Path) -> Result<IconsetConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut config: IconsetConfig = toml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
    info!(path = %path.display(), "loaded config");
    Ok(config)
}
