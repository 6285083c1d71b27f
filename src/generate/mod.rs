//! Generator boundary: resolved input in, named artifacts and HTML tags out

pub mod fetch;
pub mod manifest;
pub mod mime;

use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::config::IconsetConfig;
use crate::input::InputSource;
use crate::refusal::{RefusalCode, RefusalEnvelope};

pub use manifest::ManifestGenerator;

/// A named generated output, ready to persist.
///
/// `name` is relative to the destination directory and may contain `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub contents: Vec<u8>,
}

impl Artifact {
    pub fn new(name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

/// Everything one generator call produces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorResponse {
    pub images: Vec<Artifact>,
    pub files: Vec<Artifact>,
    pub html: Vec<String>,
}

/// Produces the full artifact set in a single call.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(
        &self,
        input: &InputSource,
        config: &IconsetConfig,
    ) -> Result<GeneratorResponse, GenerateError>;
}

/// Generation errors.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("cannot read source {}: {source}", path.display())]
    ReadSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot fetch source {url}: {message}")]
    FetchSource { url: String, message: String },
    #[error("cannot encode {name}: {source}")]
    Encode {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("generator task failed: {0}")]
    Task(String),
}

impl GenerateError {
    pub fn to_refusal(&self) -> RefusalEnvelope {
        let detail = match self {
            GenerateError::ReadSource { path, .. } => {
                Some(serde_json::json!({ "source": path.display().to_string() }))
            }
            GenerateError::FetchSource { url, .. } => Some(serde_json::json!({ "source": url })),
            GenerateError::Encode { name, .. } => Some(serde_json::json!({ "artifact": name })),
            GenerateError::Task(_) => None,
        };
        RefusalEnvelope::new(RefusalCode::Generate, Some(self.to_string()), detail)
    }
}
