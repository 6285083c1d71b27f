//! Concurrent artifact writer with per-artifact timing

use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::generate::Artifact;
use crate::path::is_safe_relative_path;
use crate::refusal::{RefusalCode, RefusalEnvelope};

/// Result of writing a single artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteRecord {
    /// Artifact name relative to the destination directory.
    pub artifact_name: String,
    /// Wall-clock time spent on this write.
    pub elapsed_ms: u64,
    /// Number of bytes written.
    pub size: u64,
    /// `sha256:<hex>` of the written bytes.
    pub sha256: String,
}

/// Writer errors
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Artifact name is absolute or climbs out of the destination
    #[error("unsafe artifact name '{name}'")]
    UnsafeName { name: String },

    /// IO operation failed
    #[error("IO operation '{operation}' failed on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        operation: &'static str,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    /// Convert to a refusal envelope
    pub fn to_refusal(&self) -> RefusalEnvelope {
        match self {
            WriteError::UnsafeName { name } => RefusalEnvelope::new(
                RefusalCode::UnsafePath,
                Some(self.to_string()),
                Some(serde_json::json!({ "name": name })),
            ),
            WriteError::Io {
                path, operation, ..
            } => RefusalEnvelope::new(
                RefusalCode::Io,
                Some(self.to_string()),
                Some(serde_json::json!({
                    "path": path.display().to_string(),
                    "operation": operation,
                })),
            ),
        }
    }
}

/// Write every artifact under `dest` as one concurrent batch.
///
/// - Creates `dest` and any missing parents (idempotent).
/// - Creates parent directories for nested artifact names.
/// - Returns one [`WriteRecord`] per artifact, in input order.
/// - The first failure fails the batch and drops the writes still in
///   flight. Files already written stay on disk.
pub async fn write_artifacts(
    artifacts: &[Artifact],
    dest: &Path,
) -> Result<Vec<WriteRecord>, WriteError> {
    if let Some(bad) = artifacts.iter().find(|a| !is_safe_relative_path(&a.name)) {
        return Err(WriteError::UnsafeName {
            name: bad.name.clone(),
        });
    }

    tokio::fs::create_dir_all(dest)
        .await
        .map_err(|source| WriteError::Io {
            path: dest.to_path_buf(),
            operation: "create_dir",
            source,
        })?;

    let started = Instant::now();
    let records = try_join_all(artifacts.iter().map(|artifact| write_one(artifact, dest))).await?;

    info!(
        dest = %dest.display(),
        count = records.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "wrote artifact batch"
    );
    Ok(records)
}

async fn write_one(artifact: &Artifact, dest: &Path) -> Result<WriteRecord, WriteError> {
    let target = dest.join(&artifact.name);
    let started = Instant::now();

    if artifact.name.contains('/') {
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| WriteError::Io {
                    path: parent.to_path_buf(),
                    operation: "create_dir",
                    source,
                })?;
        }
    }

    tokio::fs::write(&target, &artifact.contents)
        .await
        .map_err(|source| WriteError::Io {
            path: target.clone(),
            operation: "write",
            source,
        })?;

    let elapsed_ms = started.elapsed().as_millis() as u64;
    debug!(artifact = %artifact.name, elapsed_ms, "wrote artifact");

    Ok(WriteRecord {
        artifact_name: artifact.name.clone(),
        elapsed_ms,
        size: artifact.contents.len() as u64,
        sha256: format!("sha256:{}", hex::encode(Sha256::digest(&artifact.contents))),
    })
}
