//! Loading source bytes from disk, `http(s)` URLs, or inline blobs

use std::io::Read;
use std::path::Path;
use std::time::Duration;

use sha2::{Digest, Sha256};
use tracing::debug;
use url::Url;

use super::mime::sniff_extension;
use super::GenerateError;
use crate::config::IconsetConfig;
use crate::source::SourceItem;

/// Upper bound on a downloaded source.
const MAX_REMOTE_BYTES: u64 = 16 * 1024 * 1024;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Source bytes plus the file name they are emitted under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedSource {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Load one source item.
///
/// Local references resolve against the config's base directory. Remote
/// references are fetched on the blocking pool.
pub async fn load_item(
    item: &SourceItem,
    config: &IconsetConfig,
) -> Result<LoadedSource, GenerateError> {
    match item {
        SourceItem::Blob(bytes) => Ok(LoadedSource {
            name: content_name(bytes),
            bytes: bytes.clone(),
        }),
        SourceItem::Ref(reference) if is_remote(reference) => {
            let bytes = fetch_remote(reference).await?;
            let name = remote_file_name(reference).unwrap_or_else(|| content_name(&bytes));
            Ok(LoadedSource { name, bytes })
        }
        SourceItem::Ref(reference) => {
            let path = config.resolve_local(reference);
            debug!(path = %path.display(), "reading source");
            let bytes = tokio::fs::read(&path)
                .await
                .map_err(|source| GenerateError::ReadSource {
                    path: path.clone(),
                    source,
                })?;
            let name = local_file_name(&path).unwrap_or_else(|| content_name(&bytes));
            Ok(LoadedSource { name, bytes })
        }
    }
}

pub fn is_remote(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// `icon-<first 8 hex of sha256>.<sniffed ext>`
pub fn content_name(bytes: &[u8]) -> String {
    let digest = hex::encode(Sha256::digest(bytes));
    format!("icon-{}.{}", &digest[..8], sniff_extension(bytes))
}

fn local_file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
}

fn remote_file_name(reference: &str) -> Option<String> {
    let url = Url::parse(reference).ok()?;
    let last = url.path_segments()?.filter(|s| !s.is_empty()).last()?;
    Some(last.to_string())
}

async fn fetch_remote(reference: &str) -> Result<Vec<u8>, GenerateError> {
    let url = reference.to_string();
    tokio::task::spawn_blocking(move || fetch_blocking(&url))
        .await
        .map_err(|e| GenerateError::Task(e.to_string()))?
}

fn fetch_blocking(url: &str) -> Result<Vec<u8>, GenerateError> {
    debug!(url, "fetching remote source");
    let fetch_error = |message: String| GenerateError::FetchSource {
        url: url.to_string(),
        message,
    };

    let response = ureq::get(url)
        .timeout(FETCH_TIMEOUT)
        .call()
        .map_err(|e| fetch_error(e.to_string()))?;

    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_REMOTE_BYTES)
        .read_to_end(&mut bytes)
        .map_err(|e| fetch_error(e.to_string()))?;

    Ok(bytes)
}
