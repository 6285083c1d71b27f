//! Icon source references: a path/URL, an inline blob, or a list of either

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};

/// One candidate icon input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawItem", into = "RawItem")]
pub enum SourceItem {
    /// A file path or `http(s)` URL.
    Ref(String),
    /// Inline image bytes.
    Blob(Vec<u8>),
}

/// One or more candidate icon inputs for a platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSource", into = "RawSource")]
pub enum Source {
    Single(String),
    Blob(Vec<u8>),
    Many(Vec<SourceItem>),
}

impl Source {
    /// Flatten one level: a `Many` yields its elements, anything else yields itself.
    pub fn flatten(&self) -> Vec<SourceItem> {
        match self {
            Source::Single(reference) => vec![SourceItem::Ref(reference.clone())],
            Source::Blob(bytes) => vec![SourceItem::Blob(bytes.clone())],
            Source::Many(items) => items.clone(),
        }
    }

    /// Build a source from items, collapsing a single item to its scalar form.
    pub fn from_items(mut items: Vec<SourceItem>) -> Self {
        if items.len() == 1 {
            match items.remove(0) {
                SourceItem::Ref(reference) => Source::Single(reference),
                SourceItem::Blob(bytes) => Source::Blob(bytes),
            }
        } else {
            Source::Many(items)
        }
    }

    /// Short human-readable description used in reports.
    pub fn label(&self) -> String {
        match self {
            Source::Single(reference) => display_ref(reference).to_string(),
            Source::Blob(bytes) => blob_label(bytes),
            Source::Many(items) => items
                .iter()
                .map(SourceItem::label)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl SourceItem {
    pub fn label(&self) -> String {
        match self {
            SourceItem::Ref(reference) => display_ref(reference).to_string(),
            SourceItem::Blob(bytes) => blob_label(bytes),
        }
    }
}

impl From<&str> for Source {
    fn from(reference: &str) -> Self {
        Source::Single(reference.to_string())
    }
}

impl From<String> for Source {
    fn from(reference: String) -> Self {
        Source::Single(reference)
    }
}

impl From<&str> for SourceItem {
    fn from(reference: &str) -> Self {
        SourceItem::Ref(reference.to_string())
    }
}

fn display_ref(reference: &str) -> &str {
    reference.strip_prefix("./").unwrap_or(reference)
}

fn blob_label(bytes: &[u8]) -> String {
    format!("<{} bytes>", bytes.len())
}

/// Source decoding errors.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("invalid base64 blob: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

// Wire forms. A blob is written as `{ base64 = "..." }` since neither TOML
// nor JSON carries raw bytes.

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawBlob {
    base64: String,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawItem {
    Ref(String),
    Blob(RawBlob),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawSource {
    Single(String),
    Many(Vec<RawItem>),
    Blob(RawBlob),
}

impl RawBlob {
    fn decode(&self) -> Result<Vec<u8>, SourceError> {
        Ok(STANDARD.decode(self.base64.as_bytes())?)
    }

    fn encode(bytes: &[u8]) -> Self {
        Self {
            base64: STANDARD.encode(bytes),
        }
    }
}

impl TryFrom<RawItem> for SourceItem {
    type Error = SourceError;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        Ok(match raw {
            RawItem::Ref(reference) => SourceItem::Ref(reference),
            RawItem::Blob(blob) => SourceItem::Blob(blob.decode()?),
        })
    }
}

impl From<SourceItem> for RawItem {
    fn from(item: SourceItem) -> Self {
        match item {
            SourceItem::Ref(reference) => RawItem::Ref(reference),
            SourceItem::Blob(bytes) => RawItem::Blob(RawBlob::encode(&bytes)),
        }
    }
}

impl TryFrom<RawSource> for Source {
    type Error = SourceError;

    fn try_from(raw: RawSource) -> Result<Self, Self::Error> {
        Ok(match raw {
            RawSource::Single(reference) => Source::Single(reference),
            RawSource::Blob(blob) => Source::Blob(blob.decode()?),
            RawSource::Many(items) => Source::Many(
                items
                    .into_iter()
                    .map(SourceItem::try_from)
                    .collect::<Result<_, _>>()?,
            ),
        })
    }
}

impl From<Source> for RawSource {
    fn from(source: Source) -> Self {
        match source {
            Source::Single(reference) => RawSource::Single(reference),
            Source::Blob(bytes) => RawSource::Blob(RawBlob::encode(&bytes)),
            Source::Many(items) => RawSource::Many(items.into_iter().map(RawItem::from).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flatten_expands_many_one_level() {
        let source = Source::Many(vec!["a.svg".into(), SourceItem::Blob(vec![1, 2])]);
        assert_eq!(
            source.flatten(),
            vec![SourceItem::Ref("a.svg".into()), SourceItem::Blob(vec![1, 2])]
        );
        assert_eq!(Source::from("b.png").flatten(), vec![SourceItem::from("b.png")]);
    }

    #[test]
    fn from_items_collapses_single() {
        assert_eq!(Source::from_items(vec!["a.svg".into()]), Source::from("a.svg"));
        assert_eq!(
            Source::from_items(vec![SourceItem::Blob(vec![9])]),
            Source::Blob(vec![9])
        );
        let many = Source::from_items(vec!["a.svg".into(), "b.svg".into()]);
        assert!(matches!(many, Source::Many(ref items) if items.len() == 2));
    }

    #[test]
    fn label_strips_dot_slash() {
        assert_eq!(Source::from("./public/logo.svg").label(), "public/logo.svg");
        assert_eq!(Source::Blob(vec![0; 4]).label(), "<4 bytes>");
        assert_eq!(
            Source::Many(vec!["./a.png".into(), "b.png".into()]).label(),
            "a.png, b.png"
        );
    }

    #[test]
    fn deserializes_string_list_and_blob() {
        let single: Source = serde_json::from_str(r#""logo.svg""#).unwrap();
        assert_eq!(single, Source::from("logo.svg"));

        let many: Source = serde_json::from_str(r#"["a.svg", {"base64": "AQI="}]"#).unwrap();
        assert_eq!(
            many,
            Source::Many(vec!["a.svg".into(), SourceItem::Blob(vec![1, 2])])
        );

        let blob: Source = serde_json::from_str(r#"{"base64": "AQID"}"#).unwrap();
        assert_eq!(blob, Source::Blob(vec![1, 2, 3]));
    }

    #[test]
    fn rejects_bad_base64_and_foreign_tables() {
        assert!(serde_json::from_str::<Source>(r#"{"base64": "!!"}"#).is_err());
        assert!(serde_json::from_str::<Source>(r#"{"android": "a.svg"}"#).is_err());
    }

    #[test]
    fn serializes_blob_as_base64_table() {
        let json = serde_json::to_value(Source::Blob(vec![1, 2, 3])).unwrap();
        assert_eq!(json, serde_json::json!({"base64": "AQID"}));
    }
}
