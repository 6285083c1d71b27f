//! Refusal codes

use std::fmt;

use serde::{Deserialize, Serialize};

/// Refusal codes for iconset operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RefusalCode {
    /// Config file cannot be read or parsed
    #[serde(rename = "E_CONFIG")]
    Config,

    /// Source loading or artifact generation failed
    #[serde(rename = "E_GENERATE")]
    Generate,

    /// Cannot create the output directory, write an artifact, or read a document
    #[serde(rename = "E_IO")]
    Io,

    /// Artifact name would escape the output directory
    #[serde(rename = "E_UNSAFE_PATH")]
    UnsafePath,
}

impl RefusalCode {
    /// Stable wire string for the code
    pub fn as_str(&self) -> &'static str {
        match self {
            RefusalCode::Config => "E_CONFIG",
            RefusalCode::Generate => "E_GENERATE",
            RefusalCode::Io => "E_IO",
            RefusalCode::UnsafePath => "E_UNSAFE_PATH",
        }
    }

    /// Human-readable message used when no override is given
    pub fn default_message(&self) -> &'static str {
        match self {
            RefusalCode::Config => "Invalid or unreadable configuration",
            RefusalCode::Generate => "Artifact generation failed",
            RefusalCode::Io => "IO operation failed",
            RefusalCode::UnsafePath => "Artifact name escapes the output directory",
        }
    }

    /// Suggested next action
    pub fn next_command(&self) -> Option<String> {
        match self {
            RefusalCode::Config => Some("Check iconset.toml syntax or pass --config".to_string()),
            RefusalCode::Generate => Some("Check that every source path or URL is reachable".to_string()),
            RefusalCode::Io => Some("Check paths/permissions".to_string()),
            RefusalCode::UnsafePath => None,
        }
    }
}

impl fmt::Display for RefusalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refusal_code_serialization() {
        assert_eq!(
            serde_json::to_string(&RefusalCode::Config).unwrap(),
            "\"E_CONFIG\""
        );
        assert_eq!(
            serde_json::to_string(&RefusalCode::UnsafePath).unwrap(),
            "\"E_UNSAFE_PATH\""
        );
    }

    #[test]
    fn test_wire_strings_match_serde() {
        for code in [
            RefusalCode::Config,
            RefusalCode::Generate,
            RefusalCode::Io,
            RefusalCode::UnsafePath,
        ] {
            let json = serde_json::to_string(&code).unwrap();
            assert_eq!(json, format!("\"{}\"", code.as_str()));
            assert!(!code.default_message().is_empty());
        }
    }

    #[test]
    fn test_messages_and_next_commands() {
        assert_eq!(RefusalCode::Io.default_message(), "IO operation failed");
        assert_eq!(
            RefusalCode::Io.next_command(),
            Some("Check paths/permissions".to_string())
        );
        assert!(RefusalCode::UnsafePath.next_command().is_none());
    }
}
