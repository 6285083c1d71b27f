use serde::{Deserialize, Serialize};

use super::RefusalCode;

/// Wire version of the refusal output.
pub const ENVELOPE_VERSION: &str = "iconset.v0";

/// Why a build, resolve or inject run was refused.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefusalDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<serde_json::Value>,
    pub next_command: Option<String>,
}

/// What `iconset` prints on stdout instead of its normal output when it exits 2.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RefusalEnvelope {
    pub version: String,
    pub outcome: String,
    pub refusal: RefusalDetail,
}

impl RefusalEnvelope {
    /// `message` replaces the code's default text; `detail` names the offending
    /// path, source or artifact.
    pub fn new(
        code: RefusalCode,
        message: Option<String>,
        detail: Option<serde_json::Value>,
    ) -> Self {
        Self {
            version: ENVELOPE_VERSION.to_string(),
            outcome: "REFUSAL".to_string(),
            refusal: RefusalDetail {
                code: code.as_str().to_string(),
                message: message.unwrap_or_else(|| code.default_message().to_string()),
                detail,
                next_command: code.next_command(),
            },
        }
    }

    /// Pretty-printed form written to stdout.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("refusal envelope serialization cannot fail")
    }
}
