use std::fmt;

use serde::{Deserialize, Serialize};

/// Platform a generated file belongs to, for presentation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformLabel {
    #[serde(rename = "Android/Chrome")]
    AndroidChrome,
    #[serde(rename = "Windows Metro")]
    WindowsMetro,
    Yandex,
    Unknown,
}

impl PlatformLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformLabel::AndroidChrome => "Android/Chrome",
            PlatformLabel::WindowsMetro => "Windows Metro",
            PlatformLabel::Yandex => "Yandex",
            PlatformLabel::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PlatformLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a file by well-known manifest names it contains.
///
/// Matching is by substring, so prefixed or nested names still classify.
pub fn classify_platform(file_name: &str) -> PlatformLabel {
    if file_name.contains("manifest.webmanifest") {
        PlatformLabel::AndroidChrome
    } else if file_name.contains("browserconfig.xml") {
        PlatformLabel::WindowsMetro
    } else if file_name.contains("yandex-browser-manifest.json") {
        PlatformLabel::Yandex
    } else {
        PlatformLabel::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_manifests() {
        assert_eq!(classify_platform("manifest.webmanifest"), PlatformLabel::AndroidChrome);
        assert_eq!(classify_platform("browserconfig.xml"), PlatformLabel::WindowsMetro);
        assert_eq!(
            classify_platform("yandex-browser-manifest.json"),
            PlatformLabel::Yandex
        );
    }

    #[test]
    fn classifies_by_substring() {
        assert_eq!(
            classify_platform("/icons/manifest.webmanifest (+2ms)"),
            PlatformLabel::AndroidChrome
        );
        assert_eq!(classify_platform("sub/browserconfig.xml"), PlatformLabel::WindowsMetro);
    }

    #[test]
    fn unrecognized_is_unknown() {
        assert_eq!(classify_platform("favicon.ico"), PlatformLabel::Unknown);
        assert_eq!(classify_platform("manifest.json"), PlatformLabel::Unknown);
        assert_eq!(classify_platform(""), PlatformLabel::Unknown);
    }

    #[test]
    fn serializes_display_names() {
        assert_eq!(
            serde_json::to_string(&PlatformLabel::WindowsMetro).unwrap(),
            "\"Windows Metro\""
        );
        assert_eq!(PlatformLabel::AndroidChrome.to_string(), "Android/Chrome");
    }
}
