use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::input::Input;
use crate::platform::Platform;

/// Whether a platform's icons are generated.
///
/// Accepts `true`/`false` or a list of icon names (enabled when non-empty).
/// Names are carried for generators that honor them; the built-in one only
/// checks the toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconToggle {
    Enabled(bool),
    Named(Vec<String>),
}

impl IconToggle {
    pub fn is_enabled(&self) -> bool {
        match self {
            IconToggle::Enabled(enabled) => *enabled,
            IconToggle::Named(names) => !names.is_empty(),
        }
    }
}

impl Default for IconToggle {
    fn default() -> Self {
        IconToggle::Enabled(true)
    }
}

/// Per-platform generation toggles (`[icons]`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconToggles {
    pub android: IconToggle,
    #[serde(alias = "apple_icon")]
    pub apple_icon: IconToggle,
    #[serde(alias = "apple_startup")]
    pub apple_startup: IconToggle,
    pub favicons: IconToggle,
    pub windows: IconToggle,
    pub yandex: IconToggle,
    /// Safari pinned-tab mask icon; not a source platform.
    pub safari: IconToggle,
}

impl Default for IconToggles {
    fn default() -> Self {
        Self {
            android: IconToggle::default(),
            apple_icon: IconToggle::default(),
            apple_startup: IconToggle::Enabled(false),
            favicons: IconToggle::default(),
            windows: IconToggle::default(),
            yandex: IconToggle::default(),
            safari: IconToggle::default(),
        }
    }
}

impl IconToggles {
    pub fn enabled(&self, platform: Platform) -> bool {
        let toggle = match platform {
            Platform::Favicons => &self.favicons,
            Platform::Android => &self.android,
            Platform::AppleIcon => &self.apple_icon,
            Platform::AppleStartup => &self.apple_startup,
            Platform::Windows => &self.windows,
            Platform::Yandex => &self.yandex,
        };
        toggle.is_enabled()
    }
}

/// Contents of `iconset.toml`.
///
/// Keys are camelCase; snake_case aliases are accepted for the multi-word ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconsetConfig {
    /// Subdirectory (or URL) under the output root where artifacts land.
    pub path: String,
    #[serde(alias = "app_name", skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(alias = "app_short_name", skip_serializing_if = "Option::is_none")]
    pub app_short_name: Option<String>,
    #[serde(alias = "app_description", skip_serializing_if = "Option::is_none")]
    pub app_description: Option<String>,
    #[serde(alias = "favicons_dark_mode")]
    pub favicons_dark_mode: bool,
    pub background: String,
    #[serde(alias = "theme_color")]
    pub theme_color: String,
    /// Output root; `path` is resolved below it.
    #[serde(alias = "out_dir")]
    pub out_dir: PathBuf,
    /// Compact (single-line) tag block for `inject`.
    #[serde(alias = "compress_html")]
    pub compress_html: bool,
    pub icons: IconToggles,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Input>,
    /// Directory relative source references resolve against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Default for IconsetConfig {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            app_name: None,
            app_short_name: None,
            app_description: None,
            favicons_dark_mode: true,
            background: "#fff".to_string(),
            theme_color: "#fff".to_string(),
            out_dir: PathBuf::from("dist"),
            compress_html: true,
            icons: IconToggles::default(),
            input: None,
            base_dir: PathBuf::new(),
        }
    }
}

impl IconsetConfig {
    /// Resolve a local source reference against the config's directory.
    pub fn resolve_local(&self, reference: &str) -> PathBuf {
        self.base_dir.join(Path::new(reference))
    }

    /// Output root, relative to the config's directory unless absolute.
    pub fn out_root(&self) -> PathBuf {
        self.base_dir.join(&self.out_dir)
    }
}
