//! Input resolution: partial per-platform sources to a total mapping

pub mod resolve;

use serde::{Deserialize, Serialize};

use crate::platform::{Platform, PlatformMap};
use crate::source::Source;

pub use resolve::{resolve_input, source_label, union_source, DEFAULT_SOURCE};

/// Fully resolved input: every platform has a source.
pub type InputSource = PlatformMap<Source>;

/// User-declared sources, possibly missing some platforms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialInputSource {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicons: Option<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<Source>,
    #[serde(default, alias = "apple_icon", skip_serializing_if = "Option::is_none")]
    pub apple_icon: Option<Source>,
    #[serde(default, alias = "apple_startup", skip_serializing_if = "Option::is_none")]
    pub apple_startup: Option<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows: Option<Source>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yandex: Option<Source>,
}

impl PartialInputSource {
    pub fn get(&self, platform: Platform) -> Option<&Source> {
        match platform {
            Platform::Favicons => self.favicons.as_ref(),
            Platform::Android => self.android.as_ref(),
            Platform::AppleIcon => self.apple_icon.as_ref(),
            Platform::AppleStartup => self.apple_startup.as_ref(),
            Platform::Windows => self.windows.as_ref(),
            Platform::Yandex => self.yandex.as_ref(),
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, platform: Platform, source: impl Into<Source>) -> Self {
        let slot = match platform {
            Platform::Favicons => &mut self.favicons,
            Platform::Android => &mut self.android,
            Platform::AppleIcon => &mut self.apple_icon,
            Platform::AppleStartup => &mut self.apple_startup,
            Platform::Windows => &mut self.windows,
            Platform::Yandex => &mut self.yandex,
        };
        *slot = Some(source.into());
        self
    }
}

/// What the user configured as input.
///
/// Deserialization tries the [`Source`] shape first; any other table is read
/// as a partial per-platform mapping with unknown keys ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Input {
    /// One source broadcast to every platform.
    Uniform(Source),
    /// Per-platform sources; missing platforms fall back to the union.
    Partial(PartialInputSource),
}

impl From<Source> for Input {
    fn from(source: Source) -> Self {
        Input::Uniform(source)
    }
}

impl From<PartialInputSource> for Input {
    fn from(partial: PartialInputSource) -> Self {
        Input::Partial(partial)
    }
}
