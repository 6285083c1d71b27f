//! Built-in generator: passes source images through unchanged and writes the
//! per-platform manifests and HTML tags that reference them.

use async_trait::async_trait;
use futures::future::try_join_all;
use serde_json::json;
use tracing::{debug, info};

use super::fetch::{load_item, LoadedSource};
use super::mime::mime_for;
use super::{Artifact, GenerateError, Generator, GeneratorResponse};
use crate::config::IconsetConfig;
use crate::input::InputSource;
use crate::path::normalize_location;
use crate::platform::{Platform, PlatformMap};
use crate::source::SourceItem;

pub const WEB_MANIFEST: &str = "manifest.webmanifest";
pub const BROWSER_CONFIG: &str = "browserconfig.xml";
pub const YANDEX_MANIFEST: &str = "yandex-browser-manifest.json";

/// Generator that performs no image processing.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManifestGenerator;

#[async_trait]
impl Generator for ManifestGenerator {
    async fn generate(
        &self,
        input: &InputSource,
        config: &IconsetConfig,
    ) -> Result<GeneratorResponse, GenerateError> {
        let items = distinct_enabled_items(input, config);
        debug!(count = items.len(), "loading sources");
        let loaded = try_join_all(items.iter().map(|item| load_item(item, config))).await?;

        let (images, names) = assign_names(&items, loaded);
        let per_platform = input.map(|platform, source| {
            if !config.icons.enabled(platform) {
                return Vec::new();
            }
            source
                .flatten()
                .iter()
                .filter_map(|item| items.iter().position(|i| i == item))
                .map(|idx| names[idx].clone())
                .collect::<Vec<String>>()
        });

        let prefix = format!("/{}", normalize_location(Some(&config.path)));
        let files = platform_files(&per_platform, config, &prefix)?;
        let html = html_tags(&per_platform, config, &prefix);

        info!(
            images = images.len(),
            files = files.len(),
            tags = html.len(),
            "generated artifacts"
        );
        Ok(GeneratorResponse {
            images,
            files,
            html,
        })
    }
}

/// Distinct source items of every enabled platform, first-seen order.
fn distinct_enabled_items(input: &InputSource, config: &IconsetConfig) -> Vec<SourceItem> {
    let mut items: Vec<SourceItem> = Vec::new();
    for (platform, source) in input.iter() {
        if !config.icons.enabled(platform) {
            continue;
        }
        for item in source.flatten() {
            if !items.contains(&item) {
                items.push(item);
            }
        }
    }
    items
}

/// Turn loaded sources into image artifacts with unique names.
///
/// Returns the artifacts and, index-aligned with the input items, the name
/// each item was emitted under.
fn assign_names(items: &[SourceItem], loaded: Vec<LoadedSource>) -> (Vec<Artifact>, Vec<String>) {
    let mut images: Vec<Artifact> = Vec::with_capacity(items.len());
    let mut names = Vec::with_capacity(items.len());

    for source in loaded {
        let existing = images.iter().find(|a| a.name == source.name);
        let name = match existing {
            None => source.name,
            // Same bytes under the same name: emit once.
            Some(a) if a.contents == source.bytes => {
                names.push(source.name);
                continue;
            }
            Some(_) => unique_name(&images, &source.name),
        };
        names.push(name.clone());
        images.push(Artifact::new(name, source.bytes));
    }

    (images, names)
}

/// `{n}-{name}` with the smallest `n >= images.len()` no image already uses.
fn unique_name(images: &[Artifact], name: &str) -> String {
    (images.len()..)
        .map(|n| format!("{n}-{name}"))
        .find(|candidate| images.iter().all(|a| a.name != *candidate))
        .unwrap_or_else(|| name.to_string())
}

fn platform_files(
    per_platform: &PlatformMap<Vec<String>>,
    config: &IconsetConfig,
    prefix: &str,
) -> Result<Vec<Artifact>, GenerateError> {
    let mut files = Vec::new();

    let android = &per_platform[Platform::Android];
    if !android.is_empty() {
        let icons: Vec<_> = android
            .iter()
            .map(|name| json!({ "src": format!("{prefix}{name}"), "type": mime_for(name) }))
            .collect();
        let manifest = json!({
            "name": config.app_name,
            "short_name": config.app_short_name.as_ref().or(config.app_name.as_ref()),
            "description": config.app_description,
            "start_url": "/",
            "display": "standalone",
            "background_color": config.background,
            "theme_color": config.theme_color,
            "icons": icons,
        });
        files.push(json_artifact(WEB_MANIFEST, &manifest)?);
    }

    if let Some(tile) = per_platform[Platform::Windows].first() {
        let xml = format!(
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <browserconfig>\n  <msapplication>\n    <tile>\n      \
             <square150x150logo src=\"{}\"/>\n      <TileColor>{}</TileColor>\n    \
             </tile>\n  </msapplication>\n</browserconfig>\n",
            escape_attr(&format!("{prefix}{tile}")),
            escape_attr(&config.background),
        );
        files.push(Artifact::new(BROWSER_CONFIG, xml));
    }

    if let Some(logo) = per_platform[Platform::Yandex].first() {
        let manifest = json!({
            "version": "1.0",
            "api_version": 1,
            "layout": {
                "logo": format!("{prefix}{logo}"),
                "color": config.background,
                "show_title": true,
            },
        });
        files.push(json_artifact(YANDEX_MANIFEST, &manifest)?);
    }

    Ok(files)
}

fn json_artifact(name: &str, value: &serde_json::Value) -> Result<Artifact, GenerateError> {
    let text = serde_json::to_string_pretty(value).map_err(|source| GenerateError::Encode {
        name: name.to_string(),
        source,
    })?;
    Ok(Artifact::new(name, text))
}

fn html_tags(
    per_platform: &PlatformMap<Vec<String>>,
    config: &IconsetConfig,
    prefix: &str,
) -> Vec<String> {
    let href = |name: &str| escape_attr(&format!("{prefix}{name}"));
    let mut tags = Vec::new();

    let favicons = &per_platform[Platform::Favicons];
    for name in favicons {
        tags.push(format!(
            "<link rel=\"icon\" type=\"{}\" href=\"{}\">",
            mime_for(name),
            href(name)
        ));
    }
    if config.icons.safari.is_enabled() {
        if let Some(svg) = favicons.iter().find(|n| mime_for(n) == "image/svg+xml") {
            tags.push(format!(
                "<link rel=\"mask-icon\" href=\"{}\" color=\"{}\">",
                href(svg),
                escape_attr(&config.theme_color)
            ));
        }
    }
    if !favicons.is_empty() && config.favicons_dark_mode {
        tags.push("<meta name=\"color-scheme\" content=\"light dark\">".to_string());
    }

    if !per_platform[Platform::Android].is_empty() {
        tags.push(format!("<link rel=\"manifest\" href=\"{}\">", href(WEB_MANIFEST)));
        tags.push("<meta name=\"mobile-web-app-capable\" content=\"yes\">".to_string());
        tags.push(format!(
            "<meta name=\"theme-color\" content=\"{}\">",
            escape_attr(&config.theme_color)
        ));
        if let Some(name) = &config.app_name {
            tags.push(format!(
                "<meta name=\"application-name\" content=\"{}\">",
                escape_attr(name)
            ));
        }
    }

    let apple = &per_platform[Platform::AppleIcon];
    for name in apple {
        tags.push(format!("<link rel=\"apple-touch-icon\" href=\"{}\">", href(name)));
    }
    if !apple.is_empty() {
        tags.push("<meta name=\"apple-mobile-web-app-capable\" content=\"yes\">".to_string());
        if let Some(title) = config.app_short_name.as_ref().or(config.app_name.as_ref()) {
            tags.push(format!(
                "<meta name=\"apple-mobile-web-app-title\" content=\"{}\">",
                escape_attr(title)
            ));
        }
    }

    for name in &per_platform[Platform::AppleStartup] {
        tags.push(format!(
            "<link rel=\"apple-touch-startup-image\" href=\"{}\">",
            href(name)
        ));
    }

    if let Some(tile) = per_platform[Platform::Windows].first() {
        tags.push(format!(
            "<meta name=\"msapplication-TileColor\" content=\"{}\">",
            escape_attr(&config.background)
        ));
        tags.push(format!(
            "<meta name=\"msapplication-TileImage\" content=\"{}\">",
            href(tile)
        ));
        tags.push(format!(
            "<meta name=\"msapplication-config\" content=\"{}\">",
            href(BROWSER_CONFIG)
        ));
    }

    if !per_platform[Platform::Yandex].is_empty() {
        tags.push(format!(
            "<link rel=\"yandex-tableau-widget\" href=\"{}\">",
            href(YANDEX_MANIFEST)
        ));
    }

    tags
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
