use tracing::debug;

use super::{Input, InputSource, PartialInputSource};
use crate::platform::{Platform, PlatformMap};
use crate::source::{Source, SourceItem};

/// Source used for every platform when nothing is configured.
pub const DEFAULT_SOURCE: &str = "public/favicon.svg";

/// Resolve the configured input into a total per-platform mapping.
///
/// - absent input maps every platform to [`DEFAULT_SOURCE`];
/// - a uniform source is broadcast to every platform;
/// - a partial mapping keeps defined platforms verbatim and fills the rest
///   with the union of all defined sources (collapsed when it has exactly
///   one element).
///
/// Never fails. A partial mapping with nothing defined leaves every platform
/// with an empty `Many`.
pub fn resolve_input(input: Option<&Input>) -> InputSource {
    match input {
        None => default_input(),
        Some(Input::Uniform(source)) => PlatformMap::splat(source.clone()),
        Some(Input::Partial(partial)) => resolve_partial(partial),
    }
}

fn default_input() -> InputSource {
    PlatformMap::splat(Source::from(DEFAULT_SOURCE))
}

fn resolve_partial(partial: &PartialInputSource) -> InputSource {
    let union = union_source(partial);
    let fallback = Source::from_items(union);
    PlatformMap::from_fn(|platform| match partial.get(platform) {
        Some(source) => source.clone(),
        None => {
            debug!(%platform, "platform falls back to union source");
            fallback.clone()
        }
    })
}

/// Every defined source flattened one level and de-duplicated, in
/// first-seen order over the canonical platform order.
pub fn union_source(partial: &PartialInputSource) -> Vec<SourceItem> {
    let mut union: Vec<SourceItem> = Vec::new();
    for source in Platform::ALL.iter().filter_map(|p| partial.get(*p)) {
        for item in source.flatten() {
            if !union.contains(&item) {
                union.push(item);
            }
        }
    }
    union
}

/// Label describing every distinct source of a resolved input.
pub fn source_label(input: &InputSource) -> String {
    let mut distinct: Vec<SourceItem> = Vec::new();
    for item in input.values().flat_map(Source::flatten) {
        if !distinct.contains(&item) {
            distinct.push(item);
        }
    }
    Source::from_items(distinct).label()
}
