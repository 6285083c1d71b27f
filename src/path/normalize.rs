//! Output path normalization
//!
//! This is permissive string surgery for a trusted build-time context, not a
//! containment guarantee: the result never starts with `/` and never holds a
//! `..` segment, but symlinks under the output root are not inspected.

use url::Url;

/// Normalize a user-supplied output subdirectory.
///
/// - whitespace runs become a single `/` (multi-word paths are nested dirs);
/// - leading `/`, empty segments, and `..` segments are dropped;
/// - an empty result means "the output root" and is returned as `""`;
/// - anything else ends with exactly one `/`.
///
/// Never fails, and `normalize_path(Some(&normalize_path(p)))` equals
/// `normalize_path(p)`.
pub fn normalize_path(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join("/");
    let segments: Vec<&str> = collapsed
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != "..")
        .collect();

    if segments.is_empty() {
        return String::new();
    }

    let mut normalized = segments.join("/");
    normalized.push('/');
    normalized
}

/// Like [`normalize_path`], but a full URL contributes only its path.
pub fn normalize_location(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    match Url::parse(raw) {
        Ok(url) if !url.cannot_be_a_base() => normalize_path(Some(url.path())),
        _ => normalize_path(Some(raw)),
    }
}

/// Check that an artifact name stays below the output directory
/// (relative, no `..`, `.` or empty segments).
pub fn is_safe_relative_path(path: &str) -> bool {
    if path.is_empty() || path.starts_with('/') || path.starts_with('\\') {
        return false;
    }

    // Drive prefixes such as `C:` are absolute on Windows.
    if path.as_bytes().get(1) == Some(&b':') {
        return false;
    }

    path.split(['/', '\\'])
        .all(|component| !matches!(component, "" | "." | ".."))
}
