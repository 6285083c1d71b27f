//! Closed set of target platforms and a total mapping keyed by them

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Target consumer ecosystem for generated icons.
///
/// Declaration order is the canonical order used for iteration, union
/// discovery, and serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    Favicons,
    Android,
    AppleIcon,
    AppleStartup,
    Windows,
    Yandex,
}

impl Platform {
    /// Number of platforms in the closed set.
    pub const COUNT: usize = 6;

    /// Every platform in canonical order.
    pub const ALL: [Platform; Platform::COUNT] = [
        Platform::Favicons,
        Platform::Android,
        Platform::AppleIcon,
        Platform::AppleStartup,
        Platform::Windows,
        Platform::Yandex,
    ];

    /// Wire name used in configuration files and JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Favicons => "favicons",
            Platform::Android => "android",
            Platform::AppleIcon => "appleIcon",
            Platform::AppleStartup => "appleStartup",
            Platform::Windows => "windows",
            Platform::Yandex => "yandex",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A mapping from every [`Platform`] to a value.
///
/// Backed by a fixed array, so a key can never be missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformMap<T>([T; Platform::COUNT]);

impl<T> PlatformMap<T> {
    /// Build a map by computing the value for each platform.
    pub fn from_fn(f: impl FnMut(Platform) -> T) -> Self {
        Self(Platform::ALL.map(f))
    }

    /// Iterate `(platform, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &T)> {
        Platform::ALL.into_iter().zip(self.0.iter())
    }

    /// Iterate values in canonical order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    /// Transform every value, keeping totality.
    pub fn map<U>(&self, mut f: impl FnMut(Platform, &T) -> U) -> PlatformMap<U> {
        PlatformMap::from_fn(|p| f(p, &self[p]))
    }
}

impl<T: Clone> PlatformMap<T> {
    /// Map every platform to a clone of `value`.
    pub fn splat(value: T) -> Self {
        Self::from_fn(|_| value.clone())
    }
}

impl<T> Index<Platform> for PlatformMap<T> {
    type Output = T;

    fn index(&self, platform: Platform) -> &T {
        &self.0[platform.index()]
    }
}

impl<T> IndexMut<Platform> for PlatformMap<T> {
    fn index_mut(&mut self, platform: Platform) -> &mut T {
        &mut self.0[platform.index()]
    }
}

impl<T: Serialize> Serialize for PlatformMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Platform::COUNT))?;
        for (platform, value) in self.iter() {
            map.serialize_entry(platform.as_str(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declaration_order() {
        for (i, platform) in Platform::ALL.iter().enumerate() {
            assert_eq!(platform.index(), i);
        }
    }

    #[test]
    fn wire_names_are_camel_case() {
        let names: Vec<&str> = Platform::ALL.iter().map(|p| p.as_str()).collect();
        assert_eq!(
            names,
            vec!["favicons", "android", "appleIcon", "appleStartup", "windows", "yandex"]
        );
    }

    #[test]
    fn from_fn_and_index_agree() {
        let map = PlatformMap::from_fn(|p| p.as_str().len());
        assert_eq!(map[Platform::AppleStartup], "appleStartup".len());
        assert_eq!(map.values().count(), Platform::COUNT);
    }

    #[test]
    fn index_mut_updates_single_entry() {
        let mut map = PlatformMap::splat(0u8);
        map[Platform::Windows] = 7;
        assert_eq!(map[Platform::Windows], 7);
        assert_eq!(map[Platform::Yandex], 0);
    }

    #[test]
    fn serializes_as_ordered_object() {
        let map = PlatformMap::from_fn(|p| p == Platform::Android);
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            r#"{"favicons":false,"android":true,"appleIcon":false,"appleStartup":false,"windows":false,"yandex":false}"#
        );
    }
}
