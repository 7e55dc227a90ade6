use crate::error::ConfigError;
use crate::style_hash::{fnv1a64, splitmix64};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Stable key for a node path, as stored by the pin store.
pub fn pin_key(path: &str) -> u64 {
    splitmix64(fnv1a64(path.as_bytes()))
}

/// Read-only pin query. The pin store itself lives outside the engine.
pub trait PinLookup {
    fn is_pinned(&self, key: u64) -> bool;
}

impl PinLookup for HashSet<u64> {
    fn is_pinned(&self, key: u64) -> bool {
        self.contains(&key)
    }
}

impl<T: PinLookup + ?Sized> PinLookup for &T {
    fn is_pinned(&self, key: u64) -> bool {
        (**self).is_pinned(key)
    }
}

/// No building is pinned.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoPins;

impl PinLookup for NoPins {
    fn is_pinned(&self, _key: u64) -> bool {
        false
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PinSet {
    keys: HashSet<u64>,
}

impl PinSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_paths<'a>(paths: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            keys: paths.into_iter().map(pin_key).collect(),
        }
    }

    pub fn pin(&mut self, path: &str) -> bool {
        self.keys.insert(pin_key(path))
    }

    pub fn unpin(&mut self, path: &str) -> bool {
        self.keys.remove(&pin_key(path))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Load a JSON array of pinned paths.
    pub fn load_paths(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let paths: Vec<String> =
            serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_paths(paths.iter().map(String::as_str)))
    }
}

impl PinLookup for PinSet {
    fn is_pinned(&self, key: u64) -> bool {
        self.keys.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_set_tracks_paths_by_stable_key() {
        let mut pins = PinSet::new();
        assert!(pins.pin("/srv/www"));
        assert!(!pins.pin("/srv/www"));
        assert!(pins.is_pinned(pin_key("/srv/www")));
        assert!(!pins.is_pinned(pin_key("/srv/ww")));
        assert!(pins.unpin("/srv/www"));
        assert!(pins.is_empty());
    }

    #[test]
    fn pin_keys_match_frozen_values() {
        assert_eq!(pin_key(""), 0xc381_7c01_6ba4_ff30);
        assert_eq!(pin_key("a"), 0x5f29_c2aa_dd9b_8527);
        assert_eq!(pin_key("/src"), 0xd513_71e3_6c80_18db);
        assert_eq!(pin_key("/home/user/project"), 0x3e72_c1bc_0a57_20e2);
    }

    #[test]
    fn hash_sets_and_references_act_as_lookups() {
        let target = pin_key("/a");
        let set: HashSet<u64> = [target].into_iter().collect();
        assert!(set.is_pinned(target));
        assert!((&set).is_pinned(target));
        assert!(!NoPins.is_pinned(target));
    }
}
