//! Selector map: structural path → interactive index.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One capture's mapping from structural path to interactive index.
///
/// Threaded between serialization calls by the caller: handed in read-only,
/// returned rebuilt. Never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectorMap {
    entries: HashMap<String, u32>,
}

impl SelectorMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&u32> {
        self.entries.get(path)
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn insert(&mut self, path: String, index: u32) {
        self.entries.insert(path, index);
    }

    pub fn values(&self) -> impl Iterator<Item = &u32> {
        self.entries.values()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &u32)> {
        self.entries.iter()
    }

    /// Paths present here but absent from `previous`: the elements that
    /// appeared since the last capture.
    pub fn paths_new_since<'a>(&'a self, previous: &'a SelectorMap) -> Vec<&'a str> {
        let mut paths: Vec<&str> = self
            .entries
            .keys()
            .filter(|path| !previous.contains_path(path))
            .map(|s| s.as_str())
            .collect();
        paths.sort_unstable();
        paths
    }
}

impl FromIterator<(String, u32)> for SelectorMap {
    fn from_iter<T: IntoIterator<Item = (String, u32)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
