//! Editor settings document handling

pub mod block;
pub mod jsonc;

use serde_json::{Map, Value};

pub use block::{has_block, merge_block, remove_block};
pub use jsonc::parse_settings;

/// Top-level keys that differ between two settings objects
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SettingsDiff {
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub changed: Vec<String>,
}

impl SettingsDiff {
    /// Compare `expected` (what setup wrote) with `actual` (what is on disk now)
    pub fn between(expected: &Map<String, Value>, actual: &Map<String, Value>) -> Self {
        let mut diff = Self::default();

        for (key, value) in actual {
            match expected.get(key) {
                None => diff.added.push(key.clone()),
                Some(old) if old != value => diff.changed.push(key.clone()),
                Some(_) => {}
            }
        }
        diff.removed = expected
            .keys()
            .filter(|key| !actual.contains_key(*key))
            .cloned()
            .collect();

        diff.added.sort();
        diff.removed.sort();
        diff.changed.sort();
        diff
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }

    /// One line per kind of change, e.g. `added: a, b`
    pub fn summary(&self) -> Vec<String> {
        [
            ("added", &self.added),
            ("removed", &self.removed),
            ("changed", &self.changed),
        ]
        .into_iter()
        .filter(|(_, keys)| !keys.is_empty())
        .map(|(label, keys)| format!("{}: {}", label, keys.join(", ")))
        .collect()
    }
}
