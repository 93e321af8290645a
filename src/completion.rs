use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

/// Item id to done flag for one list. Missing ids count as not done, so a
/// `false` entry and an absent one compare equal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionMap(BTreeMap<String, bool>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.completed * 100 / self.total) as u32
    }
}

impl CompletionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_completed(&self, item_id: &str) -> bool {
        self.0.get(item_id).copied().unwrap_or(false)
    }

    /// Flips one item. Ids outside `item_ids` leave the map untouched.
    pub fn toggle(mut self, item_ids: &[&str], item_id: &str) -> Self {
        if !item_ids.iter().any(|id| *id == item_id) {
            warn!("ignoring toggle of \"{item_id}\": not part of this list");
            return self;
        }
        let done = self.is_completed(item_id);
        self.0.insert(item_id.to_string(), !done);
        self
    }

    pub fn mark_all(self, item_ids: &[&str]) -> Self {
        self.set_all(item_ids, true)
    }

    pub fn reset_all(self, item_ids: &[&str]) -> Self {
        self.set_all(item_ids, false)
    }

    pub fn progress(&self, item_ids: &[&str]) -> Progress {
        let completed = item_ids
            .iter()
            .filter(|id| self.is_completed(id))
            .count();
        Progress {
            completed,
            total: item_ids.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn set_all(mut self, item_ids: &[&str], done: bool) -> Self {
        for id in item_ids {
            self.0.insert((*id).to_string(), done);
        }
        self
    }
}

impl PartialEq for CompletionMap {
    fn eq(&self, other: &Self) -> bool {
        self.0
            .keys()
            .chain(other.0.keys())
            .all(|id| self.is_completed(id) == other.is_completed(id))
    }
}

impl Eq for CompletionMap {}

impl<K: Into<String>> FromIterator<(K, bool)> for CompletionMap {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
