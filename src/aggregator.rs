use std::collections::HashMap;
use serde::{Deserialize, Serialize};

/// Accumulated count per canonical identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateTable {
    counts: HashMap<String, u64>,
}

impl AggregateTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` to `identity`, initializing it if absent
    pub fn update(&mut self, identity: impl Into<String>, count: u64) {
        let entry = self.counts.entry(identity.into()).or_insert(0);
        *entry = entry.saturating_add(count);
    }

    pub fn get(&self, identity: &str) -> Option<u64> {
        self.counts.get(identity).copied()
    }

    /// Sum of every accumulated count
    pub fn total(&self) -> u64 {
        self.counts.values().fold(0u64, |acc, v| acc.saturating_add(*v))
    }

    /// Number of distinct identities
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for AggregateTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (identity, count) in iter {
            table.update(identity, count);
        }
        table
    }
}
