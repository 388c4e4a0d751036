//! Session history of classifications, newest first.

use crate::classify::{classify, Label};
use log::debug;
use serde::{Serialize, Serializer};

/// A submitted text paired with the label it received.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    pub text: String,
    pub label: Label,
}

/// Append-only log of classifications for one session.
///
/// Entries are stored oldest first and handed out newest first.
#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify a user submission and record it.
    ///
    /// Blank or whitespace-only text is ignored: nothing is classified,
    /// nothing is recorded, and `None` is returned.
    pub fn submit(&mut self, text: &str) -> Option<&HistoryEntry> {
        if text.trim().is_empty() {
            debug!("[history] Ignoring blank submission");
            return None;
        }
        let label = classify(text);
        Some(self.record(text, label))
    }

    /// Record an already-classified text as the newest entry.
    pub fn record(&mut self, text: impl Into<String>, label: Label) -> &HistoryEntry {
        self.entries.push(HistoryEntry {
            text: text.into(),
            label,
        });
        &self.entries[self.entries.len() - 1]
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &HistoryEntry> + ExactSizeIterator {
        self.entries.iter().rev()
    }

    /// The most recent entry.
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// Entry `index` counted from the newest (0 is the latest).
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.iter().nth(index)
    }

    /// Up to `limit` entries, newest first, cloned for handing out.
    pub fn snapshot(&self, limit: Option<usize>) -> Vec<HistoryEntry> {
        self.iter()
            .take(limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for History {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::iter::Rev<std::slice::Iter<'a, HistoryEntry>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter().rev()
    }
}
