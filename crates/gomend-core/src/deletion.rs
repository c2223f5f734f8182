//! The set of original lines scheduled for removal.

use std::collections::BTreeMap;

use crate::manifest::Line;
use crate::report::{Removal, RemovalReason, RepairReport};

/// Lines to drop from the manifest, keyed by original index.
///
/// The set only grows. Scheduling a line twice keeps the first reason.
#[derive(Debug, Default, Clone)]
pub struct DeletionSet {
    entries: BTreeMap<usize, Removal>,
}

impl DeletionSet {
    pub fn schedule(&mut self, line: Line<'_>, reason: RemovalReason) {
        self.entries.entry(line.index).or_insert_with(|| Removal {
            line: line.number(),
            text: line.text.to_string(),
            reason,
        });
    }

    pub fn contains(&self, index: usize) -> bool {
        self.entries.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scheduled indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    pub fn into_report(self) -> RepairReport {
        RepairReport {
            removals: self.entries.into_values().collect(),
        }
    }
}
