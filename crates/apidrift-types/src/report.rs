use serde::{Deserialize, Serialize};

use crate::change::Change;

/// Counts of changes by classification.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    /// Fields added in the new document.
    pub added: usize,
    /// Fields removed from the old document.
    pub removed: usize,
    /// Changes that can break consumers: removals plus type changes.
    pub risky: usize,
}

/// The result of comparing two document schemas.
///
/// Built once per comparison and not mutated afterward. The change list
/// keeps the differ's emission order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    /// The ordered list of schema changes.
    pub changes: Vec<Change>,
    /// Counts over the change list.
    pub summary: DiffSummary,
}

impl DiffReport {
    /// Build a report from an ordered change list, computing the summary.
    pub fn from_changes(changes: Vec<Change>) -> Self {
        let summary = DiffSummary {
            added: changes
                .iter()
                .filter(|c| matches!(c, Change::Added { .. }))
                .count(),
            removed: changes
                .iter()
                .filter(|c| matches!(c, Change::Removed { .. }))
                .count(),
            risky: changes.iter().filter(|c| c.is_risky()).count(),
        };
        Self { changes, summary }
    }

    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }
}
