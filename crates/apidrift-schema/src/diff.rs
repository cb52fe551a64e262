//! Schema comparison: fingerprint two documents and classify every path as
//! removed, added, or type-changed.

use serde_json::Value;

use apidrift_types::{Change, DiffReport};

use crate::fingerprint::fingerprint;

/// Compare the schemas of two JSON documents.
///
/// Old-side changes (removals and type changes) come first, in the old
/// document's traversal order, followed by additions in the new document's
/// traversal order. The ordering is a tested contract.
pub fn diff_schemas(old: &Value, new: &Value) -> DiffReport {
    let a = fingerprint(old);
    let b = fingerprint(new);

    let mut changes = Vec::new();

    for (path, old_tag) in &a {
        match b.get(path) {
            None => changes.push(Change::Removed {
                path: path.clone(),
                old: *old_tag,
            }),
            Some(new_tag) if new_tag != old_tag => changes.push(Change::TypeChanged {
                path: path.clone(),
                old: *old_tag,
                new: *new_tag,
            }),
            Some(_) => {}
        }
    }

    for (path, new_tag) in &b {
        if !a.contains_key(path) {
            changes.push(Change::Added {
                path: path.clone(),
                new: *new_tag,
            });
        }
    }

    DiffReport::from_changes(changes)
}
