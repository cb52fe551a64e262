//! Type fingerprinting: record the structural type of a JSON document at
//! every reachable path.
//!
//! Paths use dot/bracket notation (`a.b[].c`). Array element paths collapse
//! to the single synthetic segment `[]`, the shape of the first element;
//! arrays are never expanded index by index.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde_json::Value;

use apidrift_types::TypeTag;

/// Insertion-ordered mapping from path to structural type.
///
/// Insertion order is traversal (document) order. The differ's output
/// ordering contract depends on it.
pub type FingerprintMap = IndexMap<String, TypeTag>;

/// Record the structural type of every reachable path in `value`.
///
/// The root itself (empty path) is not recorded. A container node is
/// recorded at its own path and then descended into, so every path appears
/// exactly once.
pub fn fingerprint(value: &Value) -> FingerprintMap {
    let mut map = FingerprintMap::new();
    let mut seen = HashSet::new();
    walk(value, "", &mut map, &mut seen);
    map
}

fn walk(value: &Value, base: &str, out: &mut FingerprintMap, seen: &mut HashSet<usize>) {
    // Record before descending, so a re-encountered node keeps its tag even
    // when the guard cuts the branch off.
    if !base.is_empty() {
        out.insert(base.to_string(), TypeTag::of(value));
    }

    match value {
        Value::Object(fields) => {
            if !seen.insert(node_addr(value)) {
                return;
            }
            for (key, child) in fields {
                walk(child, &child_path(base, key), out, seen);
            }
        }
        Value::Array(items) => {
            if !seen.insert(node_addr(value)) {
                return;
            }
            // First-element approximation: only a leading plain object is
            // expanded. Arrays of primitives, arrays of arrays, and empty
            // arrays stay opaque.
            if let Some(first @ Value::Object(_)) = items.first() {
                walk(first, &element_path(base), out, seen);
            }
        }
        _ => {}
    }
}

/// Identity of a container node for the cycle guard. The set lives only for
/// the duration of one traversal.
fn node_addr(value: &Value) -> usize {
    value as *const Value as usize
}

fn child_path(base: &str, key: &str) -> String {
    if base.is_empty() {
        key.to_string()
    } else {
        format!("{base}.{key}")
    }
}

fn element_path(base: &str) -> String {
    format!("{base}[]")
}
