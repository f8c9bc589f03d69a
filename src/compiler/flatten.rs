//! Key-path flattening.
//!
//! Turns a nested document into the dotted key paths of its leaf values:
//!
//! `{"a": true, "b": {"c": true}}` flattens to `["a", "b.c"]`
//!
//! A literal `.` inside a key is escaped so the join cannot be confused with
//! a nesting boundary: `{"a.a": true}` flattens to `["a\.a"]`, distinct from
//! `{"a": {"a": true}}`.

use serde_json::Value;

use super::Document;

/// Returns the key paths of every leaf in `document`, depth-first in the
/// document's own key order. An empty document yields an empty vec.
pub fn flatten(document: &Document) -> Vec<String> {
    let mut paths = Vec::new();
    collect(document, None, &mut paths);
    paths
}

fn collect(node: &Document, prefix: Option<&str>, paths: &mut Vec<String>) {
    for (key, value) in node {
        let segment = escape_segment(key);
        let path = match prefix {
            Some(prefix) => format!("{}.{}", prefix, segment),
            None => segment,
        };
        match value {
            Value::Object(child) => collect(child, Some(&path), paths),
            _ => paths.push(path),
        }
    }
}

fn escape_segment(key: &str) -> String {
    key.replace('.', "\\.")
}
