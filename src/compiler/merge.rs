//! Deep merging.
//!
//! The build-time merge is deep and non-mutating: every locale's document is
//! merged over a fresh clone of the default locale's document, so the default
//! stays pristine across the whole emission loop.

use serde_json::Value;

use super::Document;

/// Returns a new document equal to `target` with every key path present in
/// `source` overridden by `source`'s value. Keys only in `target` keep their
/// value; keys only in `source` are carried through. Neither input is
/// modified.
pub fn deep_merge(target: &Document, source: &Document) -> Document {
    let mut merged = target.clone();
    merge_into(&mut merged, source);
    merged
}

fn merge_into(target: &mut Document, source: &Document) {
    for (key, value) in source {
        match (target.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                merge_into(existing, incoming);
            }
            _ => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn document(value: serde_json::Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {}", other),
        }
    }

    #[test]
    fn test_source_wins_at_leaves() {
        let target = document(json!({"greeting": "Hello"}));
        let source = document(json!({"greeting": "Bonjour"}));
        assert_eq!(
            deep_merge(&target, &source),
            document(json!({"greeting": "Bonjour"}))
        );
    }

    #[test]
    fn test_missing_keys_fall_back_to_target() {
        let target = document(json!({"a": {"b": "x", "c": "y"}}));
        let source = document(json!({"a": {"c": "z"}}));
        assert_eq!(
            deep_merge(&target, &source),
            document(json!({"a": {"b": "x", "c": "z"}}))
        );
    }

    #[test]
    fn test_source_only_keys_are_preserved() {
        let target = document(json!({"a": "x"}));
        let source = document(json!({"b": {"c": "y"}}));
        assert_eq!(
            deep_merge(&target, &source),
            document(json!({"a": "x", "b": {"c": "y"}}))
        );
    }

    #[test]
    fn test_leaf_replaces_subtree_and_vice_versa() {
        let target = document(json!({"a": {"b": "x"}}));
        let source = document(json!({"a": "flat"}));
        assert_eq!(deep_merge(&target, &source), document(json!({"a": "flat"})));

        let target = document(json!({"a": "flat"}));
        let source = document(json!({"a": {"b": "x"}}));
        assert_eq!(
            deep_merge(&target, &source),
            document(json!({"a": {"b": "x"}}))
        );
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let target = document(json!({"a": {"b": "x"}}));
        let source = document(json!({"a": {"b": "y"}, "c": "z"}));
        let target_before = target.clone();
        let source_before = source.clone();

        let _ = deep_merge(&target, &source);

        assert_eq!(target, target_before);
        assert_eq!(source, source_before);
    }

    #[test]
    fn test_empty_source_is_identity() {
        let target = document(json!({"a": {"b": "x"}}));
        assert_eq!(deep_merge(&target, &Document::new()), target);
    }
}
