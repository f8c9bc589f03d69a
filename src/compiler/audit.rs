//! Completeness auditing.
//!
//! Compares a candidate locale's key paths against the default locale's.
//! Strictly observational: missing paths become warnings, never failures,
//! because the merge step fills them in from the default locale anyway.

use std::collections::HashSet;

use super::{flatten, Document};

/// Returns the default-locale key paths that have no counterpart in
/// `candidate`, in the default's flattening order.
pub fn missing_keys(default_paths: &[String], candidate: &Document) -> Vec<String> {
    let candidate_paths: HashSet<String> = flatten::flatten(candidate).into_iter().collect();

    default_paths
        .iter()
        .filter(|path| !candidate_paths.contains(path.as_str()))
        .cloned()
        .collect()
}
