//! Locale aggregation.
//!
//! Walks the translations root, loads every source file, and groups the
//! resulting documents by locale. A single unreadable file never aborts the
//! build; it becomes a warning and the walk continues.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::Path;

use walkdir::WalkDir;

use super::{loader, merge, Document, LocaleId};
use crate::error::BuildError;

/// Documents grouped by locale, plus the warnings collected along the way.
#[derive(Debug, Default)]
pub struct Aggregation {
    pub translations: BTreeMap<LocaleId, Document>,
    pub warnings: Vec<String>,
}

/// Recursively gathers every translation document under `root`.
///
/// The locale id is the base filename up to its first `.`, so nested
/// subdirectories organize sources without affecting locale derivation.
/// When two files map to the same locale, the later file (walk order is
/// sorted by file name, parents before children) is deep-merged onto the
/// earlier one, so its values win at conflicting leaves.
pub fn gather_translations(root: &Path) -> Result<Aggregation, BuildError> {
    let mut aggregation = Aggregation::default();

    // A missing root is not a scan failure: it simply holds no locales, so
    // the build resolves to a missing-default-locale warning downstream.
    if !root.exists() {
        return Ok(aggregation);
    }

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|err| BuildError::Scan {
            path: err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source: err.into(),
        })?;

        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();

        match loader::load_document(path) {
            Ok(Some(document)) => {
                let Some(locale) = locale_id(path) else {
                    aggregation
                        .warnings
                        .push(format!("cannot read path \"{}\"", path.display()));
                    continue;
                };
                match aggregation.translations.entry(locale) {
                    Entry::Occupied(mut existing) => {
                        let merged = merge::deep_merge(existing.get(), &document);
                        existing.insert(merged);
                    }
                    Entry::Vacant(slot) => {
                        slot.insert(document);
                    }
                }
            }
            Ok(None) => aggregation
                .warnings
                .push(format!("cannot read path \"{}\"", path.display())),
            Err(err) => aggregation
                .warnings
                .push(format!("cannot read path \"{}\": {}", path.display(), err)),
        }
    }

    Ok(aggregation)
}

/// Extracts the locale id from a source path: the base filename up to the
/// first `.`.
///
/// Examples:
/// - "en-us.json" -> Some("en-us")
/// - "translations/zh-cn.messages.yaml" -> Some("zh-cn")
fn locale_id(path: &Path) -> Option<LocaleId> {
    let name = path.file_name()?.to_str()?;
    let base = name.split('.').next()?;
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}
