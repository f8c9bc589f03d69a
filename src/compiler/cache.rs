//! Input fingerprinting for incremental rebuilds.
//!
//! A fingerprint is a cheap content signature: file size plus modification
//! time. The manifest maps every tracked source path to its fingerprint and
//! is owned by the compiler instance, never shared or persisted; two scans
//! that compare equal mean no input was added, removed, or modified.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use walkdir::WalkDir;

use crate::error::BuildError;

/// Content signature for one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    pub size: u64,
    /// Absent on filesystems that do not report modification times; the
    /// size still participates in change detection there.
    pub modified: Option<SystemTime>,
}

/// Fingerprints of every tracked input, keyed by path.
pub type CacheManifest = BTreeMap<PathBuf, Fingerprint>;

/// Fingerprints every regular file under `root`.
///
/// A nonexistent root yields an empty manifest rather than an error, so a
/// build against a not-yet-created translations directory reports the
/// missing default locale instead of failing the scan.
pub fn scan(root: &Path) -> Result<CacheManifest, BuildError> {
    let mut manifest = CacheManifest::new();

    if !root.exists() {
        return Ok(manifest);
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
        let metadata = fs::metadata(path).map_err(|source| BuildError::Scan {
            path: path.to_path_buf(),
            source,
        })?;

        manifest.insert(
            path.to_path_buf(),
            Fingerprint {
                size: metadata.len(),
                modified: metadata.modified().ok(),
            },
        );
    }

    Ok(manifest)
}
