//! Error types for the translation compiler.
//!
//! Only two classes of failure are fatal for a build: failing to scan the
//! source tree and failing to write an artifact. A single unreadable source
//! file is recovered locally inside aggregation (warn and skip), so it is
//! modeled as [`LoadError`] and never escapes the pipeline.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a single translation source file.
///
/// Recovered per file: the aggregator turns any of these into a warning
/// diagnostic and continues with the remaining files.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read file: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("top-level value is not a mapping")]
    NotAMapping,
}

/// Fatal failure of a build invocation.
///
/// When a build fails with one of these, the cache manifest is left
/// untouched so the next invocation retries a full rebuild.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("failed to scan translations under {path}: {source}")]
    Scan {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
