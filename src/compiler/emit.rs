//! Compiled module emission.
//!
//! Each locale's merged document is written as a self-contained ES module
//! whose sole content is a default-exported value literal, so consumers load
//! it directly as code instead of re-parsing structured data.

use std::fs;
use std::path::{Path, PathBuf};

use super::Document;
use crate::error::BuildError;

/// Creates the output directory, including intermediate directories.
/// Idempotent; an existing directory is not an error.
pub fn ensure_output_dir(dir: &Path) -> Result<(), BuildError> {
    fs::create_dir_all(dir).map_err(|source| BuildError::Write {
        path: dir.to_path_buf(),
        source,
    })
}

/// Writes `<dir>/<locale>.js`, fully overwriting any prior file, and returns
/// the artifact path. Write failures are fatal for the invocation.
pub fn emit_locale(dir: &Path, locale: &str, document: &Document) -> Result<PathBuf, BuildError> {
    let path = dir.join(format!("{}.js", locale));

    fs::write(&path, export_module(document)).map_err(|source| BuildError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}

fn export_module(document: &Document) -> String {
    let literal =
        serde_json::to_string(document).expect("an in-memory document always serializes");
    format!("export default {};", literal)
}
