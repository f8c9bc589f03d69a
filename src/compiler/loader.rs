//! Translation source file loading.

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::Document;
use crate::error::LoadError;

/// Parses a translation source file based on its extension.
///
/// `json` files parse with serde_json, `yaml`/`yml` with serde_yaml. Any
/// other extension returns `Ok(None)` and callers must skip the file; it is
/// not an error because source trees may carry unrelated files. Content that
/// does not parse under the declared format, or whose top-level value is not
/// a mapping, is a [`LoadError`].
pub fn load_document(path: &Path) -> Result<Option<Document>, LoadError> {
    let ext = path.extension().and_then(|e| e.to_str());

    let value: Value = match ext {
        Some("json") => serde_json::from_str(&fs::read_to_string(path)?)?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&fs::read_to_string(path)?)?,
        _ => return Ok(None),
    };

    match value {
        Value::Object(document) => Ok(Some(document)),
        _ => Err(LoadError::NotAMapping),
    }
}
