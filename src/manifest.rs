//! Expected-version lookup in project manifests.
//!
//! The guard compares the native module's reported version against the
//! version the project declares in its packaging manifest (`package.json`,
//! a YAML manifest, etc). The value is returned exactly as written: no
//! trimming of `v` prefixes, no semver normalization. Comparison elsewhere
//! is plain string equality.

use std::fs;
use std::path::Path;

use crate::error::{BelayError, Result};

/// Read the declared version from a manifest file.
///
/// The format is chosen by extension: `.json` parses as JSON, everything
/// else as YAML (which also accepts JSON, but the explicit branch gives
/// JSON files JSON error messages). `key` is a dotted path into the
/// document, e.g. `version` or `package.version`.
pub fn read_version(path: &Path, key: &str) -> Result<String> {
    let contents = fs::read_to_string(path).map_err(|e| BelayError::ManifestError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let document: serde_json::Value = if is_json {
        serde_json::from_str(&contents).map_err(|e| BelayError::ManifestError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    } else {
        serde_yaml::from_str(&contents).map_err(|e| BelayError::ManifestError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    };

    lookup(&document, key).ok_or_else(|| BelayError::ManifestError {
        path: path.to_path_buf(),
        message: format!("key '{}' not found or not a string", key),
    })
}

/// Walk a dotted key path through a JSON document.
fn lookup(document: &serde_json::Value, key: &str) -> Option<String> {
    let mut node = document;
    for part in key.split('.') {
        node = node.get(part)?;
    }
    node.as_str().map(String::from)
}
