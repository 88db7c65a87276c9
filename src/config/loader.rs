//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::BelayConfig;
use crate::error::{BelayError, Result};

/// Config filenames searched under the project root, in priority order.
const CONFIG_NAMES: &[&str] = &["belay.yml", ".belay.yml"];

/// Find the config file for a project root.
///
/// `override_path` (from `--config`) wins outright; otherwise the first
/// existing name from [`CONFIG_NAMES`] is used.
pub fn discover(project_root: &Path, override_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path.to_path_buf());
    }

    CONFIG_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.exists())
}

/// Load and validate the project configuration.
pub fn load_config(project_root: &Path, override_path: Option<&Path>) -> Result<BelayConfig> {
    let path =
        discover(project_root, override_path).ok_or_else(|| BelayError::ConfigNotFound {
            path: project_root.join(CONFIG_NAMES[0]),
        })?;

    let config = parse_file(&path)?;
    config.validate()?;
    Ok(config)
}

/// Parse a config file without validating it.
pub fn parse_file(path: &Path) -> Result<BelayConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(BelayError::ConfigNotFound {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    serde_yaml::from_str(&contents).map_err(|e| BelayError::ConfigParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
