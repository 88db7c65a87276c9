//! Configuration schema definitions for Belay.
//!
//! This module contains the struct definitions that map to the
//! `belay.yml` configuration file format.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{BelayError, Result};

/// Root configuration structure for belay.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BelayConfig {
    /// The native module artifact to guard
    pub module: ModuleConfig,

    /// Version checking behavior
    pub version: VersionConfig,

    /// The external build command used for remediation
    pub build: BuildConfig,

    /// What to do when the module is unusable
    pub on_unusable: OnUnusable,

    /// Global settings
    pub settings: Settings,
}

impl BelayConfig {
    /// Validate the configuration after parsing.
    ///
    /// Catches the config mistakes that would otherwise surface as
    /// confusing probe or build failures later.
    pub fn validate(&self) -> Result<()> {
        if self.module.name.is_none() && self.module.path.is_none() {
            return Err(BelayError::ConfigValidationError {
                message: "one of module.name or module.path is required".into(),
            });
        }

        if self.build.command.trim().is_empty() {
            return Err(BelayError::ConfigValidationError {
                message: "build.command must not be empty".into(),
            });
        }

        if self.version.check && self.version.expected.is_none() && self.version.manifest.is_none()
        {
            return Err(BelayError::ConfigValidationError {
                message: "version.check requires version.expected or version.manifest".into(),
            });
        }

        Ok(())
    }
}

/// Where the native module artifact lives.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ModuleConfig {
    /// Bare module name; the platform library filename is derived from it
    /// (`pty` -> `libpty.so` / `libpty.dylib` / `pty.dll`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Directory holding the built artifact, relative to the project root
    #[serde(default = "default_module_dir")]
    pub dir: PathBuf,

    /// Explicit artifact path relative to the project root; overrides
    /// name/dir resolution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            name: None,
            dir: default_module_dir(),
            path: None,
        }
    }
}

/// How the module's reported version is checked.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct VersionConfig {
    /// Whether to compare the module's reported version against the
    /// project's declared version
    #[serde(default = "default_true")]
    pub check: bool,

    /// C symbol on the module returning its version string
    #[serde(default = "default_version_symbol")]
    pub symbol: String,

    /// Explicit expected version; takes priority over the manifest
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,

    /// Manifest file carrying the declared version (JSON or YAML),
    /// relative to the project root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<PathBuf>,

    /// Dotted key path to the version inside the manifest
    #[serde(default = "default_version_symbol")]
    pub manifest_key: String,
}

impl Default for VersionConfig {
    fn default() -> Self {
        Self {
            check: true,
            symbol: default_version_symbol(),
            expected: None,
            manifest: None,
            manifest_key: default_version_symbol(),
        }
    }
}

/// The external build command.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BuildConfig {
    /// Shell command that builds the native module
    pub command: String,

    /// Working directory for the build command, relative to the project
    /// root
    #[serde(default = "default_module_dir")]
    pub dir: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            command: String::new(),
            dir: default_module_dir(),
        }
    }
}

/// What the guard does when the module is unusable.
///
/// `abort` prints the notice and exits non-zero without ever building;
/// `rebuild` invokes the build command. Both exist because both behaviors
/// shipped in the wild; `rebuild` is the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OnUnusable {
    /// Invoke the build command
    #[default]
    Rebuild,

    /// Exit non-zero without building
    Abort,
}

/// Global settings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Settings {
    /// Default output mode: verbose, normal, quiet, silent
    #[serde(default)]
    pub default_output: OutputMode,

    /// Treat a non-zero build exit as the guard's own failure
    #[serde(default, skip_serializing_if = "is_false")]
    pub strict: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_output: OutputMode::Normal,
            strict: false,
        }
    }
}

/// Output mode as written in config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

fn default_module_dir() -> PathBuf {
    PathBuf::from("native")
}

fn default_version_symbol() -> String {
    "version".to_string()
}

fn default_true() -> bool {
    true
}

fn is_false(value: &bool) -> bool {
    !value
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_yaml() -> &'static str {
        r#"
module:
  name: pty
build:
  command: npm run build
version:
  manifest: package.json
"#
    }

    #[test]
    fn minimal_config_parses_and_validates() {
        let config: BelayConfig = serde_yaml::from_str(minimal_yaml()).unwrap();
        config.validate().unwrap();
        assert_eq!(config.module.name.as_deref(), Some("pty"));
        assert_eq!(config.module.dir, PathBuf::from("native"));
        assert_eq!(config.build.dir, PathBuf::from("native"));
        assert!(config.version.check);
        assert_eq!(config.version.symbol, "version");
        assert_eq!(config.on_unusable, OnUnusable::Rebuild);
    }

    #[test]
    fn empty_config_fails_validation() {
        let config = BelayConfig::default();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("module.name"));
    }

    #[test]
    fn empty_build_command_fails_validation() {
        let yaml = r#"
module:
  path: native/index.node
version:
  check: false
"#;
        let config: BelayConfig = serde_yaml::from_str(yaml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("build.command"));
    }

    #[test]
    fn version_check_without_source_fails_validation() {
        let yaml = r#"
module:
  name: pty
build:
  command: make
"#;
        let config: BelayConfig = serde_yaml::from_str(yaml).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("version.expected"));
    }

    #[test]
    fn version_check_disabled_needs_no_source() {
        let yaml = r#"
module:
  name: pty
build:
  command: make
version:
  check: false
"#;
        let config: BelayConfig = serde_yaml::from_str(yaml).unwrap();
        config.validate().unwrap();
    }

    #[test]
    fn explicit_expected_version_validates() {
        let yaml = r#"
module:
  name: pty
build:
  command: make
version:
  expected: 1.0.0
"#;
        let config: BelayConfig = serde_yaml::from_str(yaml).unwrap();
        config.validate().unwrap();
        assert_eq!(config.version.expected.as_deref(), Some("1.0.0"));
    }

    #[test]
    fn on_unusable_abort_parses() {
        let yaml = r#"
module:
  name: pty
build:
  command: make
version:
  check: false
on_unusable: abort
"#;
        let config: BelayConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.on_unusable, OnUnusable::Abort);
    }

    #[test]
    fn settings_parse_output_mode_and_strict() {
        let yaml = r#"
module:
  name: pty
build:
  command: make
version:
  check: false
settings:
  default_output: quiet
  strict: true
"#;
        let config: BelayConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.settings.default_output, OutputMode::Quiet);
        assert!(config.settings.strict);
    }

    #[test]
    fn config_roundtrips_through_yaml() {
        let config: BelayConfig = serde_yaml::from_str(minimal_yaml()).unwrap();
        let serialized = serde_yaml::to_string(&config).unwrap();
        let reparsed: BelayConfig = serde_yaml::from_str(&serialized).unwrap();
        assert_eq!(reparsed.module.name, config.module.name);
        assert_eq!(reparsed.version.manifest, config.version.manifest);
    }

    #[test]
    fn schema_generation_includes_top_level_fields() {
        let schema = schemars::schema_for!(BelayConfig);
        let json = serde_json::to_string(&schema).unwrap();
        assert!(json.contains("module"));
        assert!(json.contains("on_unusable"));
        assert!(json.contains("build"));
    }
}
