//! Resolution of config into a runnable guard plan.
//!
//! A [`GuardPlan`] is the fully-resolved form of the configuration: paths
//! joined to the project root, the expected version already read out of
//! the manifest, and CLI overrides applied. The runner never touches the
//! config or the filesystem for anything but the probe and the build.

use std::path::{Path, PathBuf};

use crate::config::schema::{BelayConfig, OnUnusable};
use crate::error::{BelayError, Result};
use crate::manifest;
use crate::module::{library_filename, ModuleSpec};

/// The build command and where to run it.
#[derive(Debug, Clone)]
pub struct BuildSpec {
    /// Shell command that builds the native module.
    pub command: String,

    /// Working directory for the command.
    pub cwd: PathBuf,
}

/// CLI-level overrides applied during plan resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanOverrides {
    /// Skip the version comparison even if config enables it.
    pub skip_version_check: bool,

    /// Force abort mode regardless of config.
    pub abort: bool,

    /// Treat a failed build as the guard's own failure.
    pub strict: bool,
}

/// Everything the guard runner needs for one run.
#[derive(Debug, Clone)]
pub struct GuardPlan {
    /// What to probe.
    pub module: ModuleSpec,

    /// Version the project declares. `Some` exactly when version checking
    /// is enabled.
    pub expected_version: Option<String>,

    /// What to do when the module is unusable.
    pub on_unusable: OnUnusable,

    /// How to rebuild.
    pub build: BuildSpec,

    /// Whether a non-zero build exit fails the guard.
    pub strict: bool,
}

impl GuardPlan {
    /// Resolve a validated config against a project root.
    ///
    /// Reads the manifest here, up front, so a broken manifest surfaces as
    /// a config-time error instead of mid-guard.
    pub fn resolve(
        config: &BelayConfig,
        project_root: &Path,
        overrides: &PlanOverrides,
    ) -> Result<Self> {
        let artifact = match &config.module.path {
            Some(explicit) => project_root.join(explicit),
            None => {
                let name =
                    config
                        .module
                        .name
                        .as_deref()
                        .ok_or_else(|| BelayError::ConfigValidationError {
                            message: "one of module.name or module.path is required".into(),
                        })?;
                project_root
                    .join(&config.module.dir)
                    .join(library_filename(name))
            }
        };

        let check_version = config.version.check && !overrides.skip_version_check;

        let expected_version = if check_version {
            match &config.version.expected {
                Some(explicit) => Some(explicit.clone()),
                None => {
                    let manifest_path = config.version.manifest.as_ref().ok_or_else(|| {
                        BelayError::ConfigValidationError {
                            message: "version.check requires version.expected or version.manifest"
                                .into(),
                        }
                    })?;
                    Some(manifest::read_version(
                        &project_root.join(manifest_path),
                        &config.version.manifest_key,
                    )?)
                }
            }
        } else {
            None
        };

        let module = ModuleSpec {
            path: artifact,
            version_symbol: check_version.then(|| config.version.symbol.clone()),
        };

        let on_unusable = if overrides.abort {
            OnUnusable::Abort
        } else {
            config.on_unusable
        };

        Ok(Self {
            module,
            expected_version,
            on_unusable,
            build: BuildSpec {
                command: config.build.command.clone(),
                cwd: project_root.join(&config.build.dir),
            },
            strict: overrides.strict || config.settings.strict,
        })
    }
}
