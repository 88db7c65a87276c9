//! Check command implementation.
//!
//! `belay check` is the guard itself and the default subcommand: probe the
//! native module, rebuild (or abort) when it is unusable.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::config::load_config;
use crate::error::{BelayError, Result};
use crate::guard::{run_guard, GuardOutcome, GuardPlan, PlanOverrides, ShellBuildRunner};
use crate::module::LibraryProbe;
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn overrides(&self) -> PlanOverrides {
        PlanOverrides {
            skip_version_check: self.args.skip_version_check,
            abort: self.args.abort,
            strict: self.args.strict,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.project_root, self.config_path.as_deref()) {
            Ok(c) => c,
            Err(BelayError::ConfigNotFound { .. }) => {
                ui.error("No configuration found. Run 'belay init' first.");
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        // Config-level default applies unless a CLI flag already chose.
        if ui.output_mode() == OutputMode::Normal {
            ui.set_output_mode(config.settings.default_output.into());
        }

        let plan = GuardPlan::resolve(&config, &self.project_root, &self.overrides())?;
        let outcome = run_guard(&plan, &LibraryProbe::new(), &ShellBuildRunner::new(), ui)?;

        Ok(match outcome {
            GuardOutcome::Ready => CommandResult::success(),
            GuardOutcome::Aborted { .. } => CommandResult::failure(1),
            GuardOutcome::Rebuilt { build, .. } => {
                if build.success {
                    CommandResult::success()
                } else if plan.strict {
                    return Err(BelayError::BuildFailed {
                        command: plan.build.command.clone(),
                        code: build.exit_code,
                    });
                } else {
                    ui.warning(&format!(
                        "Build command exited with code {}",
                        build
                            .exit_code
                            .map_or_else(|| "unknown".to_string(), |c| c.to_string())
                    ));
                    CommandResult::success()
                }
            }
        })
    }
}
