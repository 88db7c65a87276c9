//! Build command implementation.
//!
//! `belay build` runs the configured build command unconditionally, with
//! no probe first. Useful when the module loads fine but needs rebuilding
//! anyway (new toolchain, local hacking).

use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::error::{BelayError, Result};
use crate::guard::{BuildRunner, GuardPlan, PlanOverrides, ShellBuildRunner};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The build command implementation.
pub struct BuildCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl BuildCommand {
    /// Create a new build command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }
}

impl Command for BuildCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.project_root, self.config_path.as_deref()) {
            Ok(c) => c,
            Err(BelayError::ConfigNotFound { .. }) => {
                ui.error("No configuration found. Run 'belay init' first.");
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let plan = GuardPlan::resolve(&config, &self.project_root, &PlanOverrides::default())?;

        ui.message(&format!("Building native module in {}", plan.build.cwd.display()));
        let mut spinner = ui.start_spinner("Building native module...");
        let build = ShellBuildRunner::new().run(&plan.build);
        spinner.finish_and_clear();
        let build = build?;

        if !build.stdout.is_empty() {
            ui.command_output(&build.stdout);
        }
        if !build.stderr.is_empty() {
            ui.command_error(&build.stderr);
        }

        Ok(if build.success {
            ui.success("Build complete");
            CommandResult::success()
        } else {
            ui.error(&format!(
                "Build command exited with code {}",
                build
                    .exit_code
                    .map_or_else(|| "unknown".to_string(), |c| c.to_string())
            ));
            CommandResult::failure(build.exit_code.unwrap_or(1))
        })
    }
}
