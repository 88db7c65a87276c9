//! Init command implementation.
//!
//! `belay init` writes a starter `belay.yml` into the project root, or
//! prints the config JSON schema with `--schema`.

use std::fs;
use std::path::{Path, PathBuf};

use include_dir::{include_dir, Dir};

use crate::cli::args::InitArgs;
use crate::config::schema::BelayConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Embedded starter templates.
static TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// The init command implementation.
pub struct InitCommand {
    project_root: PathBuf,
    args: InitArgs,
}

impl InitCommand {
    /// Create a new init command.
    pub fn new(project_root: &Path, args: InitArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Render the starter config for this project.
    fn render_config(&self) -> String {
        let project_name = self
            .project_root
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("mymodule");

        let template = TEMPLATES
            .get_file("belay.yml")
            .and_then(|f| f.contents_utf8())
            .unwrap_or_default();

        template.replace("{{project_name}}", project_name)
    }
}

impl Command for InitCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.schema {
            let schema = schemars::schema_for!(BelayConfig);
            println!("{}", serde_json::to_string_pretty(&schema).unwrap_or_default());
            return Ok(CommandResult::success());
        }

        let target = self.project_root.join("belay.yml");

        if target.exists() && !self.args.force {
            if ui.is_interactive() {
                let overwrite = dialoguer::Confirm::new()
                    .with_prompt("belay.yml already exists. Overwrite?")
                    .default(false)
                    .interact()
                    .unwrap_or(false);
                if !overwrite {
                    ui.message("Keeping existing configuration.");
                    return Ok(CommandResult::success());
                }
            } else {
                ui.error("belay.yml already exists. Pass --force to overwrite.");
                return Ok(CommandResult::failure(1));
            }
        }

        fs::write(&target, self.render_config())?;
        ui.success(&format!("Wrote {}", target.display()));
        ui.message("Edit module.name and build.command for your project.");
        Ok(CommandResult::success())
    }
}
