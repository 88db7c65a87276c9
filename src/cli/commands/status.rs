//! Status command implementation.
//!
//! `belay status` probes the native module and reports what the guard
//! would see, without remediating.

use std::path::{Path, PathBuf};

use crate::cli::args::StatusArgs;
use crate::config::load_config;
use crate::error::{BelayError, Result};
use crate::guard::{classify, GuardPlan, PlanOverrides};
use crate::module::{platform, LibraryProbe, ModuleProbe, ModuleStatus};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The status command implementation.
pub struct StatusCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: StatusArgs,
}

impl StatusCommand {
    /// Create a new status command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>, args: StatusArgs) -> Self {
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
}

impl Command for StatusCommand {
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

        // One load attempt, shared by the display and the verdict.
        let status = LibraryProbe::new().probe(&plan.module);
        let reported = match &status {
            ModuleStatus::Ready { reported_version } => reported_version.clone(),
            _ => None,
        };
        let reason = classify(status, plan.expected_version.as_deref());

        if self.args.json {
            let report = serde_json::json!({
                "module": plan.module.path,
                "platform": platform(),
                "expected_version": plan.expected_version,
                "reported_version": reported,
                "ready": reason.is_none(),
                "reason": reason.as_ref().map(|r| r.describe()),
            });
            println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default());
        } else {
            ui.message(&format!("{:<10} {}", "Module", plan.module.path.display()));
            ui.message(&format!("{:<10} {}", "Platform", platform()));
            if let Some(expected) = &plan.expected_version {
                ui.message(&format!("{:<10} {}", "Expected", expected));
            }
            if let Some(found) = &reported {
                ui.message(&format!("{:<10} {}", "Reported", found));
            }
            match &reason {
                None => ui.success("Native module is ready"),
                Some(reason) => ui.warning(&reason.describe()),
            }
        }

        Ok(match reason {
            None => CommandResult::success(),
            Some(_) => CommandResult::failure(1),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, contents: &str) {
        fs::write(temp.path().join("belay.yml"), contents).unwrap();
    }

    #[test]
    fn missing_config_fails_with_code_2() {
        let temp = TempDir::new().unwrap();
        let cmd = StatusCommand::new(temp.path(), None, StatusArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn missing_module_reports_and_fails() {
        let temp = TempDir::new().unwrap();
        write_config(
            &temp,
            r#"
module:
  name: pty
build:
  command: make
version:
  check: false
"#,
        );

        let cmd = StatusCommand::new(temp.path(), None, StatusArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 1);
        assert!(ui.messages().iter().any(|m| m.starts_with("Module")));
        assert!(ui.messages().iter().any(|m| m.contains(platform())));
        assert!(ui.warnings().iter().any(|w| w.contains("no binary at")));
    }

    #[test]
    fn status_never_invokes_the_build() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("native")).unwrap();
        write_config(
            &temp,
            r#"
module:
  name: pty
build:
  command: "touch built.marker"
version:
  check: false
"#,
        );

        let cmd = StatusCommand::new(temp.path(), None, StatusArgs::default());
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert!(!temp.path().join("native/built.marker").exists());
    }

    #[test]
    fn expected_version_is_shown_when_checking() {
        let temp = TempDir::new().unwrap();
        write_config(
            &temp,
            r#"
module:
  name: pty
build:
  command: make
version:
  expected: 2.4.0
"#,
        );

        let cmd = StatusCommand::new(temp.path(), None, StatusArgs::default());
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();

        assert!(ui.messages().iter().any(|m| m.contains("2.4.0")));
    }
}
