//! The external build collaborator.
//!
//! The guard depends on exactly one operation: run the build command,
//! return captured output and status. [`BuildRunner`] is that narrow
//! interface; [`ShellBuildRunner`] is the real implementation over the
//! shell layer. Everything else about the build tool is opaque.

use tracing::debug;

use crate::error::Result;
use crate::shell::{execute, CommandOptions, CommandResult};

use super::plan::BuildSpec;

/// Capability to run the external build command.
pub trait BuildRunner {
    /// Run the build, blocking until it exits.
    ///
    /// `Err` means the command could not be spawned; a build that ran and
    /// failed comes back as `Ok` with `success == false`.
    fn run(&self, spec: &BuildSpec) -> Result<CommandResult>;
}

/// Real build runner: shell execution with captured streams.
#[derive(Debug, Default)]
pub struct ShellBuildRunner;

impl ShellBuildRunner {
    /// Create a new shell build runner.
    pub fn new() -> Self {
        Self
    }
}

impl BuildRunner for ShellBuildRunner {
    fn run(&self, spec: &BuildSpec) -> Result<CommandResult> {
        debug!(command = %spec.command, cwd = %spec.cwd.display(), "running build command");

        let options = CommandOptions {
            cwd: Some(spec.cwd.clone()),
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        };
        let result = execute(&spec.command, &options)?;

        debug!(
            exit_code = ?result.exit_code,
            duration_ms = result.duration.as_millis() as u64,
            "build command finished"
        );
        Ok(result)
    }
}
