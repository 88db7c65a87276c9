//! Belay - Build guard for native binary modules.
//!
//! Belay is the install-time check that a project's platform-specific
//! native module is present, loadable, and version-matched, rebuilding it
//! through the project's own build command when it is not.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`guard`] - The guard procedure: probe, classify, remediate
//! - [`manifest`] - Expected-version lookup in project manifests
//! - [`module`] - Native module probing via dynamic loading
//! - [`shell`] - Shell command execution
//! - [`ui`] - Terminal output, spinners, and the mockable UI trait
//!
//! # Example
//!
//! ```no_run
//! use belay::config::load_config;
//! use belay::guard::{run_guard, GuardPlan, PlanOverrides, ShellBuildRunner};
//! use belay::module::LibraryProbe;
//! use belay::ui::{MockUI, OutputMode};
//! use std::path::Path;
//!
//! let root = Path::new(".");
//! let config = load_config(root, None)?;
//! let plan = GuardPlan::resolve(&config, root, &PlanOverrides::default())?;
//!
//! let mut ui = MockUI::with_mode(OutputMode::Silent);
//! let outcome = run_guard(&plan, &LibraryProbe::new(), &ShellBuildRunner::new(), &mut ui)?;
//! if outcome.is_ready() {
//!     // nothing was printed, nothing was built
//! }
//! # Ok::<(), belay::BelayError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod guard;
pub mod manifest;
pub mod module;
pub mod shell;
pub mod ui;

pub use error::{BelayError, Result};
