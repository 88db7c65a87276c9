//! Terminal output components.
//!
//! This module provides:
//! - [`UserInterface`] trait for UI abstraction
//! - [`TerminalUI`] for real terminal usage
//! - [`MockUI`] for tests, capturing every interaction
//! - The build spinner and the output-mode gate
//!
//! Guard notices and build output go through this trait, never through the
//! logger; `tracing` carries only diagnostics.

pub mod mock;
pub mod output;
pub mod spinner;
pub mod terminal;
pub mod theme;

pub use mock::MockUI;
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, BelayTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Get the current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Display a message to the user.
    fn message(&mut self, msg: &str);

    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a warning message.
    fn warning(&mut self, msg: &str);

    /// Display an error message.
    fn error(&mut self, msg: &str);

    /// Pass captured build stdout through verbatim.
    fn command_output(&mut self, out: &str);

    /// Pass captured build stderr through verbatim.
    fn command_error(&mut self, err: &str);

    /// Start a spinner for a long-running operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Whether this UI is attached to an interactive terminal.
    fn is_interactive(&self) -> bool;

    /// Change the output mode (config-level default applied after load).
    fn set_output_mode(&mut self, mode: OutputMode);
}

/// Handle to a running spinner.
pub trait SpinnerHandle {
    /// Update the spinner message.
    fn set_message(&mut self, msg: &str);

    /// Stop the spinner and erase it.
    fn finish_and_clear(&mut self);
}
