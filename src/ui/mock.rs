//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use belay::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Starting");
//! ui.success("Done!");
//!
//! assert!(ui.messages().contains(&"Starting".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! assert!(ui.saw_any_output());
//! ```

use super::{OutputMode, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    command_outputs: Vec<String>,
    command_errors: Vec<String>,
    spinners: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self {
            mode: OutputMode::Normal,
            ..Default::default()
        }
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Captured plain messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Captured verbatim build stdout chunks.
    pub fn command_outputs(&self) -> &[String] {
        &self.command_outputs
    }

    /// Captured verbatim build stderr chunks.
    pub fn command_errors(&self) -> &[String] {
        &self.command_errors
    }

    /// Spinner messages that were started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// Whether anything at all was shown to the user.
    pub fn saw_any_output(&self) -> bool {
        !self.messages.is_empty()
            || !self.successes.is_empty()
            || !self.warnings.is_empty()
            || !self.errors.is_empty()
            || !self.command_outputs.is_empty()
            || !self.command_errors.is_empty()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn command_output(&mut self, out: &str) {
        self.command_outputs.push(out.to_string());
    }

    fn command_error(&mut self, err: &str) {
        self.command_errors.push(err.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner)
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }
}

/// Spinner handle that does nothing.
struct MockSpinner;

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_and_clear(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_messages_in_order() {
        let mut ui = MockUI::new();
        ui.message("first");
        ui.message("second");
        assert_eq!(ui.messages(), &["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn captures_each_channel_separately() {
        let mut ui = MockUI::new();
        ui.success("ok");
        ui.warning("hm");
        ui.error("bad");
        ui.command_output("built\n");
        ui.command_error("warning: deprecated\n");

        assert_eq!(ui.successes().len(), 1);
        assert_eq!(ui.warnings().len(), 1);
        assert_eq!(ui.errors().len(), 1);
        assert_eq!(ui.command_outputs(), &["built\n".to_string()]);
        assert_eq!(ui.command_errors(), &["warning: deprecated\n".to_string()]);
    }

    #[test]
    fn fresh_mock_saw_nothing() {
        let ui = MockUI::new();
        assert!(!ui.saw_any_output());
    }

    #[test]
    fn spinners_are_recorded_but_silent() {
        let mut ui = MockUI::new();
        let mut spinner = ui.start_spinner("building");
        spinner.set_message("still building");
        spinner.finish_and_clear();

        assert_eq!(ui.spinners(), &["building".to_string()]);
        assert!(!ui.saw_any_output());
    }

    #[test]
    fn with_mode_sets_mode() {
        let ui = MockUI::with_mode(OutputMode::Silent);
        assert_eq!(ui.output_mode(), OutputMode::Silent);
    }
}
