//! Terminal UI implementation.

use console::Term;
use std::io::Write;

use super::{
    should_use_colors, BelayTheme, OutputMode, ProgressSpinner, SpinnerHandle, UserInterface,
};

/// Terminal UI implementation.
///
/// Notices and status lines go to stdout through [`Term`]; errors and the
/// build's captured stderr go to the real stderr stream so installers that
/// split the streams see them in the right place.
pub struct TerminalUI {
    term: Term,
    theme: BelayTheme,
    mode: OutputMode,
    interactive: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(interactive: bool, mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            BelayTheme::new()
        } else {
            BelayTheme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
            interactive,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn command_output(&mut self, out: &str) {
        if self.mode.shows_command_output() {
            write!(self.term, "{}", out).ok();
            self.term.flush().ok();
        }
    }

    fn command_error(&mut self, err: &str) {
        eprint!("{}", err);
        std::io::stderr().flush().ok();
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.interactive && self.mode.shows_spinners() {
            Box::new(ProgressSpinner::new(message))
        } else {
            Box::new(ProgressSpinner::hidden())
        }
    }

    fn is_interactive(&self) -> bool {
        self.interactive && self.term.is_term()
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }
}

/// Create the UI for the current environment.
pub fn create_ui(interactive: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(TerminalUI::new(interactive && Term::stdout().is_term(), mode))
}
