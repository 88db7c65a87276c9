//! Visual theme and styling.

use console::Style;

/// Belay's visual theme.
#[derive(Debug, Clone)]
pub struct BelayTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for key labels in key-value displays (bold).
    pub key: Style,
    /// Style for values in key-value displays (normal).
    pub value: Style,
}

impl Default for BelayTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl BelayTheme {
    /// Create the default Belay theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            key: Style::new().bold(),
            value: Style::new(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            key: Style::new(),
            value: Style::new(),
        }
    }

    /// Format a success message with its icon.
    pub fn format_success(&self, msg: &str) -> String {
        format!("{} {}", self.success.apply_to("✓"), msg)
    }

    /// Format a warning message with its icon.
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{} {}", self.warning.apply_to("⚠"), msg)
    }

    /// Format an error message with its icon.
    pub fn format_error(&self, msg: &str) -> String {
        format!("{} {}", self.error.apply_to("✗"), msg)
    }

    /// Format a header line.
    pub fn format_header(&self, title: &str) -> String {
        self.header.apply_to(title).to_string()
    }

    /// Format a key-value status line.
    pub fn format_key_value(&self, key: &str, value: &str) -> String {
        format!(
            "{:<10} {}",
            self.key.apply_to(key),
            self.value.apply_to(value)
        )
    }
}

/// Whether colored output should be used.
///
/// Honors the `NO_COLOR` convention and falls back to terminal detection.
pub fn should_use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_matches_new() {
        let theme = BelayTheme::default();
        let explicit = BelayTheme::new();
        assert_eq!(
            theme.format_success("ok"),
            explicit.format_success("ok")
        );
    }

    #[test]
    fn plain_theme_has_no_ansi_codes() {
        let theme = BelayTheme::plain();
        let formatted = theme.format_success("done");
        assert_eq!(formatted, "✓ done");
    }

    #[test]
    fn format_warning_includes_message() {
        let theme = BelayTheme::plain();
        assert!(theme.format_warning("careful").contains("careful"));
    }

    #[test]
    fn format_error_includes_message() {
        let theme = BelayTheme::plain();
        assert!(theme.format_error("boom").contains("boom"));
    }

    #[test]
    fn format_key_value_aligns_key() {
        let theme = BelayTheme::plain();
        let line = theme.format_key_value("Status", "ready");
        assert!(line.starts_with("Status"));
        assert!(line.contains("ready"));
    }
}
