//! Visual theme and styling.

use console::Style;

/// Muster's visual theme.
#[derive(Debug, Clone)]
pub struct MusterTheme {
    /// Style for passing checks (green).
    pub pass: Style,
    /// Style for advisory warnings (orange).
    pub warn: Style,
    /// Style for failing checks (red bold).
    pub fail: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for key labels in the summary (bold).
    pub key: Style,
    /// Style for durations and timestamps (dim).
    pub duration: Style,
    /// Style for box-drawing borders (dim).
    pub border: Style,
}

impl Default for MusterTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl MusterTheme {
    /// Create the default Muster theme.
    pub fn new() -> Self {
        Self {
            pass: Style::new().green(),
            warn: Style::new().color256(208),
            fail: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            key: Style::new().bold(),
            duration: Style::new().dim(),
            border: Style::new().dim(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            pass: Style::new(),
            warn: Style::new(),
            fail: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            key: Style::new(),
            duration: Style::new(),
            border: Style::new(),
        }
    }

    /// Format a passing check line (icon + status in green).
    pub fn format_pass(&self, name: &str) -> String {
        format!("{} {}", self.pass.apply_to("✓ PASS"), name)
    }

    /// Format a failing check line (icon + status in red bold).
    pub fn format_fail(&self, name: &str) -> String {
        format!("{} {}", self.fail.apply_to("✗ FAIL"), name)
    }

    /// Format an advisory warning line (icon + status in orange).
    pub fn format_warn(&self, name: &str) -> String {
        format!("{} {}", self.warn.apply_to("⚠ WARN"), name)
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_pass() {
        let theme = MusterTheme::plain();
        let msg = theme.format_pass("Python version");
        assert!(msg.contains("✓ PASS"));
        assert!(msg.contains("Python version"));
    }

    #[test]
    fn theme_formats_fail() {
        let theme = MusterTheme::plain();
        let msg = theme.format_fail("API credential");
        assert!(msg.contains("✗ FAIL"));
        assert!(msg.contains("API credential"));
    }

    #[test]
    fn theme_formats_warn() {
        let theme = MusterTheme::plain();
        let msg = theme.format_warn("Git status");
        assert!(msg.contains("⚠ WARN"));
        assert!(msg.contains("Git status"));
    }

    #[test]
    fn theme_formats_header() {
        let theme = MusterTheme::plain();
        assert!(theme.format_header("Muster").contains("Muster"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = MusterTheme::default();
        let new = MusterTheme::new();
        assert_eq!(default.format_pass("test"), new.format_pass("test"));
    }

    #[test]
    fn plain_theme_creates_without_panic() {
        let theme = MusterTheme::plain();
        let _ = theme.key.apply_to("Passed:");
        let _ = theme.duration.apply_to("1.2s");
        let _ = theme.border.apply_to("─");
    }
}
