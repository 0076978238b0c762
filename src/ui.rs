//! Centralized UI formatting and color utilities
//!
//! Icons, colors and small text helpers shared by the droidlint CLI output.

use colored::{ColoredString, Colorize};

/// Check if quiet mode is enabled via environment variable or --quiet flag
pub fn is_quiet() -> bool {
    std::env::var("DROIDLINT_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns a colored icon for a rule or document outcome.
///
/// - passed: ✓ (green)
/// - failed: ✗ (red)
pub fn outcome_icon(passed: bool) -> ColoredString {
    if passed {
        "✓".green()
    } else {
        "✗".red()
    }
}

/// Color scheme for status-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for success
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Red for errors/failures
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers (document ids, categories)
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Truncate text to `max_len` characters, marking the cut with `...`
    pub fn truncate(text: &str, max_len: usize) -> String {
        if text.chars().count() <= max_len {
            text.to_string()
        } else {
            let kept: String = text.chars().take(max_len.saturating_sub(3)).collect();
            format!("{}...", kept)
        }
    }

    /// Format a separator line for sections
    pub fn separator(width: usize) -> String {
        "━".repeat(width)
    }

    /// `1 document`, `2 documents`
    pub fn plural(count: usize, word: &str) -> String {
        if count == 1 {
            format!("{} {}", count, word)
        } else {
            format!("{} {}s", count, word)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_outcome_icon() {
        assert!(outcome_icon(true).to_string().contains('✓'));
        assert!(outcome_icon(false).to_string().contains('✗'));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(format::truncate("short", 10), "short");
        assert_eq!(format::truncate("exactly ten", 11), "exactly ten");
        assert_eq!(
            format::truncate("this is a very long detail", 10),
            "this is..."
        );
    }

    #[test]
    fn test_separator() {
        assert_eq!(format::separator(5), "━━━━━");
    }

    #[test]
    fn test_plural() {
        assert_eq!(format::plural(1, "document"), "1 document");
        assert_eq!(format::plural(0, "failure"), "0 failures");
        assert_eq!(format::plural(3, "rule"), "3 rules");
    }

    #[test]
    #[serial]
    fn test_is_quiet_from_env() {
        std::env::set_var("DROIDLINT_QUIET", "true");
        assert!(is_quiet());
        std::env::set_var("DROIDLINT_QUIET", "0");
        assert!(!is_quiet());
        std::env::remove_var("DROIDLINT_QUIET");
        assert!(!is_quiet());
    }
}
