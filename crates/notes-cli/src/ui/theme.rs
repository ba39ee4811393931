//! Theme definitions for colors and badges.

use owo_colors::{OwoColorize, Style};

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
    Info,
}

impl Badge {
    /// Get badge text (e.g., "[OK]")
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Err => "[ERR]",
            Self::Info => "[INFO]",
        }
    }

    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        if !unicode {
            return self.text();
        }
        match self {
            Self::Ok => "[\u{2713}]",   // [✓]
            Self::Warn => "[\u{26A0}]", // [⚠]
            Self::Err => "[\u{2717}]",  // [✗]
            Self::Info => "[\u{2139}]", // [ℹ]
        }
    }

    /// Color used for this badge.
    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::ok(),
            Self::Warn => styles::warn(),
            Self::Err => styles::err(),
            Self::Info => styles::info(),
        }
    }
}

/// Named styles shared by the renderers.
pub mod styles {
    use owo_colors::Style;

    /// Labels and metadata
    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    /// Titles and values
    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn ok() -> Style {
        Style::new().green()
    }

    pub fn warn() -> Style {
        Style::new().yellow()
    }

    pub fn err() -> Style {
        Style::new().red()
    }

    pub fn info() -> Style {
        Style::new().cyan()
    }
}

/// Apply a style when color is enabled, otherwise return the text unchanged.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_text() {
        assert_eq!(Badge::Ok.text(), "[OK]");
        assert_eq!(Badge::Warn.text(), "[WARN]");
        assert_eq!(Badge::Err.text(), "[ERR]");
        assert_eq!(Badge::Info.text(), "[INFO]");
    }

    #[test]
    fn test_badge_display_ascii() {
        assert_eq!(Badge::Err.display(false), "[ERR]");
    }

    #[test]
    fn test_badge_display_unicode() {
        assert_eq!(Badge::Ok.display(true), "[\u{2713}]");
    }

    #[test]
    fn test_styled_without_color_is_plain() {
        assert_eq!(styled("hello", styles::bold(), false), "hello");
    }

    #[test]
    fn test_styled_with_color_adds_escape_codes() {
        let out = styled("hello", styles::ok(), true);
        assert!(out.contains("hello"));
        assert!(out.contains('\u{1b}'));
    }
}
