//! Output mode routing logic.

use crate::cli::OutputFormat;

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain `key=value` text, stable for scripts
    #[default]
    Plain,
    /// Human-friendly tables and badges (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from flags and environment.
    ///
    /// `--json` wins over everything, then `--format plain`, then `TERM=dumb`.
    /// Otherwise the mode is pretty on a TTY and plain elsewhere.
    pub fn resolve(
        json_flag: bool,
        format: Option<OutputFormat>,
        is_tty: bool,
        term_is_dumb: bool,
    ) -> Self {
        if json_flag {
            return Self::Json;
        }
        if format == Some(OutputFormat::Plain) || term_is_dumb {
            return Self::Plain;
        }
        if is_tty {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    /// Check if this mode should output JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    /// Check if this mode should output pretty (human) format.
    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_exclusive() {
        let mode = OutputMode::resolve(true, Some(OutputFormat::Plain), true, false);
        assert_eq!(mode, OutputMode::Json);
    }

    #[test]
    fn test_plain_forces() {
        let mode = OutputMode::resolve(false, Some(OutputFormat::Plain), true, false);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_term_dumb_forces_plain() {
        let mode = OutputMode::resolve(false, None, true, true);
        assert_eq!(mode, OutputMode::Plain);
    }

    #[test]
    fn test_table_on_tty_is_pretty() {
        let mode = OutputMode::resolve(false, Some(OutputFormat::Table), true, false);
        assert_eq!(mode, OutputMode::Pretty);
    }

    #[test]
    fn test_non_tty_gets_plain() {
        let mode = OutputMode::resolve(false, None, false, false);
        assert_eq!(mode, OutputMode::Plain);
    }
}
