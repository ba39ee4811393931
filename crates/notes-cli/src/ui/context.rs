//! UI context for environment detection and configuration.

use std::io::IsTerminal;

use super::mode::OutputMode;
use crate::cli::OutputFormat;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Terminal width (columns)
    pub width: usize,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and CLI flags.
    ///
    /// Color is disabled by `--no-color`, `NO_COLOR`, `TERM=dumb`, or a
    /// non-TTY stdout. Unicode is disabled by `--ascii`.
    pub fn from_env(
        json_flag: bool,
        format: Option<OutputFormat>,
        no_color_flag: bool,
        ascii_flag: bool,
    ) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        Self {
            color: is_tty && !no_color_flag && !no_color_env && !term_is_dumb,
            unicode: !ascii_flag,
            width: terminal_width().unwrap_or(80),
            mode: OutputMode::resolve(json_flag, format, is_tty, term_is_dumb),
        }
    }
}

/// Get terminal width from `COLUMNS` or the tty itself.
fn terminal_width() -> Option<usize> {
    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 {
                return Some(width);
            }
        }
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ only writes into the provided winsize struct
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            // SAFETY: ioctl returned success, so winsize was initialized
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_from_flag() {
        let ctx = UiContext::from_env(true, None, false, false);
        assert_eq!(ctx.mode, OutputMode::Json);
    }

    #[test]
    fn test_ascii_disables_unicode() {
        let ctx = UiContext::from_env(false, None, false, true);
        assert!(!ctx.unicode);
    }

    #[test]
    fn test_no_color_disables_color() {
        let ctx = UiContext::from_env(false, None, true, false);
        assert!(!ctx.color);
    }

    #[test]
    fn test_width_has_default() {
        let ctx = UiContext::from_env(false, None, false, false);
        assert!(ctx.width > 0);
    }
}
