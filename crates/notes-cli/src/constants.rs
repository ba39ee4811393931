//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, also used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// The list of notes is empty.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments (e.g. a bad note position).
    pub const INVALID_INPUT: i32 = 4;

    /// The notes file could not be read or written.
    pub const STORAGE_FAILED: i32 = 5;
}
