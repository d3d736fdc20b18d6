//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success (including a user-chosen exit from the menu)
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Config file named explicitly but missing.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Access gate rejected the password.
    pub const AUTH_FAILED: i32 = 5;
}

/// Width of a rendered `dd.mm.yyyy` date, used as the blank placeholder.
pub const DATE_WIDTH: usize = 10;

/// Notes shown per page when listing a collection.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Environment variable holding the access password.
pub const PASSWORD_ENV: &str = "NOTESTOOL_PASSWORD";

/// Environment variable enabling file logging at the given level.
pub const LOG_ENV: &str = "NOTESTOOL_LOG";
