//! Exit code constants for CLI commands
//!
//! These constants define the standard exit codes used throughout the application:
//! - 0: Success
//! - 1: The tool reported an error, or the server failed while running
//! - 2: Missing configuration or invalid command-line input

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Tool error response or server failure
pub const EXIT_FAILURE: i32 = 1;

/// Configuration or usage error
pub const EXIT_CONFIG_ERROR: i32 = 2;
