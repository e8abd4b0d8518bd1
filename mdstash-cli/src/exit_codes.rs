//! Exit codes used by the mdstash CLI

/// Command completed successfully
pub const EXIT_SUCCESS: i32 = 0;

/// Command completed with warnings or stopped unexpectedly
pub const EXIT_WARNING: i32 = 1;

/// Command failed to start or encountered a critical error
pub const EXIT_ERROR: i32 = 2;
