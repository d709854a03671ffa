//! Application-wide constants
//!
//! This module contains all constant values used throughout the grading core.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// EXECUTION DEFAULTS
// =============================================================================

/// Default interpreter binary for submitted code
pub const DEFAULT_INTERPRETER: &str = "node";

/// File extension for staged submission programs
pub const DEFAULT_FILE_EXTENSION: &str = "js";

/// Timeout for ad-hoc "run code" executions, in milliseconds
pub const DEFAULT_RUN_TIMEOUT_MS: u64 = 3_000;

/// Timeout per test case for scored submissions, in milliseconds
pub const DEFAULT_SUBMIT_TIMEOUT_MS: u64 = 5_000;

// =============================================================================
// SCORING
// =============================================================================

/// Points awarded per problem difficulty on a first-time solve
pub mod points {
    pub const EASY: u32 = 10;
    pub const MEDIUM: u32 = 20;
    pub const HARD: u32 = 30;

    /// Fallback when a problem carries an unknown difficulty
    pub const DEFAULT: u32 = 10;
}

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const STUDENT: &str = "student";
    pub const INSTRUCTOR: &str = "instructor";
    pub const ADMIN: &str = "admin";

    /// All user roles
    pub const ALL: &[&str] = &[STUDENT, INSTRUCTOR, ADMIN];
}

// =============================================================================
// DIAGNOSTICS
// =============================================================================

/// Diagnostic strings attached to failing test results
pub mod diagnostics {
    /// Attached when the process is killed for exceeding its timeout
    pub const TIME_LIMIT_EXCEEDED: &str = "Time limit exceeded";

    /// Prefix distinguishing execution-layer failures from plain mismatches
    pub const RUNTIME_ERROR_PREFIX: &str = "Runtime error: ";
}

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum source code size in bytes (1 MB)
pub const MAX_SOURCE_CODE_SIZE: u64 = 1024 * 1024;

/// Maximum test case input size in bytes (1 MB)
pub const MAX_TEST_CASE_INPUT_SIZE: u64 = 1024 * 1024;

/// Maximum language identifier length
pub const MAX_LANGUAGE_LENGTH: u64 = 20;
