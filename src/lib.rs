//! SkillJudge - Grading core for a learning platform
//!
//! This library implements the judge feature of a learning platform: it
//! accepts submitted source code plus input/expected-output pairs, executes
//! the code in isolated child processes, compares outputs, and turns
//! verdicts into durable per-user progress and streaks.
//!
//! # Architecture
//!
//! The crate follows a layered architecture:
//! - **Services**: the narrow operations the platform layer calls
//!   (ad-hoc run, bulk test run, scored submission)
//! - **Judge**: harness synthesis, sandboxed execution, output comparison,
//!   verdict aggregation
//! - **Scoring**: counters, first-time-solve credit, calendar-day streaks
//! - **Store**: trait-based persistence with an in-memory reference backend
//! - **Models**: domain models and DTOs

pub mod config;
pub mod constants;
pub mod error;
pub mod judge;
pub mod models;
pub mod scoring;
pub mod services;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use judge::{Execute, ExecutionResult, JudgeOutcome, ProcessExecutor};
pub use models::Verdict;
