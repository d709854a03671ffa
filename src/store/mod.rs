//! Storage traits and backends
//!
//! The grading core persists submissions and aggregates through these
//! narrow traits; real database backends live with the surrounding
//! platform and implement the same interfaces. The in-memory store is the
//! reference backing for tests and the CLI.

mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Problem, Submission, TestCase, UserProgress};

pub use memory::MemoryStore;

/// Problem lookup and aggregate counters
#[async_trait]
pub trait ProblemStore: Send + Sync {
    /// Find a problem by its slug
    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Problem>>;

    /// All test cases for a problem, in order, hidden ones included
    async fn test_cases(&self, problem_id: Uuid) -> AppResult<Vec<TestCase>>;

    /// Bump the problem's submission counter, and its accepted counter when
    /// the verdict was an acceptance
    async fn record_result(&self, problem_id: Uuid, accepted: bool) -> AppResult<()>;
}

/// Submission history
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Persist an immutable submission record
    async fn insert_submission(&self, submission: &Submission) -> AppResult<()>;

    /// Submissions made by one user, newest first
    async fn submissions_for_user(&self, user_id: Uuid) -> AppResult<Vec<Submission>>;

    /// Count accepted submissions by a user for one problem
    async fn count_accepted(&self, user_id: Uuid, problem_id: Uuid) -> AppResult<u64>;
}

/// Per-user progress aggregates
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Load a user's progress, or a fresh aggregate if none exists yet
    async fn progress(&self, user_id: Uuid) -> AppResult<UserProgress>;

    /// Persist a user's progress aggregate
    async fn save_progress(&self, progress: &UserProgress) -> AppResult<()>;

    /// Atomically record a first-time solve for `(user, problem)`.
    ///
    /// Returns `true` exactly once per pair; concurrent callers cannot both
    /// observe "not yet solved".
    async fn try_mark_solved(&self, user_id: Uuid, problem_id: Uuid) -> AppResult<bool>;
}

/// Combined storage interface used by the submission service
pub trait Store: ProblemStore + SubmissionStore + ProgressStore {}

impl<T: ProblemStore + SubmissionStore + ProgressStore> Store for T {}
