//! Scoring and streak updates
//!
//! Turns a persisted verdict into durable per-user progress: submission
//! counters, first-time-solve credit, cumulative score, and the
//! calendar-day streak. Only invoked for authenticated, role-gated
//! submissions; scoring failures are logged and swallowed by the caller so
//! the already-computed verdict always reaches the user.

use chrono::{DateTime, Utc};

use crate::error::AppResult;
use crate::models::{Problem, UserProgress, Verdict};
use crate::store::ProgressStore;
use uuid::Uuid;

/// Scoring service for progress aggregates
pub struct ScoringService;

impl ScoringService {
    /// Apply one submission's outcome to the owning user's progress.
    ///
    /// The total-submissions counter moves on every submission; accepted
    /// counters, solve credit, score, and streak move only on `Accepted`.
    /// First-time-solve detection is a single atomic check-and-set on the
    /// store, keyed by `(user, problem)`.
    pub async fn apply<S: ProgressStore + ?Sized>(
        store: &S,
        user_id: Uuid,
        problem: &Problem,
        verdict: Verdict,
        now: DateTime<Utc>,
    ) -> AppResult<UserProgress> {
        let mut progress = store.progress(user_id).await?;
        progress.total_submissions += 1;

        if verdict.is_accepted() {
            progress.accepted_submissions += 1;

            if store.try_mark_solved(user_id, problem.id).await? {
                progress.credit_solve(problem.difficulty);
                tracing::info!(
                    %user_id,
                    problem = %problem.slug,
                    difficulty = %problem.difficulty,
                    score = progress.score,
                    "first-time solve credited"
                );
            }

            progress.advance_streak(now.date_naive());
        }

        store.save_progress(&progress).await?;
        Ok(progress)
    }
}
