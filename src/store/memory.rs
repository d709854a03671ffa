//! In-memory storage backend

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{Problem, Submission, TestCase, UserProgress};

use super::{ProblemStore, ProgressStore, SubmissionStore};

#[derive(Default)]
struct Inner {
    problems: HashMap<Uuid, Problem>,
    slugs: HashMap<String, Uuid>,
    test_cases: HashMap<Uuid, Vec<TestCase>>,
    submissions: Vec<Submission>,
    progress: HashMap<Uuid, UserProgress>,
    solved: HashSet<(Uuid, Uuid)>,
}

/// In-memory store backing tests and the CLI
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a problem together with its test cases
    pub async fn add_problem(&self, problem: Problem, test_cases: Vec<TestCase>) {
        let mut inner = self.inner.lock().await;
        inner.slugs.insert(problem.slug.clone(), problem.id);
        inner.test_cases.insert(problem.id, test_cases);
        inner.problems.insert(problem.id, problem);
    }

    /// Look up a problem by id (test/CLI convenience)
    pub async fn problem(&self, problem_id: Uuid) -> Option<Problem> {
        self.inner.lock().await.problems.get(&problem_id).cloned()
    }
}

#[async_trait]
impl ProblemStore for MemoryStore {
    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Problem>> {
        let inner = self.inner.lock().await;
        Ok(inner
            .slugs
            .get(slug)
            .and_then(|id| inner.problems.get(id))
            .cloned())
    }

    async fn test_cases(&self, problem_id: Uuid) -> AppResult<Vec<TestCase>> {
        let inner = self.inner.lock().await;
        let mut cases = inner
            .test_cases
            .get(&problem_id)
            .cloned()
            .unwrap_or_default();
        cases.sort_by_key(|tc| tc.order);
        Ok(cases)
    }

    async fn record_result(&self, problem_id: Uuid, accepted: bool) -> AppResult<()> {
        let mut inner = self.inner.lock().await;
        if let Some(problem) = inner.problems.get_mut(&problem_id) {
            problem.submission_count += 1;
            if accepted {
                problem.accepted_count += 1;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn insert_submission(&self, submission: &Submission) -> AppResult<()> {
        self.inner.lock().await.submissions.push(submission.clone());
        Ok(())
    }

    async fn submissions_for_user(&self, user_id: Uuid) -> AppResult<Vec<Submission>> {
        let inner = self.inner.lock().await;
        let mut found: Vec<Submission> = inner
            .submissions
            .iter()
            .filter(|s| s.user_id == Some(user_id))
            .cloned()
            .collect();
        found.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(found)
    }

    async fn count_accepted(&self, user_id: Uuid, problem_id: Uuid) -> AppResult<u64> {
        let inner = self.inner.lock().await;
        Ok(inner
            .submissions
            .iter()
            .filter(|s| {
                s.user_id == Some(user_id)
                    && s.problem_id == problem_id
                    && s.verdict.is_accepted()
            })
            .count() as u64)
    }
}

#[async_trait]
impl ProgressStore for MemoryStore {
    async fn progress(&self, user_id: Uuid) -> AppResult<UserProgress> {
        let inner = self.inner.lock().await;
        Ok(inner
            .progress
            .get(&user_id)
            .cloned()
            .unwrap_or_else(|| UserProgress::new(user_id)))
    }

    async fn save_progress(&self, progress: &UserProgress) -> AppResult<()> {
        self.inner
            .lock()
            .await
            .progress
            .insert(progress.user_id, progress.clone());
        Ok(())
    }

    async fn try_mark_solved(&self, user_id: Uuid, problem_id: Uuid) -> AppResult<bool> {
        // Single check-and-set under one lock, so two concurrent accepted
        // submissions cannot both claim the first solve.
        Ok(self.inner.lock().await.solved.insert((user_id, problem_id)))
    }
}
