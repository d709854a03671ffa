//! Scored submission service
//!
//! Grades a submission against a problem's stored test cases (hidden ones
//! included), persists the record, bumps problem counters, and feeds the
//! scoring updater for authenticated, role-gated users. Persistence and
//! scoring failures are logged and swallowed; the computed verdict is
//! always returned.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::judge::{self, Execute, TestOutcome, TestSpec};
use crate::models::{Identity, Submission, Verdict};
use crate::scoring::ScoringService;
use crate::store::Store;

/// Scored submission request
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitRequest {
    /// Problem slug
    #[validate(length(min = 1, max = 256))]
    pub problem: String,

    /// Source code
    #[validate(length(min = 1, max = 1048576))]
    pub code: String,

    /// Declared language
    #[validate(length(min = 1, max = 20))]
    pub language: String,

    /// Authenticated caller, if any; anonymous submissions are graded and
    /// persisted but never scored
    pub identity: Option<Identity>,
}

/// Scored submission response
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub verdict: Verdict,
    pub passed: u32,
    pub total: u32,
    pub results: Vec<TestOutcome>,
}

/// Sample-run request against a problem's visible test cases
#[derive(Debug, Deserialize, Validate)]
pub struct RunSamplesRequest {
    #[validate(length(min = 1, max = 256))]
    pub problem: String,

    #[validate(length(min = 1, max = 1048576))]
    pub code: String,
}

/// Submission service for scored grading
pub struct SubmissionService;

impl SubmissionService {
    /// Grade and persist a submission against a problem's full test set.
    pub async fn submit<S: Store + ?Sized>(
        store: &S,
        executor: &dyn Execute,
        config: &Config,
        payload: SubmitRequest,
    ) -> AppResult<SubmitResponse> {
        payload.validate()?;

        let problem = store
            .find_by_slug(&payload.problem)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Problem not found: {}", payload.problem)))?;

        // Hidden test cases are included for scored submissions.
        let test_cases = store.test_cases(problem.id).await?;
        let specs: Vec<TestSpec> = test_cases.iter().map(TestSpec::from).collect();

        let outcome = judge::judge_submission(
            executor,
            &payload.code,
            &specs,
            config.judge.submit_timeout(),
        )
        .await;

        tracing::info!(
            problem = %problem.slug,
            verdict = %outcome.verdict,
            passed = outcome.passed,
            total = outcome.total,
            "submission graded"
        );

        let submission = Submission::new(
            problem.id,
            &problem.slug,
            &payload.code,
            &payload.language,
            outcome.verdict,
            outcome.passed,
            outcome.total,
            payload.identity.as_ref(),
        );

        // The verdict is already computed; persistence problems must not
        // withhold it from the caller.
        if let Err(e) = store.insert_submission(&submission).await {
            tracing::error!(submission_id = %submission.id, "failed to persist submission: {}", e);
        }
        if let Err(e) = store
            .record_result(problem.id, outcome.verdict.is_accepted())
            .await
        {
            tracing::error!(problem = %problem.slug, "failed to update problem counters: {}", e);
        }

        // NoTestCases submissions are persisted but never scored.
        let scorable = outcome.verdict != Verdict::NoTestCases;
        if let Some(identity) = payload.identity.as_ref().filter(|i| i.can_earn_score()) {
            if scorable {
                if let Err(e) = ScoringService::apply(
                    store,
                    identity.user_id,
                    &problem,
                    outcome.verdict,
                    Utc::now(),
                )
                .await
                {
                    tracing::error!(user_id = %identity.user_id, "failed to update progress: {}", e);
                }
            }
        }

        Ok(SubmitResponse {
            success: true,
            verdict: outcome.verdict,
            passed: outcome.passed,
            total: outcome.total,
            results: outcome.results,
        })
    }

    /// Run a problem's visible test cases only, for the try-run surface.
    /// Hidden cases are withheld; nothing is persisted or scored.
    pub async fn run_samples<S: Store + ?Sized>(
        store: &S,
        executor: &dyn Execute,
        config: &Config,
        payload: RunSamplesRequest,
    ) -> AppResult<SubmitResponse> {
        payload.validate()?;

        let problem = store
            .find_by_slug(&payload.problem)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Problem not found: {}", payload.problem)))?;

        let specs: Vec<TestSpec> = store
            .test_cases(problem.id)
            .await?
            .iter()
            .filter(|tc| !tc.hidden)
            .map(TestSpec::from)
            .collect();

        let outcome =
            judge::judge_submission(executor, &payload.code, &specs, config.judge.run_timeout())
                .await;

        Ok(SubmitResponse {
            success: true,
            verdict: outcome.verdict,
            passed: outcome.passed,
            total: outcome.total,
            results: outcome.results,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::roles;
    use crate::judge::{ExecutionResult, MockExecute};
    use crate::models::{Difficulty, Problem, TestCase};
    use crate::store::{MemoryStore, ProgressStore, SubmissionStore};
    use uuid::Uuid;

    fn test_config() -> Config {
        Config {
            judge: crate::config::JudgeConfig {
                interpreter: "node".into(),
                file_extension: "js".into(),
                scratch_dir: std::env::temp_dir(),
                run_timeout_ms: 1_000,
                submit_timeout_ms: 2_000,
            },
            rust_log: "info".into(),
        }
    }

    fn passing_executor() -> MockExecute {
        let mut mock = MockExecute::new();
        mock.expect_execute()
            .returning(|_, _| ExecutionResult::success("42".into(), None));
        mock
    }

    async fn seeded_store() -> (MemoryStore, Uuid) {
        let store = MemoryStore::new();
        let problem = Problem::new("answer", "The Answer", Difficulty::Easy);
        let pid = problem.id;
        let cases = vec![
            TestCase::new(pid, "[]", "42", false, 0),
            TestCase::new(pid, "[]", "42", true, 1),
        ];
        store.add_problem(problem, cases).await;
        (store, pid)
    }

    fn student() -> Identity {
        Identity {
            user_id: Uuid::new_v4(),
            username: "alice".into(),
            role: roles::STUDENT.into(),
        }
    }

    #[tokio::test]
    async fn test_submit_unknown_problem_is_rejected_before_execution() {
        let store = MemoryStore::new();
        let executor = MockExecute::new(); // would panic if executed
        let err = SubmissionService::submit(
            &store,
            &executor,
            &test_config(),
            SubmitRequest {
                problem: "missing".into(),
                code: "function f() {}".into(),
                language: "javascript".into(),
                identity: None,
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_submit_includes_hidden_cases_and_persists() {
        let (store, pid) = seeded_store().await;
        let identity = student();
        let executor = passing_executor();

        let response = SubmissionService::submit(
            &store,
            &executor,
            &test_config(),
            SubmitRequest {
                problem: "answer".into(),
                code: "function answer() { return 42; }".into(),
                language: "javascript".into(),
                identity: Some(identity.clone()),
            },
        )
        .await
        .unwrap();

        assert!(response.success);
        assert_eq!(response.verdict, Verdict::Accepted);
        assert_eq!(response.total, 2); // hidden case included

        let history = store.submissions_for_user(identity.user_id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].verdict, Verdict::Accepted);

        let problem = store.problem(pid).await.unwrap();
        assert_eq!(problem.submission_count, 1);
        assert_eq!(problem.accepted_count, 1);

        let progress = store.progress(identity.user_id).await.unwrap();
        assert_eq!(progress.solved, 1);
        assert_eq!(progress.score, 10);
        assert_eq!(progress.streak, 1);
    }

    #[tokio::test]
    async fn test_anonymous_submit_skips_scoring() {
        let (store, pid) = seeded_store().await;
        let executor = passing_executor();

        let response = SubmissionService::submit(
            &store,
            &executor,
            &test_config(),
            SubmitRequest {
                problem: "answer".into(),
                code: "function answer() { return 42; }".into(),
                language: "javascript".into(),
                identity: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(response.verdict, Verdict::Accepted);
        let problem = store.problem(pid).await.unwrap();
        assert_eq!(problem.submission_count, 1);
    }

    #[tokio::test]
    async fn test_admin_submit_skips_scoring() {
        let (store, _) = seeded_store().await;
        let executor = passing_executor();
        let admin = Identity {
            user_id: Uuid::new_v4(),
            username: "root".into(),
            role: roles::ADMIN.into(),
        };

        SubmissionService::submit(
            &store,
            &executor,
            &test_config(),
            SubmitRequest {
                problem: "answer".into(),
                code: "function answer() { return 42; }".into(),
                language: "javascript".into(),
                identity: Some(admin.clone()),
            },
        )
        .await
        .unwrap();

        let progress = store.progress(admin.user_id).await.unwrap();
        assert_eq!(progress.total_submissions, 0);
        assert_eq!(progress.score, 0);
    }

    #[tokio::test]
    async fn test_no_test_cases_verdict_not_scored() {
        let store = MemoryStore::new();
        let problem = Problem::new("empty", "Empty", Difficulty::Hard);
        store.add_problem(problem, vec![]).await;
        let identity = student();
        let executor = MockExecute::new();

        let response = SubmissionService::submit(
            &store,
            &executor,
            &test_config(),
            SubmitRequest {
                problem: "empty".into(),
                code: "function f() {}".into(),
                language: "javascript".into(),
                identity: Some(identity.clone()),
            },
        )
        .await
        .unwrap();

        assert_eq!(response.verdict, Verdict::NoTestCases);

        // Persisted but not scored.
        let history = store.submissions_for_user(identity.user_id).await.unwrap();
        assert_eq!(history.len(), 1);
        let progress = store.progress(identity.user_id).await.unwrap();
        assert_eq!(progress.total_submissions, 0);
    }

    #[tokio::test]
    async fn test_run_samples_excludes_hidden_cases() {
        let (store, _) = seeded_store().await;
        let executor = passing_executor();

        let response = SubmissionService::run_samples(
            &store,
            &executor,
            &test_config(),
            RunSamplesRequest {
                problem: "answer".into(),
                code: "function answer() { return 42; }".into(),
            },
        )
        .await
        .unwrap();

        assert_eq!(response.total, 1); // hidden case withheld
    }
}
