//! Ad-hoc and bulk run service
//!
//! Unscored operations: run a free-standing script, or grade code against
//! caller-supplied test cases without persisting anything.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::Config;
use crate::error::AppResult;
use crate::judge::{self, Execute, TestOutcome, TestSpec};

/// Ad-hoc run request
#[derive(Debug, Deserialize, Validate)]
pub struct RunCodeRequest {
    /// Source code to execute as a free-standing script
    #[validate(length(min = 1, max = 1048576))]
    pub code: String,
}

/// Ad-hoc run response
#[derive(Debug, Serialize)]
pub struct RunCodeResponse {
    pub stdout: String,
    pub error: Option<String>,
}

/// One caller-supplied test case for a bulk run
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TestCaseInput {
    #[validate(length(max = 1048576))]
    pub input: String,
    #[validate(length(max = 1048576))]
    pub expected_output: String,
}

/// Bulk test run request
#[derive(Debug, Deserialize, Validate)]
pub struct RunTestsRequest {
    #[validate(length(min = 1, max = 1048576))]
    pub code: String,
    #[validate(length(min = 1), nested)]
    pub test_cases: Vec<TestCaseInput>,
}

/// Bulk test run response; the verdict bucket is deliberately absent
#[derive(Debug, Serialize)]
pub struct RunTestsResponse {
    pub passed: u32,
    pub total: u32,
    pub results: Vec<TestOutcome>,
}

/// Run service for unscored executions
pub struct RunService;

impl RunService {
    /// Execute submitted code as a free-standing script with the shorter
    /// ad-hoc timeout. The code reads no input and prints its own output.
    pub async fn run_code(
        executor: &dyn Execute,
        config: &Config,
        payload: RunCodeRequest,
    ) -> AppResult<RunCodeResponse> {
        payload.validate()?;

        tracing::debug!(bytes = payload.code.len(), "ad-hoc run");
        let result = executor
            .execute(&payload.code, config.judge.run_timeout())
            .await;

        Ok(RunCodeResponse {
            stdout: result.stdout,
            error: result.error,
        })
    }

    /// Grade code against caller-supplied test cases. Nothing is persisted
    /// and no verdict bucket is reported, only per-test results.
    pub async fn run_tests(
        executor: &dyn Execute,
        config: &Config,
        payload: RunTestsRequest,
    ) -> AppResult<RunTestsResponse> {
        payload.validate()?;

        let specs: Vec<TestSpec> = payload
            .test_cases
            .into_iter()
            .map(|tc| TestSpec {
                input: tc.input,
                expected_output: tc.expected_output,
            })
            .collect();

        let outcome =
            judge::judge_submission(executor, &payload.code, &specs, config.judge.run_timeout())
                .await;

        Ok(RunTestsResponse {
            passed: outcome.passed,
            total: outcome.total,
            results: outcome.results,
        })
    }
}
