//! Verdict aggregation
//!
//! Runs harness synthesis, sandboxed execution, and output comparison for
//! every test case of a submission in order, then reduces to one verdict.
//! Evaluation is strictly sequential and never short-circuits, so callers
//! can always display full per-test diagnostics.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::judge::{comparator, harness, Execute};
use crate::models::{TestCase, Verdict};

/// One input/expected-output pair to grade against
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestSpec {
    pub input: String,
    pub expected_output: String,
}

impl From<&TestCase> for TestSpec {
    fn from(tc: &TestCase) -> Self {
        Self {
            input: tc.input.clone(),
            expected_output: tc.expected_output.clone(),
        }
    }
}

/// Per-test grading result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestOutcome {
    pub input: String,
    pub expected_output: String,
    pub actual_output: String,
    pub passed: bool,
    /// Execution-layer diagnostic (runtime error or time limit), if any
    pub error: Option<String>,
}

/// Aggregated grading outcome for one submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeOutcome {
    pub verdict: Verdict,
    pub passed: u32,
    pub total: u32,
    pub results: Vec<TestOutcome>,
}

/// Grade submitted code against an ordered list of test cases.
///
/// The verdict is a pure function of the source text, the test cases, and
/// runtime behavior at execution time; no test case or problem data is
/// mutated here.
pub async fn judge_submission<E: Execute + ?Sized>(
    executor: &E,
    code: &str,
    test_cases: &[TestSpec],
    timeout: Duration,
) -> JudgeOutcome {
    let total = test_cases.len() as u32;
    let mut passed = 0u32;
    let mut results = Vec::with_capacity(test_cases.len());

    for case in test_cases {
        let program = harness::synthesize(code, &case.input);
        let execution = executor.execute(&program, timeout).await;

        let comparison = comparator::compare(&execution.stdout, &case.expected_output);
        let case_passed = execution.succeeded() && comparison.passed;
        if case_passed {
            passed += 1;
        }

        results.push(TestOutcome {
            input: case.input.clone(),
            expected_output: comparison.expected,
            actual_output: comparison.actual,
            passed: case_passed,
            error: execution.error,
        });
    }

    let verdict = if total == 0 {
        Verdict::NoTestCases
    } else if passed == total {
        Verdict::Accepted
    } else {
        Verdict::WrongAnswer
    };

    tracing::debug!(%verdict, passed, total, "submission judged");

    JudgeOutcome {
        verdict,
        passed,
        total,
        results,
    }
}
