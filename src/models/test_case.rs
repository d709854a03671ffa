//! Test case model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Test case model
///
/// Hidden test cases are withheld from ad-hoc "try run" displays but always
/// included when scoring a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestCase {
    pub id: Uuid,
    pub problem_id: Uuid,
    /// Serialized input, usually a JSON value or array of arguments
    pub input: String,
    /// Serialized expected output
    pub expected_output: String,
    pub hidden: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
}

impl TestCase {
    /// Create a new test case for a problem
    pub fn new(
        problem_id: Uuid,
        input: impl Into<String>,
        expected_output: impl Into<String>,
        hidden: bool,
        order: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            problem_id,
            input: input.into(),
            expected_output: expected_output.into(),
            hidden,
            order,
            created_at: Utc::now(),
        }
    }

    /// Get a preview of the input (truncated)
    pub fn input_preview(&self, max_len: usize) -> String {
        if self.input.len() <= max_len {
            self.input.clone()
        } else {
            format!("{}...", &self.input[..max_len])
        }
    }
}
