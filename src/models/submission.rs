//! Submission model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Identity;

/// Submission verdict enum
///
/// Timeouts and runtime errors fold into `WrongAnswer`; the per-test
/// diagnostic text carries the distinction for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Accepted,
    WrongAnswer,
    NoTestCases,
}

impl Verdict {
    /// Get verdict as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accepted => "Accepted",
            Self::WrongAnswer => "WrongAnswer",
            Self::NoTestCases => "NoTestCases",
        }
    }

    /// Parse verdict from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Accepted" => Some(Self::Accepted),
            "WrongAnswer" => Some(Self::WrongAnswer),
            "NoTestCases" => Some(Self::NoTestCases),
            _ => None,
        }
    }

    /// Check if this verdict means the solution was accepted
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Submission record
///
/// Immutable once created; retained indefinitely for history and audit.
/// `user_id` is `None` for anonymous run actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: Uuid,
    pub problem_id: Uuid,
    pub problem_slug: String,
    #[serde(skip_serializing)]
    pub code: String,
    pub language: String,
    pub verdict: Verdict,
    pub passed: u32,
    pub total: u32,
    pub user_id: Option<Uuid>,
    pub username: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Submission {
    /// Create a new submission record from a grading outcome
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        problem_id: Uuid,
        problem_slug: impl Into<String>,
        code: impl Into<String>,
        language: impl Into<String>,
        verdict: Verdict,
        passed: u32,
        total: u32,
        identity: Option<&Identity>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            problem_id,
            problem_slug: problem_slug.into(),
            code: code.into(),
            language: language.into(),
            verdict,
            passed,
            total,
            user_id: identity.map(|i| i.user_id),
            username: identity.map(|i| i.username.clone()),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_round_trip() {
        for v in [Verdict::Accepted, Verdict::WrongAnswer, Verdict::NoTestCases] {
            assert_eq!(Verdict::from_str(v.as_str()), Some(v));
        }
        assert_eq!(Verdict::from_str("Pending"), None);
    }

    #[test]
    fn test_anonymous_submission_has_no_identity() {
        let s = Submission::new(
            Uuid::new_v4(),
            "two-sum",
            "function twoSum() {}",
            "javascript",
            Verdict::WrongAnswer,
            0,
            3,
            None,
        );
        assert!(s.user_id.is_none());
        assert!(s.username.is_none());
    }
}
