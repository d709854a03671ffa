//! Problem model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::points;

/// Problem difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Get difficulty as string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parse difficulty from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "easy" => Some(Self::Easy),
            "medium" => Some(Self::Medium),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }

    /// Points credited on a first-time solve at this difficulty
    pub fn points(&self) -> u32 {
        match self {
            Self::Easy => points::EASY,
            Self::Medium => points::MEDIUM,
            Self::Hard => points::HARD,
        }
    }

    /// Points for a difficulty string, falling back to the default for
    /// unknown values
    pub fn points_for(s: &str) -> u32 {
        Self::from_str(s).map(|d| d.points()).unwrap_or(points::DEFAULT)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Problem model
///
/// Test cases and problem statements are owned by problem-authoring
/// collaborators; the grading core only reads them and bumps the aggregate
/// counters after a submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub difficulty: Difficulty,
    pub submission_count: u64,
    pub accepted_count: u64,
    pub created_at: DateTime<Utc>,
}

impl Problem {
    /// Create a new problem
    pub fn new(slug: impl Into<String>, title: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            id: Uuid::new_v4(),
            slug: slug.into(),
            title: title.into(),
            difficulty,
            submission_count: 0,
            accepted_count: 0,
            created_at: Utc::now(),
        }
    }
}
