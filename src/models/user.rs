//! User identity and progress models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::roles;
use crate::models::Difficulty;

/// Authenticated caller identity attached to a scored submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Uuid,
    pub username: String,
    pub role: String,
}

impl Identity {
    /// Check whether submissions from this identity feed the scoring and
    /// streak aggregates. Instructor and admin trial submissions do not.
    pub fn can_earn_score(&self) -> bool {
        self.role == roles::STUDENT
    }
}

/// Per-user progress aggregate
///
/// Mutated only by the scoring updater; read by profile and leaderboard
/// collaborators. Invariant: `accepted_submissions >= solved`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProgress {
    pub user_id: Uuid,
    pub total_submissions: u64,
    pub accepted_submissions: u64,
    /// First-time-accepted problem count
    pub solved: u64,
    pub easy_solved: u64,
    pub medium_solved: u64,
    pub hard_solved: u64,
    pub score: u64,
    /// Consecutive calendar days with at least one accepted submission
    pub streak: u32,
    /// Calendar date of the last streak-affecting submission
    pub last_streak_date: Option<NaiveDate>,
}

impl UserProgress {
    /// Empty progress for a user with no submissions yet
    pub fn new(user_id: Uuid) -> Self {
        Self {
            user_id,
            total_submissions: 0,
            accepted_submissions: 0,
            solved: 0,
            easy_solved: 0,
            medium_solved: 0,
            hard_solved: 0,
            score: 0,
            streak: 0,
            last_streak_date: None,
        }
    }

    /// Credit a first-time solve at the given difficulty
    pub fn credit_solve(&mut self, difficulty: Difficulty) {
        self.solved += 1;
        match difficulty {
            Difficulty::Easy => self.easy_solved += 1,
            Difficulty::Medium => self.medium_solved += 1,
            Difficulty::Hard => self.hard_solved += 1,
        }
        self.score += difficulty.points() as u64;
    }

    /// Advance the calendar-day streak for an accepted submission on `today`.
    ///
    /// Gap of one day extends the streak, a same-day submission leaves it
    /// unchanged, anything else resets it to 1.
    pub fn advance_streak(&mut self, today: NaiveDate) {
        match self.last_streak_date {
            Some(last) if last == today => {}
            Some(last) if (today - last).num_days() == 1 => {
                self.streak += 1;
                self.last_streak_date = Some(today);
            }
            _ => {
                self.streak = 1;
                self.last_streak_date = Some(today);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_streak_increments_on_next_day() {
        let mut p = UserProgress::new(Uuid::new_v4());
        p.streak = 4;
        p.last_streak_date = Some(date("2024-01-10"));
        p.advance_streak(date("2024-01-11"));
        assert_eq!(p.streak, 5);
        assert_eq!(p.last_streak_date, Some(date("2024-01-11")));
    }

    #[test]
    fn test_streak_resets_after_gap() {
        let mut p = UserProgress::new(Uuid::new_v4());
        p.streak = 4;
        p.last_streak_date = Some(date("2024-01-10"));
        p.advance_streak(date("2024-01-13"));
        assert_eq!(p.streak, 1);
        assert_eq!(p.last_streak_date, Some(date("2024-01-13")));
    }

    #[test]
    fn test_streak_unchanged_same_day() {
        let mut p = UserProgress::new(Uuid::new_v4());
        p.streak = 4;
        p.last_streak_date = Some(date("2024-01-10"));
        p.advance_streak(date("2024-01-10"));
        assert_eq!(p.streak, 4);
        assert_eq!(p.last_streak_date, Some(date("2024-01-10")));
    }

    #[test]
    fn test_streak_starts_at_one() {
        let mut p = UserProgress::new(Uuid::new_v4());
        p.advance_streak(date("2024-01-10"));
        assert_eq!(p.streak, 1);
    }

    #[test]
    fn test_credit_solve_updates_difficulty_counters() {
        let mut p = UserProgress::new(Uuid::new_v4());
        p.credit_solve(Difficulty::Medium);
        p.credit_solve(Difficulty::Hard);
        assert_eq!(p.solved, 2);
        assert_eq!(p.medium_solved, 1);
        assert_eq!(p.hard_solved, 1);
        assert_eq!(p.easy_solved, 0);
        assert_eq!(p.score, 50);
    }

    #[test]
    fn test_role_gating() {
        let student = Identity {
            user_id: Uuid::new_v4(),
            username: "alice".into(),
            role: roles::STUDENT.into(),
        };
        let admin = Identity {
            user_id: Uuid::new_v4(),
            username: "root".into(),
            role: roles::ADMIN.into(),
        };
        assert!(student.can_earn_score());
        assert!(!admin.can_earn_score());
    }
}
