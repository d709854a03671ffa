//! Domain models

mod problem;
mod submission;
mod test_case;
mod user;

pub use problem::{Difficulty, Problem};
pub use submission::{Submission, Verdict};
pub use test_case::TestCase;
pub use user::{Identity, UserProgress};
