//! Business logic services
//!
//! The narrow interfaces the surrounding platform layer calls into: ad-hoc
//! runs, bulk test runs, and scored submissions.

pub mod run_service;
pub mod submission_service;

pub use run_service::RunService;
pub use submission_service::SubmissionService;
