//! Grading pipeline
//!
//! Harness synthesis, sandboxed execution, output comparison, and verdict
//! aggregation. The pipeline is invoked per submission by the service layer;
//! each test case runs as its own interpreter process.

pub mod aggregator;
pub mod comparator;
pub mod executor;
pub mod harness;

pub use aggregator::{judge_submission, JudgeOutcome, TestOutcome, TestSpec};
pub use executor::{Execute, ExecutionResult, ProcessExecutor};

#[cfg(test)]
pub use executor::MockExecute;
