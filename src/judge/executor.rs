//! Sandboxed execution of synthesized programs
//!
//! Each call stages the program text into a uniquely-named scratch file,
//! spawns one interpreter process, and waits for it under a wall-clock
//! timeout. Every failure mode (write error, spawn error, non-zero exit,
//! timeout) is normalized into the same `ExecutionResult` shape so callers
//! have one code path; nothing escapes this module as an `Err`.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use chrono::Utc;
use tokio::process::Command;
use uuid::Uuid;

use crate::config::JudgeConfig;
use crate::constants::diagnostics;

/// Captured outcome of one program execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Trimmed standard output; empty on any execution failure
    pub stdout: String,
    /// Diagnostic text: stderr, spawn/write failure, or the time-limit note
    pub error: Option<String>,
    /// Whether the process was killed for exceeding its timeout
    pub timed_out: bool,
}

impl ExecutionResult {
    /// Successful execution with optional stderr noise attached
    pub fn success(stdout: String, stderr: Option<String>) -> Self {
        Self {
            stdout,
            error: stderr,
            timed_out: false,
        }
    }

    /// Execution failure with a diagnostic
    pub fn failure(diagnostic: impl Into<String>) -> Self {
        Self {
            stdout: String::new(),
            error: Some(diagnostic.into()),
            timed_out: false,
        }
    }

    /// Forced termination at the timeout boundary
    pub fn timeout() -> Self {
        Self {
            stdout: String::new(),
            error: Some(diagnostics::TIME_LIMIT_EXCEEDED.to_string()),
            timed_out: true,
        }
    }

    /// Whether the process ran to completion successfully
    pub fn succeeded(&self) -> bool {
        !self.timed_out && (self.error.is_none() || !self.stdout.is_empty())
    }
}

/// Executes one program per call
///
/// Implementations hold no cross-call mutable state, so calls may run
/// sequentially or in parallel as the caller chooses.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Execute: Send + Sync {
    async fn execute(&self, program: &str, timeout: Duration) -> ExecutionResult;
}

/// Child-process executor backed by a scripting interpreter on PATH
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    config: JudgeConfig,
}

impl ProcessExecutor {
    /// Create a new executor from judge configuration
    pub fn new(config: JudgeConfig) -> Self {
        Self { config }
    }

    /// Unique scratch path for one execution
    fn scratch_path(&self) -> PathBuf {
        let name = format!(
            "submission_{}_{}.{}",
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple(),
            self.config.file_extension,
        );
        self.config.scratch_dir.join(name)
    }

    async fn spawn_and_wait(&self, path: &Path, timeout: Duration) -> ExecutionResult {
        let mut command = Command::new(&self.config.interpreter);
        command
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                return ExecutionResult::failure(format!(
                    "{}failed to start {}: {}",
                    diagnostics::RUNTIME_ERROR_PREFIX,
                    self.config.interpreter,
                    e
                ));
            }
        };

        // Dropping the wait future on timeout kills the child via
        // kill_on_drop; its partial output is discarded.
        match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Err(_) => {
                tracing::debug!(timeout_ms = timeout.as_millis() as u64, "execution timed out");
                ExecutionResult::timeout()
            }
            Ok(Err(e)) => ExecutionResult::failure(format!(
                "{}failed to collect output: {}",
                diagnostics::RUNTIME_ERROR_PREFIX,
                e
            )),
            Ok(Ok(output)) => {
                let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

                if output.status.success() {
                    let diagnostic = (!stderr.is_empty()).then_some(stderr);
                    ExecutionResult::success(stdout, diagnostic)
                } else {
                    let detail = if stderr.is_empty() {
                        format!("process exited with {}", output.status)
                    } else {
                        stderr
                    };
                    ExecutionResult::failure(format!(
                        "{}{}",
                        diagnostics::RUNTIME_ERROR_PREFIX,
                        detail
                    ))
                }
            }
        }
    }
}

#[async_trait::async_trait]
impl Execute for ProcessExecutor {
    async fn execute(&self, program: &str, timeout: Duration) -> ExecutionResult {
        let path = self.scratch_path();

        let _ = tokio::fs::create_dir_all(&self.config.scratch_dir).await;
        if let Err(e) = tokio::fs::write(&path, program).await {
            return ExecutionResult::failure(format!(
                "{}failed to stage program: {}",
                diagnostics::RUNTIME_ERROR_PREFIX,
                e
            ));
        }

        let result = self.spawn_and_wait(&path, timeout).await;

        // Best-effort cleanup on every exit path; failures never surface.
        if let Err(e) = tokio::fs::remove_file(&path).await {
            tracing::debug!(path = %path.display(), "scratch cleanup failed: {}", e);
        }

        result
    }
}
