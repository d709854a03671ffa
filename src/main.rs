//! SkillJudge - Operator Entry Point
//!
//! Thin CLI over the same services the platform layer calls:
//! `skilljudge run <file>` executes a script ad-hoc, and
//! `skilljudge test <file> <tests.json>` grades it against a JSON array of
//! `{ "input": ..., "expected_output": ... }` pairs.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use skilljudge::{
    config::CONFIG,
    judge::ProcessExecutor,
    services::run_service::{RunCodeRequest, RunService, RunTestsRequest, TestCaseInput},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| CONFIG.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let executor = ProcessExecutor::new(CONFIG.judge.clone());

    match args.get(1).map(String::as_str) {
        Some("run") => {
            let path = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("usage: skilljudge run <file>"))?;
            let code = tokio::fs::read_to_string(path).await?;

            let response =
                RunService::run_code(&executor, &CONFIG, RunCodeRequest { code }).await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Some("test") => {
            let code_path = args
                .get(2)
                .ok_or_else(|| anyhow::anyhow!("usage: skilljudge test <file> <tests.json>"))?;
            let tests_path = args
                .get(3)
                .ok_or_else(|| anyhow::anyhow!("usage: skilljudge test <file> <tests.json>"))?;

            let code = tokio::fs::read_to_string(code_path).await?;
            let tests: Vec<TestCaseInput> =
                serde_json::from_str(&tokio::fs::read_to_string(tests_path).await?)?;

            let response = RunService::run_tests(
                &executor,
                &CONFIG,
                RunTestsRequest {
                    code,
                    test_cases: tests,
                },
            )
            .await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        _ => {
            eprintln!("usage: skilljudge <run|test> ...");
            std::process::exit(2);
        }
    }

    Ok(())
}
