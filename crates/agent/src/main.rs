//! Drover Agent - Main Entry Point
//! Composition root: wires executors into the registry and dispatches
//! one request read from stdin.

use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use drover_core::domain::InstructionInfo;
use drover_core::{AppError, ExecutorRegistry};
use drover_infra_exec::{build_registry, AgentConfig};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-shot dispatch request read from stdin as JSON
#[derive(Debug, Deserialize)]
struct DispatchRequest {
    executor: String,
    command: String,
    #[serde(default)]
    timeout_secs: Option<u64>,
    #[serde(default)]
    info: InstructionInfo,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize logging
    let log_format = std::env::var("DROVER_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("drover=info"))
        .expect("Failed to create env filter");

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        _ => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }

    info!("Drover agent v{} starting...", VERSION);

    // 2. Load configuration
    let config = AgentConfig::load()?;

    // 3. Probe and register executors (explicit startup call)
    let registry = build_registry(&config);
    info!(executors = ?registry.names(), "Executor registry ready");

    // 4. List-only mode for inspection
    if std::env::var("DROVER_LIST_ONLY").as_deref() == Ok("1") {
        for name in registry.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    // 5. One-shot dispatch from stdin
    let mut input = Vec::new();
    tokio::io::stdin().read_to_end(&mut input).await?;
    let request: DispatchRequest = serde_json::from_slice(&input)?;

    let result = dispatch(&registry, &config, request).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

async fn dispatch(
    registry: &ExecutorRegistry,
    config: &AgentConfig,
    request: DispatchRequest,
) -> Result<drover_core::domain::CommandResults> {
    let executor = registry
        .get(&request.executor)
        .ok_or_else(|| AppError::UnknownExecutor(request.executor.clone()))?;

    let timeout = Duration::from_secs(
        request.timeout_secs.unwrap_or(config.default_timeout_secs),
    );

    info!(
        executor = %request.executor,
        instruction_id = %request.info.instruction_id,
        "Dispatching instruction"
    );

    Ok(executor.run(&request.command, timeout, &request.info).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_request_parses_with_defaults() {
        let request: DispatchRequest =
            serde_json::from_str(r#"{"executor": "sh", "command": "echo hi"}"#).unwrap();

        assert_eq!(request.executor, "sh");
        assert_eq!(request.command, "echo hi");
        assert!(request.timeout_secs.is_none());
        assert!(request.info.instruction_id.is_empty());
    }

    #[tokio::test]
    async fn dispatch_rejects_unknown_executor() {
        let registry = ExecutorRegistry::new();
        let request: DispatchRequest =
            serde_json::from_str(r#"{"executor": "nope", "command": "x"}"#).unwrap();

        let err = dispatch(&registry, &AgentConfig::default(), request)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Unknown executor"));
    }
}
