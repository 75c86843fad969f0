// Shell executor adapter
// Spawns isolated child processes through the platform shell with
// environment allowlisting.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{info, warn};

use drover_core::domain::{CommandResults, ExitCode, InstructionInfo, StatusCode};
use drover_core::port::{Executor, TimeProvider};
use std::sync::Arc;

#[cfg(unix)]
const SHELL: &str = "sh";
#[cfg(unix)]
const SHELL_ARG: &str = "-c";

#[cfg(windows)]
const SHELL: &str = "cmd";
#[cfg(windows)]
const SHELL_ARG: &str = "/C";

/// Internal classification of shell execution failures. Collapsed into an
/// Error result record at the contract boundary; never surfaced to the
/// host.
#[derive(Error, Debug)]
enum ExecutionError {
    #[error("Spawn failed: {0}")]
    SpawnFailed(String),

    #[error("Process timed out after {0:?}")]
    Timeout(Duration),

    #[error("IO error: {0}")]
    Io(String),
}

/// Executor that runs a command line through the platform shell
pub struct ShellExecutor {
    time_provider: Arc<dyn TimeProvider>,
    env_allowlist: Vec<String>,
}

impl ShellExecutor {
    /// # Arguments
    /// * `time_provider` - Time provider for result timestamps
    /// * `env_allowlist` - Environment variables the child may inherit
    pub fn new(time_provider: Arc<dyn TimeProvider>, env_allowlist: Vec<String>) -> Self {
        Self {
            time_provider,
            env_allowlist,
        }
    }

    /// Filter the process environment down to the allowlist
    fn filtered_env(&self) -> Vec<(String, String)> {
        std::env::vars()
            .filter(|(k, _)| self.env_allowlist.contains(k))
            .collect()
    }

    async fn spawn_and_wait(
        &self,
        command: &str,
        deadline: Duration,
    ) -> Result<(std::process::Output, u32), ExecutionError> {
        // kill_on_drop so a timed-out child does not outlive the call
        let mut cmd = Command::new(SHELL);
        cmd.arg(SHELL_ARG)
            .arg(command)
            .env_clear()
            .envs(self.filtered_env())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let child = cmd
            .spawn()
            .map_err(|e| ExecutionError::SpawnFailed(e.to_string()))?;
        let pid = child.id().unwrap_or(0);

        match timeout(deadline, child.wait_with_output()).await {
            Ok(Ok(output)) => Ok((output, pid)),
            Ok(Err(e)) => Err(ExecutionError::Io(e.to_string())),
            Err(_) => Err(ExecutionError::Timeout(deadline)),
        }
    }

    fn build_result(
        &self,
        output: std::process::Output,
        pid: u32,
        started_at: chrono::DateTime<chrono::Utc>,
    ) -> CommandResults {
        let (exit_code, status) = if output.status.success() {
            (ExitCode::Success, StatusCode::Success)
        } else {
            (ExitCode::Error, StatusCode::Error)
        };

        // Unlike the shellcode adapter, both output fields carry whatever
        // the child actually wrote.
        CommandResults {
            stdout: output.stdout,
            stderr: output.stderr,
            exit_code,
            status,
            pid,
            started_at,
        }
    }
}

#[async_trait]
impl Executor for ShellExecutor {
    fn name(&self) -> &str {
        SHELL
    }

    async fn run(
        &self,
        command: &str,
        timeout: Duration,
        _info: &InstructionInfo,
    ) -> CommandResults {
        let started_at = self.time_provider.now_utc();

        info!(shell = SHELL, timeout = ?timeout, "Starting shell execution");

        match self.spawn_and_wait(command, timeout).await {
            Ok((output, pid)) => {
                let result = self.build_result(output, pid, started_at);
                info!(
                    shell = SHELL,
                    pid = pid,
                    exit_code = %result.exit_code,
                    "Shell execution completed"
                );
                result
            }
            Err(e) => {
                warn!(shell = SHELL, error = %e, "Shell execution failed");
                CommandResults::failure(e.to_string(), 0, started_at)
            }
        }
    }

    fn is_available(&self) -> bool {
        which::which(SHELL).is_ok()
    }

    fn download_payload_to_memory(&self, _payload_name: &str) -> bool {
        false
    }

    fn update_binary(&self, _new_binary: &str) {}
}
