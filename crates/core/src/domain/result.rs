// Command Result Record
// The standardized outcome shape every executor reports back to the host.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Exit code reported for one execution request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExitCode {
    Success,
    Error,
}

/// Status code reported for one execution request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    Success,
    Error,
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExitCode::Success => write!(f, "SUCCESS"),
            ExitCode::Error => write!(f, "ERROR"),
        }
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusCode::Success => write!(f, "SUCCESS"),
            StatusCode::Error => write!(f, "ERROR"),
        }
    }
}

/// Result record for one execution request
///
/// Executors never return an error from `run`; failure is encoded here
/// through `exit_code`/`status` and the captured stderr bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResults {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub exit_code: ExitCode,
    pub status: StatusCode,
    /// Process id of the execution; 0 when no process was created
    pub pid: u32,
    /// When execution began (UTC)
    pub started_at: DateTime<Utc>,
}

impl CommandResults {
    /// Successful execution with captured output
    pub fn success(stdout: impl Into<Vec<u8>>, pid: u32, started_at: DateTime<Utc>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: Vec::new(),
            exit_code: ExitCode::Success,
            status: StatusCode::Success,
            pid,
            started_at,
        }
    }

    /// Failed execution with captured error output
    pub fn failure(stderr: impl Into<Vec<u8>>, pid: u32, started_at: DateTime<Utc>) -> Self {
        Self {
            stdout: Vec::new(),
            stderr: stderr.into(),
            exit_code: ExitCode::Error,
            status: StatusCode::Error,
            pid,
            started_at,
        }
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code == ExitCode::Success
    }
}
