// Executor Port
// Capability contract every pluggable executor implements.

use crate::domain::{CommandResults, InstructionInfo};
use async_trait::async_trait;
use std::time::Duration;

/// Executor capability contract
///
/// Implementations:
/// - ShellcodeExecutor: decodes hex bytes and hands them to a platform runner
/// - ShellExecutor: spawns the platform shell as a child process
///
/// The host dispatches polymorphically over this trait, so every variant
/// must carry the full method set even where some operations are inert.
#[async_trait]
pub trait Executor: Send + Sync {
    /// Immutable identity used as the registry key
    fn name(&self) -> &str;

    /// Execute one command and report the outcome
    ///
    /// Never fails at the call boundary: execution failure is encoded in
    /// the returned record. Adapters that cannot enforce `timeout` accept
    /// and ignore it.
    async fn run(
        &self,
        command: &str,
        timeout: Duration,
        info: &InstructionInfo,
    ) -> CommandResults;

    /// Probe whether this executor can run on the current platform
    fn is_available(&self) -> bool;

    /// Stage a named payload in memory; returns false when unsupported
    fn download_payload_to_memory(&self, payload_name: &str) -> bool;

    /// Replace the executor's backing binary; no-op when unsupported
    fn update_binary(&self, new_binary: &str);
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use crate::domain::CommandResults;
    use std::sync::{Arc, Mutex};

    /// Mock executor with scripted availability and outcome
    pub struct MockExecutor {
        name: String,
        available: bool,
        succeed: bool,
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl MockExecutor {
        pub fn new(name: impl Into<String>, available: bool, succeed: bool) -> Self {
            Self {
                name: name.into(),
                available,
                succeed,
                calls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Commands passed to `run`, in order
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Executor for MockExecutor {
        fn name(&self) -> &str {
            &self.name
        }

        async fn run(
            &self,
            command: &str,
            _timeout: Duration,
            _info: &InstructionInfo,
        ) -> CommandResults {
            self.calls.lock().unwrap().push(command.to_string());
            let started_at = chrono::Utc::now();
            if self.succeed {
                CommandResults::success("mock output", 1, started_at)
            } else {
                CommandResults::failure("mock failure", 0, started_at)
            }
        }

        fn is_available(&self) -> bool {
            self.available
        }

        fn download_payload_to_memory(&self, _payload_name: &str) -> bool {
            false
        }

        fn update_binary(&self, _new_binary: &str) {}
    }
}
