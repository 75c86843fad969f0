// Shellcode executor adapter
// Decodes a hex-formatted command into raw bytes and hands them to the
// platform runner port. The runner primitive itself is supplied by the
// embedding framework; this adapter only normalizes input and translates
// the runner's outcome into the standard result record.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

use drover_core::domain::{CommandResults, InstructionInfo};
use drover_core::port::{Executor, ShellcodeRunner, TimeProvider};

const NAME_PREFIX: &str = "shellcode_";
const SUCCESS_MESSAGE: &str = "Shellcode executed successfully.";
const FAILURE_MESSAGE: &str = "Shellcode execution failed.";

/// Executor for raw machine-code bytes, identified as
/// `shellcode_<arch>` for the architecture the agent was built for.
pub struct ShellcodeExecutor {
    name: String,
    runner: Arc<dyn ShellcodeRunner>,
    time_provider: Arc<dyn TimeProvider>,
}

impl ShellcodeExecutor {
    pub fn new(runner: Arc<dyn ShellcodeRunner>, time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            name: format!("{}{}", NAME_PREFIX, std::env::consts::ARCH),
            runner,
            time_provider,
        }
    }
}

#[async_trait]
impl Executor for ShellcodeExecutor {
    fn name(&self) -> &str {
        &self.name
    }

    // `timeout` is accepted but not enforced: the runner call is a single
    // synchronous control transfer with no cancellation point.
    async fn run(
        &self,
        command: &str,
        _timeout: Duration,
        _info: &InstructionInfo,
    ) -> CommandResults {
        let code = decode_command(command);
        debug!(executor = %self.name, code_len = code.len(), "Decoded shellcode command");

        let started_at = self.time_provider.now_utc();
        let outcome = self.runner.run(&code);

        info!(
            executor = %self.name,
            success = outcome.success,
            pid = outcome.pid,
            "Shellcode run completed"
        );

        if outcome.success {
            CommandResults::success(SUCCESS_MESSAGE, outcome.pid, started_at)
        } else {
            CommandResults::failure(FAILURE_MESSAGE, outcome.pid, started_at)
        }
    }

    fn is_available(&self) -> bool {
        self.runner.is_available()
    }

    fn download_payload_to_memory(&self, _payload_name: &str) -> bool {
        false
    }

    fn update_binary(&self, _new_binary: &str) {}
}

/// Normalize a hex command and decode it to bytes.
///
/// Malformed hex (odd length, non-hex digits) is absorbed: the result is
/// an empty byte sequence, passed to the runner unchanged rather than
/// surfaced as an error.
fn decode_command(command: &str) -> Vec<u8> {
    hex::decode(normalize(command)).unwrap_or_default()
}

// Strip whitespace first, then the `0x`, `\x` and `,` decorations, in
// that order.
fn normalize(command: &str) -> String {
    let stripped: String = command.chars().filter(|c| !c.is_whitespace()).collect();
    stripped.replace("0x", "").replace("\\x", "").replace(',', "")
}
