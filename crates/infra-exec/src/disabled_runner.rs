// Disabled shellcode runner
// Placeholder for builds without a platform injection backend. The real
// primitive is an external collaborator: embedders provide their own
// `ShellcodeRunner` and wire it in through `build_registry_with_runner`.

use drover_core::port::{RunnerOutcome, ShellcodeRunner};
use tracing::warn;

/// Runner that reports unavailable and fails every invocation
pub struct DisabledRunner;

impl ShellcodeRunner for DisabledRunner {
    fn is_available(&self) -> bool {
        false
    }

    fn run(&self, code: &[u8]) -> RunnerOutcome {
        warn!(
            code_len = code.len(),
            "Shellcode runner invoked but no platform backend is wired in"
        );
        RunnerOutcome {
            success: false,
            pid: 0,
        }
    }
}
