// Registry bootstrap
// Explicit startup wiring: probe each executor once and register the
// available ones. Called from the composition root, never from load-time
// side effects.

use std::sync::Arc;

use drover_core::port::time_provider::SystemTimeProvider;
use drover_core::port::ShellcodeRunner;
use drover_core::ExecutorRegistry;

use crate::config::AgentConfig;
use crate::disabled_runner::DisabledRunner;
use crate::shell_executor::ShellExecutor;
use crate::shellcode_executor::ShellcodeExecutor;

/// Build the registry with the in-repo placeholder runner.
///
/// The shellcode executor will probe unavailable and stay unregistered
/// until an embedder supplies a real platform backend.
pub fn build_registry(config: &AgentConfig) -> ExecutorRegistry {
    build_registry_with_runner(config, Arc::new(DisabledRunner))
}

/// Build the registry around a caller-supplied shellcode runner
pub fn build_registry_with_runner(
    config: &AgentConfig,
    runner: Arc<dyn ShellcodeRunner>,
) -> ExecutorRegistry {
    let time_provider = Arc::new(SystemTimeProvider);

    let mut registry = ExecutorRegistry::new();
    registry.register_if_available(Arc::new(ShellcodeExecutor::new(
        runner,
        time_provider.clone(),
    )));
    registry.register_if_available(Arc::new(ShellExecutor::new(
        time_provider,
        config.env_allowlist.clone(),
    )));
    registry
}
