//! Registry behavior at the wiring boundary

use std::sync::Arc;
use std::time::Duration;

use drover_core::domain::{ExitCode, InstructionInfo};
use drover_core::port::shellcode_runner::mocks::RecordingRunner;
use drover_core::port::Executor;
use drover_infra_exec::{build_registry, build_registry_with_runner, AgentConfig};

#[test]
fn default_wiring_skips_shellcode_without_a_backend() {
    let registry = build_registry(&AgentConfig::default());

    let shellcode_name = format!("shellcode_{}", std::env::consts::ARCH);
    assert!(!registry.contains(&shellcode_name));
    assert!(!registry.is_empty());
}

#[tokio::test]
async fn interface_stubs_do_not_disturb_subsequent_runs() {
    let runner = Arc::new(RecordingRunner::new(true, 9));
    let registry = build_registry_with_runner(&AgentConfig::default(), runner);

    let name = format!("shellcode_{}", std::env::consts::ARCH);
    let executor = registry.get(&name).expect("registered");

    // Stub calls first, then a normal run
    assert!(!executor.download_payload_to_memory("stage1.bin"));
    executor.update_binary("replacement");

    assert_eq!(executor.name(), name);
    let result = executor
        .run("0x90", Duration::from_secs(1), &InstructionInfo::default())
        .await;
    assert_eq!(result.exit_code, ExitCode::Success);
}

#[test]
fn registration_is_idempotent_per_identity() {
    let config = AgentConfig::default();
    let runner = Arc::new(RecordingRunner::new(true, 1));

    let mut registry = build_registry_with_runner(&config, runner.clone());
    let before = registry.len();

    // Re-registering the same identity replaces rather than duplicates
    registry.register_if_available(Arc::new(
        drover_infra_exec::ShellcodeExecutor::new(
            runner,
            Arc::new(drover_core::port::time_provider::SystemTimeProvider),
        ),
    ));
    assert_eq!(registry.len(), before);
}
