// Drover Infra-Exec - Executor Adapters
// Platform-facing implementations of the core executor port.

pub mod bootstrap;
pub mod config;
pub mod disabled_runner;
pub mod shell_executor;
pub mod shellcode_executor;

pub use bootstrap::{build_registry, build_registry_with_runner};
pub use config::AgentConfig;
pub use disabled_runner::DisabledRunner;
pub use shell_executor::ShellExecutor;
pub use shellcode_executor::ShellcodeExecutor;
