// Port Layer - Interfaces for external dependencies

pub mod executor;
pub mod shellcode_runner;
pub mod time_provider;

// Re-exports
pub use executor::Executor;
pub use shellcode_runner::{RunnerOutcome, ShellcodeRunner};
pub use time_provider::TimeProvider;
