// Shellcode Runner Port
// Abstraction over the platform primitive that executes raw bytes in
// memory. The primitive itself lives outside this repository; the
// embedding framework injects its implementation here.

/// Outcome of one runner invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerOutcome {
    pub success: bool,
    /// Process id the code ran under; 0 when no process was created
    pub pid: u32,
}

/// Platform runner interface
pub trait ShellcodeRunner: Send + Sync {
    /// Whether the current platform/build supports in-memory execution
    fn is_available(&self) -> bool;

    /// Execute the given bytes synchronously
    fn run(&self, code: &[u8]) -> RunnerOutcome;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Mock runner that records every byte sequence it receives
    pub struct RecordingRunner {
        outcome: RunnerOutcome,
        received: Arc<Mutex<Vec<Vec<u8>>>>,
    }

    impl RecordingRunner {
        pub fn new(success: bool, pid: u32) -> Self {
            Self {
                outcome: RunnerOutcome { success, pid },
                received: Arc::new(Mutex::new(Vec::new())),
            }
        }

        /// Byte sequences passed to `run`, in order
        pub fn received(&self) -> Vec<Vec<u8>> {
            self.received.lock().unwrap().clone()
        }
    }

    impl ShellcodeRunner for RecordingRunner {
        fn is_available(&self) -> bool {
            true
        }

        fn run(&self, code: &[u8]) -> RunnerOutcome {
            self.received.lock().unwrap().push(code.to_vec());
            self.outcome
        }
    }
}
