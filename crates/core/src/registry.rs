// Executor Registry
// Explicit map from executor identity to implementation, populated by the
// composition root at startup. Registration is never a load-time side
// effect: the owner decides what to probe and when.

use crate::port::Executor;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Registry of executors keyed by identity string
#[derive(Default)]
pub struct ExecutorRegistry {
    executors: HashMap<String, Arc<dyn Executor>>,
}

impl ExecutorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Probe the executor and register it under its identity if available.
    ///
    /// Unavailable executors are skipped with a logged diagnostic. The
    /// probe is one-time and non-retryable; the process continues either
    /// way.
    pub fn register_if_available(&mut self, executor: Arc<dyn Executor>) -> bool {
        let name = executor.name().to_string();
        if !executor.is_available() {
            warn!(executor = %name, "Executor not available on this platform, skipping");
            return false;
        }
        info!(executor = %name, "Registered executor");
        self.executors.insert(name, executor);
        true
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Executor>> {
        self.executors.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.executors.contains_key(name)
    }

    /// Registered identities, sorted for stable output
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.executors.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.executors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.executors.is_empty()
    }
}
