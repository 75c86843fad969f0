// Instruction Context
// Caller context handed to executors alongside the raw command text.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Context for one instruction dispatched to an executor
///
/// Executors receive this with every `run` call. Most adapters only need
/// the command text; payload bookkeeping is here for the ones that stage
/// files or in-memory blobs before executing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InstructionInfo {
    /// Host-assigned identifier for the instruction
    pub instruction_id: String,
    /// Payload names the host has written to disk for this instruction
    #[serde(default)]
    pub on_disk_payloads: Vec<String>,
    /// Payloads held in memory, keyed by name
    #[serde(default)]
    pub in_memory_payloads: HashMap<String, Vec<u8>>,
}

impl InstructionInfo {
    pub fn new(instruction_id: impl Into<String>) -> Self {
        Self {
            instruction_id: instruction_id.into(),
            ..Default::default()
        }
    }
}
