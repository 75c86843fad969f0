// Domain Records

pub mod instruction;
pub mod result;

pub use instruction::InstructionInfo;
pub use result::{CommandResults, ExitCode, StatusCode};
