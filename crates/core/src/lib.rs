// Drover Core - Domain Records & Ports
// NO infrastructure dependencies (Hexagonal Architecture)

pub mod domain;
pub mod error;
pub mod port;
pub mod registry;

pub use error::{AppError, Result};
pub use registry::ExecutorRegistry;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
