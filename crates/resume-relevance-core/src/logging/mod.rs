//! Logging abstractions
//!
//! `Logger` implementations carry operator-facing messages (the missing
//! credential warning, for example). `file_logger` is a separate global
//! debug trace for troubleshooting.

mod traits;
mod console;
mod memory;
pub mod file_logger;

pub use traits::Logger;
pub use console::{ConsoleLogger, ConsoleStream};
pub use memory::MemoryLogger;

// Re-export file logger functions for convenience
pub use file_logger::{log_file_path, LogLevel};
