// src/internal/logger/mod.rs

pub mod console;
pub mod layer;
pub mod logger;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use console::{ColorScope, Console, TerminalConsole};
pub use layer::{init_logger, ConsoleLayer};
pub use logger::{ConsoleLogger, ConsoleLoggerBuilder, LogScope, Logger};

// Note: The console_* macros are exported at the crate root via #[macro_export]
// They can be used as console_ext::console_info!(logger, "{Name}", value)
