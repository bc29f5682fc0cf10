pub mod cli;
pub mod internal;

// Re-export commonly used types
pub use internal::config::config;
pub use internal::config::LoggerConfig;
pub use internal::error::LoggerError;
pub use internal::input::read_password;
pub use internal::logger::{init_logger, ConsoleLogger, Logger};
pub use internal::models::{ConsoleColor, EventId, ExceptionRecord, LogEvent, LogLevel, Value};
