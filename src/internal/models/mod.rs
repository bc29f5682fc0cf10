// src/internal/models/mod.rs

pub mod color;
pub mod event;
pub mod exception;
pub mod level;
pub mod value;

pub use color::ConsoleColor;
pub use event::{EventId, LogEvent};
pub use exception::ExceptionRecord;
pub use level::{LevelColorMap, LogLevel};
pub use value::Value;
