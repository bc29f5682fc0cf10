use std::io;

/// Errors surfaced by the console logger.
///
/// Everything not listed here (missing placeholder values, bad format
/// directives, failing path checks) degrades to plain text instead of
/// failing the call.
#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("invalid log level value: {0}")]
    InvalidLevel(String),
    #[error("{0} is not supported by the console logger")]
    NotSupported(&'static str),
    #[error("logger configuration is required")]
    MissingConfiguration,
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
