// src/internal/logger/logger.rs

use std::sync::{Arc, Mutex, PoisonError};

use super::console::{ColorScope, Console, TerminalConsole};
use crate::internal::config::LoggerConfig;
use crate::internal::error::LoggerError;
use crate::internal::formatter::{Clock, FsProbe, MessageFormatter, PathProbe, SystemClock};
use crate::internal::models::{EventId, ExceptionRecord, LevelColorMap, LogEvent, LogLevel, Value};

/// Logger is the small logging surface the console logger implements.
pub trait Logger: Send + Sync {
    fn is_enabled(&self, level: LogLevel) -> bool;

    fn log(&self, event: &LogEvent<'_>) -> Result<(), LoggerError>;

    /// Scopes are not supported; implementations return `NotSupported`.
    fn begin_scope(&self, state: &str) -> Result<LogScope, LoggerError>;
}

/// Handle for a logging scope. No logger in this crate hands one out.
#[derive(Debug)]
pub struct LogScope {
    _private: (),
}

/// ConsoleLogger writes one colored line per enabled event.
///
/// The console sits behind a mutex, so a line and its color switch are
/// never interleaved with another thread using the same logger. Other
/// writers to the same terminal are not coordinated with.
pub struct ConsoleLogger<C: Console = TerminalConsole> {
    config: LoggerConfig,
    colors: LevelColorMap,
    formatter: MessageFormatter,
    console: Mutex<C>,
}

impl ConsoleLogger {
    /// Logger writing to standard output.
    pub fn new(config: LoggerConfig) -> Self {
        let console = TerminalConsole::stdout(config.use_colors);
        Self::with_console(config, console)
    }

    pub fn builder() -> ConsoleLoggerBuilder {
        ConsoleLoggerBuilder::new()
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl<C: Console> ConsoleLogger<C> {
    pub fn with_console(config: LoggerConfig, console: C) -> Self {
        Self::from_parts(config, console, MessageFormatter::default())
    }

    fn from_parts(config: LoggerConfig, console: C, formatter: MessageFormatter) -> Self {
        Self {
            colors: LevelColorMap::from(&config.colors),
            config,
            formatter,
            console: Mutex::new(console),
        }
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn into_console(self) -> C {
        self.console.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    /// Log with every part of the event spelled out.
    pub fn log_with(
        &self,
        level: LogLevel,
        event_id: &EventId,
        template: &str,
        args: &[Value],
        exception: Option<&ExceptionRecord>,
    ) -> Result<(), LoggerError> {
        self.log(&LogEvent::new(level, event_id, template, args).with_exception(exception))
    }

    /// Log with a raw level ordinal; values outside the defined levels
    /// fail with `InvalidLevel`.
    pub fn log_ordinal(
        &self,
        level: u8,
        event_id: &EventId,
        template: &str,
        args: &[Value],
        exception: Option<&ExceptionRecord>,
    ) -> Result<(), LoggerError> {
        let level = LogLevel::from_ordinal(level)?;
        self.log_with(level, event_id, template, args, exception)
    }

    pub fn trace(&self, template: &str, args: &[Value]) -> Result<(), LoggerError> {
        self.log_with(LogLevel::Trace, &EventId::default(), template, args, None)
    }

    pub fn debug(&self, template: &str, args: &[Value]) -> Result<(), LoggerError> {
        self.log_with(LogLevel::Debug, &EventId::default(), template, args, None)
    }

    pub fn information(&self, template: &str, args: &[Value]) -> Result<(), LoggerError> {
        self.log_with(LogLevel::Information, &EventId::default(), template, args, None)
    }

    pub fn warning(&self, template: &str, args: &[Value]) -> Result<(), LoggerError> {
        self.log_with(LogLevel::Warning, &EventId::default(), template, args, None)
    }

    pub fn error(&self, template: &str, args: &[Value]) -> Result<(), LoggerError> {
        self.log_with(LogLevel::Error, &EventId::default(), template, args, None)
    }

    pub fn critical(&self, template: &str, args: &[Value]) -> Result<(), LoggerError> {
        self.log_with(LogLevel::Critical, &EventId::default(), template, args, None)
    }
}

impl<C: Console> Logger for ConsoleLogger<C> {
    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.config.min_level
    }

    fn log(&self, event: &LogEvent<'_>) -> Result<(), LoggerError> {
        if !self.is_enabled(event.level) {
            return Ok(());
        }

        let color = self.colors.color_for(event.level);
        let line = self.formatter.format(event, &self.config);

        let mut console = self.console.lock().unwrap_or_else(PoisonError::into_inner);
        let mut scope = ColorScope::enter(&mut *console, color)?;
        scope.write_line(&line)?;
        Ok(())
    }

    fn begin_scope(&self, _state: &str) -> Result<LogScope, LoggerError> {
        Err(LoggerError::NotSupported("begin_scope"))
    }
}

/// Builder for loggers that need a custom console, clock or path probe.
pub struct ConsoleLoggerBuilder<C: Console = TerminalConsole> {
    config: Option<LoggerConfig>,
    console: Option<C>,
    clock: Arc<dyn Clock>,
    probe: Arc<dyn PathProbe>,
}

impl ConsoleLoggerBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            console: None,
            clock: Arc::new(SystemClock),
            probe: Arc::new(FsProbe),
        }
    }
}

impl Default for ConsoleLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Console> ConsoleLoggerBuilder<C> {
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn console<D: Console>(self, console: D) -> ConsoleLoggerBuilder<D> {
        ConsoleLoggerBuilder {
            config: self.config,
            console: Some(console),
            clock: self.clock,
            probe: self.probe,
        }
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn probe(mut self, probe: impl PathProbe + 'static) -> Self {
        self.probe = Arc::new(probe);
        self
    }

    /// Finish the logger. A configuration is required; without a console
    /// the builder falls back to `make_console`.
    pub fn build_with(
        self,
        make_console: impl FnOnce(&LoggerConfig) -> C,
    ) -> Result<ConsoleLogger<C>, LoggerError> {
        let config = self.config.ok_or(LoggerError::MissingConfiguration)?;
        let console = match self.console {
            Some(console) => console,
            None => make_console(&config),
        };
        let formatter = MessageFormatter::new(self.clock, self.probe);
        Ok(ConsoleLogger::from_parts(config, console, formatter))
    }
}

impl ConsoleLoggerBuilder<TerminalConsole> {
    /// Finish a logger writing to standard output unless another console
    /// was supplied.
    pub fn build(self) -> Result<ConsoleLogger, LoggerError> {
        self.build_with(|config| TerminalConsole::stdout(config.use_colors))
    }
}

/// Log at a level through a `ConsoleLogger`, converting each argument
/// with `Value::from`.
#[macro_export]
macro_rules! console_log {
    ($logger:expr, $level:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $logger.log_with(
            $level,
            &$crate::internal::models::EventId::default(),
            $template,
            &[$($crate::internal::models::Value::from($arg)),*],
            None,
        )
    };
}

#[macro_export]
macro_rules! console_trace {
    ($logger:expr, $($rest:tt)*) => {
        $crate::console_log!($logger, $crate::internal::models::LogLevel::Trace, $($rest)*)
    };
}

#[macro_export]
macro_rules! console_debug {
    ($logger:expr, $($rest:tt)*) => {
        $crate::console_log!($logger, $crate::internal::models::LogLevel::Debug, $($rest)*)
    };
}

#[macro_export]
macro_rules! console_info {
    ($logger:expr, $($rest:tt)*) => {
        $crate::console_log!($logger, $crate::internal::models::LogLevel::Information, $($rest)*)
    };
}

#[macro_export]
macro_rules! console_warn {
    ($logger:expr, $($rest:tt)*) => {
        $crate::console_log!($logger, $crate::internal::models::LogLevel::Warning, $($rest)*)
    };
}

#[macro_export]
macro_rules! console_error {
    ($logger:expr, $($rest:tt)*) => {
        $crate::console_log!($logger, $crate::internal::models::LogLevel::Error, $($rest)*)
    };
}

#[macro_export]
macro_rules! console_critical {
    ($logger:expr, $($rest:tt)*) => {
        $crate::console_log!($logger, $crate::internal::models::LogLevel::Critical, $($rest)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::logger::mock::{ConsoleOp, RecordingConsole};
    use crate::internal::models::ConsoleColor;

    fn recording(config: LoggerConfig) -> (ConsoleLogger<RecordingConsole>, RecordingConsole) {
        let console = RecordingConsole::new();
        (ConsoleLogger::with_console(config, console.clone()), console)
    }

    #[test]
    fn disabled_levels_touch_nothing() {
        let (logger, console) = recording(LoggerConfig::compact());
        logger.debug("hidden {X}", &[Value::from(1)]).unwrap();
        assert!(console.ops().is_empty());
    }

    #[test]
    fn color_is_set_then_restored() {
        let (logger, console) = recording(LoggerConfig::compact());
        logger.warning("careful", &[]).unwrap();
        assert_eq!(
            console.ops(),
            vec![
                ConsoleOp::SetColor(Some(ConsoleColor::Yellow)),
                ConsoleOp::Line("[WARN] careful".to_string()),
                ConsoleOp::SetColor(None),
            ]
        );
    }

    #[test]
    fn begin_scope_is_not_supported() {
        let (logger, _) = recording(LoggerConfig::default());
        assert!(matches!(
            logger.begin_scope("request"),
            Err(LoggerError::NotSupported(_))
        ));
    }

    #[test]
    fn builder_requires_configuration() {
        let result = ConsoleLogger::builder().console(RecordingConsole::new()).build_with(|_| RecordingConsole::new());
        assert!(matches!(result, Err(LoggerError::MissingConfiguration)));
    }

    #[test]
    fn macros_convert_arguments() {
        let (logger, console) = recording(LoggerConfig::compact());
        crate::console_info!(logger, "{Count} items in {Place}", 3, "cart").unwrap();
        assert_eq!(console.lines(), vec!["[INFO] 3 items in cart".to_string()]);
    }
}
