use std::fmt::{self, Write as _};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use super::console::{Console, TerminalConsole};
use super::logger::{ConsoleLogger, Logger};
use crate::internal::config::LoggerConfig;
use crate::internal::models::{EventId, LogEvent, LogLevel};

/// Events from the formatting path itself are dropped so a diagnostic
/// emitted while writing a line can never loop back into the logger.
const INTERNAL_TARGET: &str = "console_ext::internal::";

/// Initialize the global `tracing` subscriber so that events are written
/// through a console logger built from `cfg`.
pub fn init_logger(cfg: &LoggerConfig) -> anyhow::Result<()> {
    // RUST_LOG wins over the configured minimum level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(cfg.min_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(ConsoleLayer::new(ConsoleLogger::new(cfg.clone())))
        .try_init()?;

    Ok(())
}

fn filter_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Information => "info",
        LogLevel::Warning => "warn",
        LogLevel::Error | LogLevel::Critical => "error",
        LogLevel::None => "off",
    }
}

pub fn level_from_tracing(level: &Level) -> LogLevel {
    match *level {
        Level::TRACE => LogLevel::Trace,
        Level::DEBUG => LogLevel::Debug,
        Level::INFO => LogLevel::Information,
        Level::WARN => LogLevel::Warning,
        _ => LogLevel::Error,
    }
}

/// ConsoleLayer forwards `tracing` events to a `ConsoleLogger`.
///
/// The `message` field becomes the message body, an integer `event_id`
/// field becomes the event id, and any other fields are appended as
/// `name=value` pairs.
pub struct ConsoleLayer<C: Console = TerminalConsole> {
    logger: ConsoleLogger<C>,
}

impl<C: Console> ConsoleLayer<C> {
    pub fn new(logger: ConsoleLogger<C>) -> Self {
        Self { logger }
    }
}

impl<S, C> Layer<S> for ConsoleLayer<C>
where
    S: Subscriber,
    C: Console + 'static,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if metadata.target().starts_with(INTERNAL_TARGET) {
            return;
        }

        let level = level_from_tracing(metadata.level());
        if !self.logger.is_enabled(level) {
            return;
        }

        let mut fields = FieldCollector::default();
        event.record(&mut fields);

        let event_id = fields.event_id.map(EventId::new).unwrap_or_default();
        // Already-formatted text: escape braces so nothing is read as a
        // placeholder.
        let template = fields.into_message().replace('{', "{{").replace('}', "}}");

        let _ = self.logger.log(&LogEvent::new(level, &event_id, &template, &[]));
    }
}

#[derive(Default)]
struct FieldCollector {
    message: String,
    extra: String,
    event_id: Option<i32>,
}

impl FieldCollector {
    fn into_message(self) -> String {
        if self.extra.is_empty() {
            self.message
        } else if self.message.is_empty() {
            self.extra
        } else {
            format!("{} {}", self.message, self.extra)
        }
    }

    fn push_extra(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.extra.is_empty() {
            self.extra.push(' ');
        }
        let _ = write!(self.extra, "{}={}", name, value);
    }
}

impl Visit for FieldCollector {
    fn record_i64(&mut self, field: &Field, value: i64) {
        if field.name() == "event_id" {
            self.event_id = i32::try_from(value).ok();
        } else {
            self.push_extra(field.name(), format_args!("{}", value));
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "event_id" {
            self.event_id = i32::try_from(value).ok();
        } else {
            self.push_extra(field.name(), format_args!("{}", value));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.push_extra(field.name(), format_args!("{}", value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.push_extra(field.name(), format_args!("{:?}", value));
        }
    }
}
