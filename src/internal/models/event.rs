// src/internal/models/event.rs

use std::fmt;

use super::exception::ExceptionRecord;
use super::level::LogLevel;
use super::value::Value;

/// EventId tags a log call with a numeric id and an optional symbolic name.
/// The default id of zero means "no event id".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct EventId {
    pub id: i32,
    pub name: Option<String>,
}

impl EventId {
    pub fn new(id: i32) -> Self {
        Self { id, name: None }
    }

    pub fn named(id: i32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.id == 0
    }
}

impl From<i32> for EventId {
    fn from(id: i32) -> Self {
        EventId::new(id)
    }
}

/// Displays the name when one is set, otherwise the numeric id.
impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.id),
        }
    }
}

/// LogEvent is the transient view of one log call.
#[derive(Debug, Clone, Copy)]
pub struct LogEvent<'a> {
    pub level: LogLevel,
    pub event_id: &'a EventId,
    pub template: &'a str,
    pub args: &'a [Value],
    pub exception: Option<&'a ExceptionRecord>,
}

impl<'a> LogEvent<'a> {
    pub fn new(level: LogLevel, event_id: &'a EventId, template: &'a str, args: &'a [Value]) -> Self {
        Self {
            level,
            event_id,
            template,
            args,
            exception: None,
        }
    }

    pub fn with_exception(mut self, exception: Option<&'a ExceptionRecord>) -> Self {
        self.exception = exception;
        self
    }
}
