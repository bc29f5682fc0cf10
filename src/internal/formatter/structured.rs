// src/internal/formatter/structured.rs

use std::sync::Arc;

use super::env::{Clock, FsProbe, PathProbe, SystemClock};
use super::timestamp::format_timestamp;
use super::{exception, hyperlink, template};
use crate::internal::config::LoggerConfig;
use crate::internal::models::LogEvent;

const TIMESTAMP: &str = "{Timestamp}";
const LEVEL: &str = "{Level}";
const EVENT_ID: &str = "{EventId}";
const MESSAGE: &str = "{Message}";
const EXCEPTION: &str = "{Exception}";

/// MessageFormatter turns a log event into the text written to the console.
///
/// The clock and path probe are the only sources of nondeterminism; with
/// fixed implementations of both, formatting is a pure function of the
/// event and the configuration.
#[derive(Clone)]
pub struct MessageFormatter {
    clock: Arc<dyn Clock>,
    probe: Arc<dyn PathProbe>,
}

impl Default for MessageFormatter {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(FsProbe))
    }
}

impl std::fmt::Debug for MessageFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageFormatter").finish_non_exhaustive()
    }
}

impl MessageFormatter {
    pub fn new(clock: Arc<dyn Clock>, probe: Arc<dyn PathProbe>) -> Self {
        Self { clock, probe }
    }

    /// Render the full output for `event`. With structured logging off
    /// this is only the substituted message template.
    pub fn format(&self, event: &LogEvent<'_>, config: &LoggerConfig) -> String {
        let body = template::render(event.template, event.args);
        if !config.enable_structured_logging {
            return body;
        }

        let body = if config.enable_hyperlinks {
            hyperlink::link_message(&body, self.probe.as_ref())
        } else {
            body
        };

        let mut line = config.output_format.clone();

        line = if config.include_timestamp && line.contains(TIMESTAMP) {
            let now = self.clock.now();
            line.replace(TIMESTAMP, &format_timestamp(&now, &config.time_format))
        } else {
            remove_token(&line, TIMESTAMP)
        };

        line = if config.include_log_level {
            line.replace(LEVEL, event.level.label())
        } else {
            remove_token(&line, LEVEL)
        };

        line = if config.include_event_id && !event.event_id.is_empty() {
            line.replace(EVENT_ID, &event.event_id.to_string())
        } else {
            remove_token(&line, EVENT_ID)
        };

        let exception_text = event
            .exception
            .map(|record| exception::render(record, config.single_line_exceptions));
        if exception_text.is_none() {
            line = remove_token(&line, EXCEPTION);
        }

        let inline_exception = line.contains(EXCEPTION);
        let assembled = match &exception_text {
            Some(text) if inline_exception => {
                substitute(&line, &[(MESSAGE, &body), (EXCEPTION, text)])
            }
            _ => substitute(&line, &[(MESSAGE, &body)]),
        };
        let mut out = cleanup(&assembled);

        // An appended block keeps its stack trace indentation.
        if let Some(text) = exception_text {
            if !inline_exception {
                out.push('\n');
                out.push_str(&text);
            }
        }
        out
    }
}

/// Remove a token together with brackets that directly enclose it.
fn remove_token(line: &str, token: &str) -> String {
    line.replace(&format!("[{}]", token), "")
        .replace(&format!("({})", token), "")
        .replace(token, "")
}

/// Remove empty bracket pairs, collapse runs of spaces and trim.
fn cleanup(line: &str) -> String {
    let mut out = line.to_string();
    loop {
        let next = out.replace("[]", "").replace("()", "").replace("  ", " ");
        if next == out {
            break;
        }
        out = next;
    }
    out.trim().to_string()
}

/// Replace tokens in a single left-to-right pass so inserted text is never
/// scanned for further tokens.
fn substitute(line: &str, tokens: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;
    loop {
        let next = tokens
            .iter()
            .filter_map(|(token, value)| rest.find(token).map(|pos| (pos, *token, *value)))
            .min_by_key(|(pos, _, _)| *pos);
        match next {
            Some((pos, token, value)) => {
                out.push_str(&rest[..pos]);
                out.push_str(value);
                rest = &rest[pos + token.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}
