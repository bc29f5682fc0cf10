//! Test fixtures for logger and formatter testing

#![allow(dead_code)]

pub mod events;

use std::sync::Arc;

use console_ext::internal::formatter::{FixedClock, MessageFormatter, StaticProbe};
use console_ext::internal::logger::mock::RecordingConsole;
use console_ext::{ConsoleLogger, LoggerConfig};

/// The instant every fixed clock reports: 2024-05-01 09:30:00.250 local
pub fn fixed_clock() -> FixedClock {
    FixedClock::at(2024, 5, 1, 9, 30, 0, 250)
}

/// Formatter with a fixed clock and the given existing paths
pub fn formatter_with_paths(paths: &[&str]) -> MessageFormatter {
    MessageFormatter::new(
        Arc::new(fixed_clock()),
        Arc::new(StaticProbe::with(paths.iter().copied())),
    )
}

/// Logger over a recording console, plus a handle to inspect it
pub fn recording_logger(config: LoggerConfig) -> (ConsoleLogger<RecordingConsole>, RecordingConsole) {
    let console = RecordingConsole::new();
    let logger = ConsoleLogger::builder()
        .config(config)
        .console(console.clone())
        .clock(fixed_clock())
        .probe(StaticProbe::none())
        .build_with(|_| RecordingConsole::new())
        .expect("config was supplied");
    (logger, console)
}
