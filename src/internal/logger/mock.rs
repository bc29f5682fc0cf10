use std::io;
use std::sync::{Arc, Mutex};

use crate::internal::models::ConsoleColor;

use super::console::Console;

/// Everything a console was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleOp {
    SetColor(Option<ConsoleColor>),
    Line(String),
}

#[derive(Debug, Default)]
struct State {
    ops: Vec<ConsoleOp>,
    current: Option<ConsoleColor>,
}

/// Recording console for testing - clones share the same log, so a test
/// can hand one clone to a logger and inspect the other.
#[derive(Debug, Clone, Default)]
pub struct RecordingConsole {
    state: Arc<Mutex<State>>,
    fail_writes: bool,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Console whose register starts at `color`.
    pub fn with_foreground(color: ConsoleColor) -> Self {
        let console = Self::default();
        console.state.lock().unwrap().current = Some(color);
        console
    }

    /// Console whose line writes always fail.
    pub fn failing() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Get all recorded operations
    pub fn ops(&self) -> Vec<ConsoleOp> {
        self.state.lock().unwrap().ops.clone()
    }

    /// Get only the written lines
    pub fn lines(&self) -> Vec<String> {
        self.ops()
            .into_iter()
            .filter_map(|op| match op {
                ConsoleOp::Line(line) => Some(line),
                ConsoleOp::SetColor(_) => None,
            })
            .collect()
    }

    pub fn current(&self) -> Option<ConsoleColor> {
        self.state.lock().unwrap().current
    }
}

impl Console for RecordingConsole {
    fn foreground(&self) -> Option<ConsoleColor> {
        self.current()
    }

    fn set_foreground(&mut self, color: Option<ConsoleColor>) -> io::Result<()> {
        let mut state = self.state.lock().unwrap();
        state.current = color;
        state.ops.push(ConsoleOp::SetColor(color));
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "console closed"));
        }
        self.state
            .lock()
            .unwrap()
            .ops
            .push(ConsoleOp::Line(line.to_string()));
        Ok(())
    }
}
