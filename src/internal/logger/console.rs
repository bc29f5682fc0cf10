// src/internal/logger/console.rs

use std::io::{self, Stdout, Write};

use crossterm::execute;
use crossterm::style::{Color, SetForegroundColor};

use crate::internal::models::ConsoleColor;

/// Console is the output side of the logger: a line sink with a
/// foreground color register. `None` means the terminal's default color.
pub trait Console: Send {
    fn foreground(&self) -> Option<ConsoleColor>;

    fn set_foreground(&mut self, color: Option<ConsoleColor>) -> io::Result<()>;

    /// Write `line` followed by a newline and flush.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// ANSI terminal console over any writer, standard output by default.
///
/// Terminals cannot report their current color, so the register is
/// tracked here; it starts at the terminal default.
#[derive(Debug)]
pub struct TerminalConsole<W: Write = Stdout> {
    out: W,
    current: Option<ConsoleColor>,
    colors: bool,
}

impl TerminalConsole<Stdout> {
    pub fn stdout(colors: bool) -> Self {
        Self::new(io::stdout(), colors)
    }
}

impl<W: Write> TerminalConsole<W> {
    /// With `colors` off the register is still tracked but no escape
    /// sequences are written.
    pub fn new(out: W, colors: bool) -> Self {
        Self {
            out,
            current: None,
            colors,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> Console for TerminalConsole<W> {
    fn foreground(&self) -> Option<ConsoleColor> {
        self.current
    }

    fn set_foreground(&mut self, color: Option<ConsoleColor>) -> io::Result<()> {
        if self.colors {
            // Only the foreground is touched; background and attributes
            // belong to the host.
            let target = color.map_or(Color::Reset, Color::from);
            execute!(self.out, SetForegroundColor(target))?;
        }
        self.current = color;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

/// ColorScope holds a console at a color and puts the previous color back
/// when dropped, whether or not the writes in between succeeded.
pub struct ColorScope<'a, C: Console + ?Sized> {
    console: &'a mut C,
    saved: Option<ConsoleColor>,
}

impl<'a, C: Console + ?Sized> ColorScope<'a, C> {
    pub fn enter(console: &'a mut C, color: ConsoleColor) -> io::Result<Self> {
        let saved = console.foreground();
        // Built before switching so a failed switch is still undone.
        let scope = Self { console, saved };
        scope.console.set_foreground(Some(color))?;
        Ok(scope)
    }

    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.console.write_line(line)
    }
}

impl<C: Console + ?Sized> Drop for ColorScope<'_, C> {
    fn drop(&mut self) {
        let _ = self.console.set_foreground(self.saved);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_color_line_and_restores_default_foreground() {
        let mut console = TerminalConsole::new(Vec::new(), true);
        {
            let mut scope = ColorScope::enter(&mut console, ConsoleColor::Red).unwrap();
            scope.write_line("boom").unwrap();
        }
        assert_eq!(console.foreground(), None);

        let bytes = String::from_utf8(console.into_inner()).unwrap();
        assert!(bytes.starts_with("\u{1b}["));
        assert!(bytes.ends_with("boom\n\u{1b}[39m"));
        assert!(!bytes.contains("\u{1b}[0m"));
    }

    #[test]
    fn restores_previous_color() {
        let mut console = TerminalConsole::new(Vec::new(), false);
        console.set_foreground(Some(ConsoleColor::Green)).unwrap();
        {
            let scope = ColorScope::enter(&mut console, ConsoleColor::Yellow).unwrap();
            assert_eq!(scope.console.foreground(), Some(ConsoleColor::Yellow));
        }
        assert_eq!(console.foreground(), Some(ConsoleColor::Green));
        assert!(console.into_inner().is_empty());
    }
}
