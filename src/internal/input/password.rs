// src/internal/input/password.rs

use std::io::{self, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// A key press as far as masked input cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Backspace,
    Char(char),
    /// Ctrl+C. Raw mode swallows the terminal's SIGINT, so the reader
    /// turns this into an `Interrupted` error instead.
    Interrupt,
    /// Anything without a character: arrows, function keys, other
    /// control chords.
    Other,
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        let control = event.modifiers.contains(KeyModifiers::CONTROL);
        match event.code {
            KeyCode::Char('c') | KeyCode::Char('C') if control => Key::Interrupt,
            KeyCode::Char(_) if control => Key::Other,
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Char(c) => Key::Char(c),
            _ => Key::Other,
        }
    }
}

/// KeySource yields key presses one at a time, blocking until one arrives.
pub trait KeySource {
    fn read_key(&mut self) -> io::Result<Key>;
}

/// Key presses from the terminal. Raw mode is on for the lifetime of the
/// value so keys are neither echoed nor line-buffered.
pub struct TerminalKeys {
    _raw: RawModeGuard,
}

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

impl TerminalKeys {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self { _raw: RawModeGuard })
    }
}

impl KeySource for TerminalKeys {
    fn read_key(&mut self) -> io::Result<Key> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                return Ok(Key::from(key));
            }
        }
    }
}

/// PasswordReader collects one line of input while echoing a mask glyph
/// per character. There is no length limit and no way to cancel; callers
/// that need a timeout must wrap the call themselves.
pub struct PasswordReader<K, W> {
    keys: K,
    echo: W,
    mask: char,
}

impl<K: KeySource, W: Write> PasswordReader<K, W> {
    pub fn new(keys: K, echo: W) -> Self {
        Self {
            keys,
            echo,
            mask: '*',
        }
    }

    pub fn with_mask(mut self, mask: char) -> Self {
        self.mask = mask;
        self
    }

    /// Read until Enter and return what was typed. Ctrl+C abandons the
    /// input with `io::ErrorKind::Interrupted`.
    pub fn read_masked_line(&mut self) -> io::Result<String> {
        let mut buffer = String::new();
        let mut glyph = [0u8; 4];
        let glyph: &str = self.mask.encode_utf8(&mut glyph);

        loop {
            match self.keys.read_key()? {
                Key::Enter => return Ok(buffer),
                Key::Backspace => {
                    if buffer.pop().is_some() {
                        self.echo.write_all(b"\x08 \x08")?;
                        self.echo.flush()?;
                    }
                }
                Key::Char(c) => {
                    buffer.push(c);
                    self.echo.write_all(glyph.as_bytes())?;
                    self.echo.flush()?;
                }
                Key::Interrupt => {
                    return Err(io::Error::new(
                        io::ErrorKind::Interrupted,
                        "password input interrupted",
                    ));
                }
                Key::Other => {}
            }
        }
    }

    pub fn into_parts(self) -> (K, W) {
        (self.keys, self.echo)
    }
}

/// Read a masked password from the terminal, echoing `*` to standard
/// output.
pub fn read_password() -> io::Result<String> {
    let keys = TerminalKeys::new()?;
    PasswordReader::new(keys, io::stdout()).read_masked_line()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::input::mock::ScriptedKeys;

    #[test]
    fn other_keys_are_ignored() {
        let keys = ScriptedKeys::new([Key::Other, Key::Char('p'), Key::Other, Key::Enter]);
        let mut reader = PasswordReader::new(keys, Vec::new());
        assert_eq!(reader.read_masked_line().unwrap(), "p");
        assert_eq!(reader.into_parts().1, b"*");
    }

    #[test]
    fn custom_mask_glyph() {
        let keys = ScriptedKeys::new([Key::Char('a'), Key::Char('b'), Key::Enter]);
        let mut reader = PasswordReader::new(keys, Vec::new()).with_mask('•');
        assert_eq!(reader.read_masked_line().unwrap(), "ab");
        assert_eq!(String::from_utf8(reader.into_parts().1).unwrap(), "••");
    }

    #[test]
    fn control_chords_are_not_characters() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(Key::from(ctrl('c')), Key::Interrupt);
        assert_eq!(Key::from(ctrl('u')), Key::Other);
        assert_eq!(
            Key::from(KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT)),
            Key::Char('C')
        );
    }

    #[test]
    fn exhausted_source_is_an_error() {
        let keys = ScriptedKeys::new([Key::Char('a')]);
        let mut reader = PasswordReader::new(keys, Vec::new());
        assert_eq!(
            reader.read_masked_line().unwrap_err().kind(),
            io::ErrorKind::UnexpectedEof
        );
    }
}
