use std::collections::VecDeque;
use std::io;

use super::password::{Key, KeySource};

/// Key source replaying a fixed script; once it runs dry every read fails
/// with `UnexpectedEof`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Script typing `text` followed by Enter.
    pub fn typed(text: &str) -> Self {
        Self::new(text.chars().map(Key::Char).chain(std::iter::once(Key::Enter)))
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more scripted keys"))
    }
}
