// src/internal/input/mod.rs

pub mod password;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use password::{read_password, Key, KeySource, PasswordReader, TerminalKeys};
