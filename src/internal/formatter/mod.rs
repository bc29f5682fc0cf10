// src/internal/formatter/mod.rs

pub mod env;
pub mod exception;
pub mod hyperlink;
pub mod structured;
pub mod template;
pub mod timestamp;

pub use env::{Clock, FsProbe, PathProbe, SystemClock};
#[cfg(any(test, feature = "test-utils"))]
pub use env::{FixedClock, StaticProbe};
pub use structured::MessageFormatter;
