// src/internal/formatter/env.rs

use std::path::Path;

use chrono::{DateTime, Local};

/// Clock supplies the timestamp for structured lines.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

/// PathProbe decides whether a path in a message exists and should be
/// hyperlinked.
pub trait PathProbe: Send + Sync {
    fn exists(&self, path: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Checks the local filesystem; any error reading metadata counts as
/// "does not exist".
#[derive(Debug, Clone, Copy, Default)]
pub struct FsProbe;

impl PathProbe for FsProbe {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).try_exists().unwrap_or(false)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub use fixed::{FixedClock, StaticProbe};

#[cfg(any(test, feature = "test-utils"))]
mod fixed {
    use std::collections::HashSet;

    use chrono::{DateTime, Local, TimeZone, Utc};

    use super::{Clock, PathProbe};

    /// Clock frozen at a single instant
    #[derive(Debug, Clone, Copy)]
    pub struct FixedClock(pub DateTime<Local>);

    impl FixedClock {
        /// Local wall-clock time; falls back to the epoch for
        /// nonexistent local times.
        pub fn at(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32, milli: u32) -> Self {
            let instant = Local
                .with_ymd_and_hms(year, month, day, hour, min, sec)
                .earliest()
                .map(|dt| dt + chrono::Duration::milliseconds(milli as i64))
                .unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH.with_timezone(&Local));
            Self(instant)
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Local> {
            self.0
        }
    }

    /// Probe answering from a fixed set of paths.
    #[derive(Debug, Clone, Default)]
    pub struct StaticProbe {
        existing: HashSet<String>,
    }

    impl StaticProbe {
        pub fn none() -> Self {
            Self::default()
        }

        pub fn with<I, S>(paths: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                existing: paths.into_iter().map(Into::into).collect(),
            }
        }
    }

    impl PathProbe for StaticProbe {
        fn exists(&self, path: &str) -> bool {
            self.existing.contains(path)
        }
    }
}
