// src/internal/models/level.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::color::ConsoleColor;
use crate::internal::config::LevelColors;
use crate::internal::error::LoggerError;

/// LogLevel orders messages by severity; `None` disables output entirely
/// when used as the minimum level.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[serde(alias = "trce")]
    Trace = 0,
    #[serde(alias = "dbug")]
    Debug = 1,
    #[serde(alias = "info")]
    #[default]
    Information = 2,
    #[serde(alias = "warn")]
    Warning = 3,
    #[serde(alias = "fail")]
    Error = 4,
    #[serde(alias = "crit")]
    Critical = 5,
    None = 6,
}

/// Number of defined levels, `None` included.
pub const LEVEL_COUNT: usize = 7;

const LEVELS: [LogLevel; LEVEL_COUNT] = [
    LogLevel::Trace,
    LogLevel::Debug,
    LogLevel::Information,
    LogLevel::Warning,
    LogLevel::Error,
    LogLevel::Critical,
    LogLevel::None,
];

const LABELS: [&str; LEVEL_COUNT] = ["TRCE", "DBUG", "INFO", "WARN", "FAIL", "CRIT", "NONE"];

impl LogLevel {
    /// All levels in ascending severity.
    pub fn all() -> &'static [LogLevel; LEVEL_COUNT] {
        &LEVELS
    }

    pub fn ordinal(self) -> usize {
        self as usize
    }

    /// Map a raw ordinal back to a level.
    pub fn from_ordinal(value: u8) -> Result<Self, LoggerError> {
        LEVELS
            .get(value as usize)
            .copied()
            .ok_or_else(|| LoggerError::InvalidLevel(value.to_string()))
    }

    /// Fixed four letter label used in structured output
    pub fn label(self) -> &'static str {
        LABELS[self.ordinal()]
    }
}

impl TryFrom<u8> for LogLevel {
    type Error = LoggerError;

    fn try_from(value: u8) -> Result<Self, LoggerError> {
        Self::from_ordinal(value)
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" | "trce" => Ok(LogLevel::Trace),
            "debug" | "dbug" => Ok(LogLevel::Debug),
            "information" | "info" => Ok(LogLevel::Information),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" | "fail" => Ok(LogLevel::Error),
            "critical" | "crit" => Ok(LogLevel::Critical),
            "none" | "off" => Ok(LogLevel::None),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Trace => "Trace",
            LogLevel::Debug => "Debug",
            LogLevel::Information => "Information",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
            LogLevel::Critical => "Critical",
            LogLevel::None => "None",
        };
        f.write_str(name)
    }
}

/// Lookup table from level ordinal to display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelColorMap {
    colors: [ConsoleColor; LEVEL_COUNT],
}

impl LevelColorMap {
    pub fn color_for(&self, level: LogLevel) -> ConsoleColor {
        self.colors[level.ordinal()]
    }

    /// Lookup by raw ordinal, for callers holding an untyped level value.
    pub fn color_for_ordinal(&self, ordinal: u8) -> Result<ConsoleColor, LoggerError> {
        LogLevel::from_ordinal(ordinal).map(|level| self.color_for(level))
    }
}

impl From<&LevelColors> for LevelColorMap {
    fn from(colors: &LevelColors) -> Self {
        Self {
            colors: [
                colors.trace,
                colors.debug,
                colors.information,
                colors.warning,
                colors.error,
                colors.critical,
                colors.none,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_totally_ordered() {
        for pair in LogLevel::all().windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn labels_are_four_letters() {
        let labels: Vec<_> = LogLevel::all().iter().map(|l| l.label()).collect();
        assert_eq!(
            labels,
            vec!["TRCE", "DBUG", "INFO", "WARN", "FAIL", "CRIT", "NONE"]
        );
    }

    #[test]
    fn ordinal_out_of_range_is_invalid_level() {
        assert_eq!(LogLevel::from_ordinal(4).unwrap(), LogLevel::Error);
        assert_eq!(LogLevel::try_from(6u8).unwrap(), LogLevel::None);
        assert!(matches!(
            LogLevel::try_from(7u8),
            Err(LoggerError::InvalidLevel(ref v)) if v == "7"
        ));
    }

    #[test]
    fn parses_names_and_abbreviations() {
        assert_eq!("info".parse::<LogLevel>().unwrap(), LogLevel::Information);
        assert_eq!("Warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("FAIL".parse::<LogLevel>().unwrap(), LogLevel::Error);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn color_map_follows_configuration() {
        let mut colors = LevelColors::default();
        colors.information = ConsoleColor::Green;
        let map = LevelColorMap::from(&colors);

        assert_eq!(map.color_for(LogLevel::Information), ConsoleColor::Green);
        assert_eq!(map.color_for(LogLevel::Error), ConsoleColor::Red);
        assert_eq!(map.color_for_ordinal(6).unwrap(), ConsoleColor::DarkGray);
        assert!(map.color_for_ordinal(9).is_err());
    }
}
