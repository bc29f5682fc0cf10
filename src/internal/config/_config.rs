use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::internal::models::{ConsoleColor, LogLevel};

// Version information from build script - using option_env! for safety
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_TIME_FORMAT: &str = "yyyy-MM-dd HH:mm:ss.fff";
pub const DEFAULT_OUTPUT_FORMAT: &str = "{Timestamp} [{Level}] {Message}";

/// Get version information
pub fn get_version_info() -> String {
    let build_timestamp = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown");
    let rustc_semver = option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown");
    let cargo_target_triple = option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown");

    format!(
        "console-ext version {}\n\
         Built: {}\n\
         Rust: {}\n\
         Target: {}",
        VERSION, build_timestamp, rustc_semver, cargo_target_triple
    )
}

/// Foreground color for each level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelColors {
    #[serde(default = "default_trace_color")]
    pub trace: ConsoleColor,
    #[serde(default = "default_debug_color")]
    pub debug: ConsoleColor,
    #[serde(default = "default_information_color")]
    pub information: ConsoleColor,
    #[serde(default = "default_warning_color")]
    pub warning: ConsoleColor,
    #[serde(default = "default_error_color")]
    pub error: ConsoleColor,
    #[serde(default = "default_critical_color")]
    pub critical: ConsoleColor,
    #[serde(default = "default_none_color")]
    pub none: ConsoleColor,
}

impl Default for LevelColors {
    fn default() -> Self {
        Self {
            trace: default_trace_color(),
            debug: default_debug_color(),
            information: default_information_color(),
            warning: default_warning_color(),
            error: default_error_color(),
            critical: default_critical_color(),
            none: default_none_color(),
        }
    }
}

fn default_trace_color() -> ConsoleColor {
    ConsoleColor::White
}
fn default_debug_color() -> ConsoleColor {
    ConsoleColor::Cyan
}
fn default_information_color() -> ConsoleColor {
    ConsoleColor::Gray
}
fn default_warning_color() -> ConsoleColor {
    ConsoleColor::Yellow
}
fn default_error_color() -> ConsoleColor {
    ConsoleColor::Red
}
fn default_critical_color() -> ConsoleColor {
    ConsoleColor::Magenta
}
fn default_none_color() -> ConsoleColor {
    ConsoleColor::DarkGray
}

/// LoggerConfig is edited freely before it is handed to a logger; the
/// logger keeps its own copy and never changes it afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub min_level: LogLevel,
    #[serde(default)]
    pub colors: LevelColors,
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default = "default_output_format")]
    pub output_format: String,
    #[serde(default = "default_true")]
    pub include_timestamp: bool,
    #[serde(default = "default_true")]
    pub include_log_level: bool,
    #[serde(default)]
    pub include_event_id: bool,
    #[serde(default = "default_true")]
    pub enable_structured_logging: bool,
    #[serde(default = "default_true")]
    pub enable_hyperlinks: bool,
    #[serde(default)]
    pub single_line_exceptions: bool,
    #[serde(default = "default_true")]
    pub use_colors: bool,
}

fn default_time_format() -> String {
    DEFAULT_TIME_FORMAT.to_string()
}
fn default_output_format() -> String {
    DEFAULT_OUTPUT_FORMAT.to_string()
}
fn default_true() -> bool {
    true
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Information,
            colors: LevelColors::default(),
            time_format: default_time_format(),
            output_format: default_output_format(),
            include_timestamp: true,
            include_log_level: true,
            include_event_id: false,
            enable_structured_logging: true,
            enable_hyperlinks: true,
            single_line_exceptions: false,
            use_colors: true,
        }
    }
}

impl LoggerConfig {
    pub fn with_min_level(min_level: LogLevel) -> Self {
        Self {
            min_level,
            ..Default::default()
        }
    }

    /// Defaults without the timestamp: lines read `[INFO] message`.
    pub fn compact() -> Self {
        Self {
            include_timestamp: false,
            ..Default::default()
        }
    }

    /// Plain colored message text with no decoration.
    pub fn plain() -> Self {
        Self {
            enable_structured_logging: false,
            ..Default::default()
        }
    }

    /// Load configuration from the default file locations and environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_file(None)
    }

    /// Load configuration, layering an explicit file over the default
    /// locations. Environment variables (`CONSOLE_EXT__MIN_LEVEL`,
    /// `CONSOLE_EXT__COLORS__ERROR`, ...) win over every file.
    pub fn load_with_file(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("min_level", "information")?
            .set_default("time_format", DEFAULT_TIME_FORMAT)?
            .set_default("output_format", DEFAULT_OUTPUT_FORMAT)?
            .set_default("include_timestamp", true)?
            .set_default("include_log_level", true)?
            .set_default("include_event_id", false)?
            .set_default("enable_structured_logging", true)?
            .set_default("enable_hyperlinks", true)?
            .set_default("single_line_exceptions", false)?
            .set_default("use_colors", true)?
            .add_source(File::with_name("console-ext").required(false))
            .add_source(File::with_name("/etc/console-ext/config").required(false));

        if let Some(path) = path {
            debug!("Loading logger configuration from {}", path);
            builder = builder.add_source(File::with_name(path).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix("CONSOLE_EXT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let logger_config: LoggerConfig = config.try_deserialize()?;
        debug!("Resolved logger configuration: {:?}", logger_config);
        Ok(logger_config)
    }
}
